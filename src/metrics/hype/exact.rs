use log::debug;

use crate::core::{Front, HError};
use crate::metrics::alpha_weights;

/// Calculate the exact HypE indicator `Ih_k` for each point of a front. The dominated space is
/// sliced one objective at a time, starting from the last one: the points are sorted on the
/// active objective and the slab between two consecutive points (or between the last point and
/// the reference point) is extruded over the indicator of the leading points calculated on the
/// remaining objectives. On the first objective, each slab is shared among the leading points
/// with the weights given by [`alpha_weights`].
///
/// Implemented based on:
/// > Johannes Bader, Eckart Zitzler. HypE: An Algorithm for Fast Hypervolume-Based
/// > Many-Objective Optimization. Evolutionary Computation 19(1), 2011.
///
/// **IMPLEMENTATION NOTES**:
/// 1) The cost grows exponentially with the number of objectives; use
///    [`crate::metrics::hype_indicator_sampled`] for large problems.
/// 2) Points are sorted on each objective with a stable sort: points with the same coordinate
///    keep the order they have at the upper recursion level (the front order on the last
///    objective). With ties, the indicator split among the tied points depends on this order.
///
/// # Arguments
///
/// * `front`: The front.
/// * `k`: The number of points to remove. This must be between `1` and the front size.
/// * `reference_point`: The reference point. When `None`, this defaults to the coordinate-wise
///   maximum of the front.
///
/// returns: `Result<Vec<f64>, HError>`. The indicator of each point in the same order as the
/// front points.
pub fn hype_indicator_exact(
    front: &Front,
    k: usize,
    reference_point: Option<&[f64]>,
) -> Result<Vec<f64>, HError> {
    let ref_point = front.reference_point(reference_point)?;
    let alpha = alpha_weights(front.len(), k)?;
    debug!(
        "Calculating exact HypE indicator for {} points with k={} and reference point {:?}",
        front.len(),
        k,
        ref_point
    );

    let slicer = Slicer {
        points: front.points(),
        reference_point: &ref_point,
        alpha: &alpha,
        k,
    };

    let number_of_objectives = front.number_of_objectives();
    let mut indicator = vec![0.0; front.len()];
    // one buffer with the sorted point indices for each objective, reused at the same depth
    let mut buffers = vec![Vec::with_capacity(front.len()); number_of_objectives];
    let rows: Vec<usize> = (0..front.len()).collect();
    slicer.slice(
        &rows,
        number_of_objectives - 1,
        1.0,
        &mut buffers,
        &mut indicator,
    );

    Ok(indicator)
}

/// The data shared by the recursion levels.
struct Slicer<'a> {
    /// The front points.
    points: &'a [Vec<f64>],
    /// The reference point.
    reference_point: &'a [f64],
    /// The HypE weights.
    alpha: &'a [f64],
    /// The number of points to remove.
    k: usize,
}

impl Slicer<'_> {
    /// Add the contribution of the points in `rows` on the objectives up to `active_obj`.
    ///
    /// # Arguments
    ///
    /// * `rows`: The indices of the points to process.
    /// * `active_obj`: The index of the objective to slice.
    /// * `scale`: The product of the extrusions of the upper recursion levels.
    /// * `buffers`: The index buffers for the objectives up to `active_obj`.
    /// * `indicator`: The indicator being accumulated.
    ///
    /// returns: `()`
    fn slice(
        &self,
        rows: &[usize],
        active_obj: usize,
        scale: f64,
        buffers: &mut [Vec<usize>],
        indicator: &mut [f64],
    ) {
        let Some((sorted, lower_buffers)) = buffers.split_last_mut() else {
            return;
        };
        sorted.clear();
        sorted.extend_from_slice(rows);
        sorted.sort_by(|a, b| self.points[*a][active_obj].total_cmp(&self.points[*b][active_obj]));

        let size = sorted.len();
        for i in 0..size {
            let upper = match sorted.get(i + 1) {
                Some(next) => self.points[*next][active_obj],
                None => self.reference_point[active_obj],
            };
            let extrusion = upper - self.points[sorted[i]][active_obj];

            if active_obj == 0 {
                if i < self.k {
                    let weight = scale * extrusion * self.alpha[i];
                    for row in &sorted[..=i] {
                        indicator[*row] += weight;
                    }
                }
            } else if extrusion > 0.0 {
                self.slice(
                    &sorted[..=i],
                    active_obj - 1,
                    scale * extrusion,
                    lower_buffers,
                    indicator,
                );
            }
        }
    }
}
