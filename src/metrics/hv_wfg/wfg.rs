use std::cmp::Ordering;

use crate::core::HError;
use crate::metrics::hypervolume::check_args;
use crate::metrics::hypervolume_2d::volume_2d;
use crate::metrics::HyperVolumeCalculator;

/// This struct implements the algorithm by While et al. (2012) to calculate the hyper-volume of
/// a set of points with any number of minimised objectives.
///
/// > Lyndon While, Lucas Bradstreet, and Luigi Barone. A Fast Way of Calculating Exact
/// > Hypervolumes. IEEE Transactions on Evolutionary Computation 16(1), 2012.
///
/// **IMPLEMENTATION NOTES**:
/// 1) The points are sliced along the last objective and the exclusive hyper-volume of each
///    slice is calculated on the remaining objectives.
/// 2) The 2-objective case is calculated with a sweep line (see [`crate::metrics::HyperVolume2D`]).
/// 3) Dominated points are removed from each limit set before recursing.
#[derive(Default, Debug, Clone, Copy)]
pub struct HyperVolumeWfg;

impl HyperVolumeCalculator for HyperVolumeWfg {
    fn compute(&self, points: &[Vec<f64>], reference_point: &[f64]) -> Result<f64, HError> {
        check_args(points, reference_point)?;
        Ok(volume(points.to_vec(), reference_point, reference_point.len()))
    }

    fn name(&self) -> String {
        "Hyper-volume While et al. (2012)".to_string()
    }
}

/// Calculate the hyper-volume of `points` using the first `obj_count` objectives.
///
/// # Arguments
///
/// * `points`: The points.
/// * `reference_point`: The reference point.
/// * `obj_count`: The number of objectives to process.
///
/// returns: `f64`
fn volume(mut points: Vec<Vec<f64>>, reference_point: &[f64], obj_count: usize) -> f64 {
    if points.is_empty() {
        return 0.0;
    }
    match obj_count {
        1 => {
            return points
                .iter()
                .map(|p| reference_point[0] - p[0])
                .fold(0.0, f64::max)
        }
        2 => return volume_2d(&points, reference_point),
        _ => {}
    }

    // slice along the last objective; each point contributes its exclusive volume with respect
    // to the points that precede it
    let last = obj_count - 1;
    points.sort_by(|a, b| a[last].total_cmp(&b[last]));

    let mut volume = 0.0;
    for (p_idx, point) in points.iter().enumerate() {
        let depth = reference_point[last] - point[last];
        if depth <= 0.0 {
            continue;
        }
        volume += depth * exclusive_hv(point, &points[..p_idx], reference_point, last);
    }
    volume
}

/// Calculate the exclusive hyper-volume of `point` relative to the set `others`.
///
/// # Arguments
///
/// * `point`: The point.
/// * `others`: The points the exclusive volume is calculated against.
/// * `reference_point`: The reference point.
/// * `obj_count`: The number of objectives to process.
///
/// returns: `f64`
fn exclusive_hv(
    point: &[f64],
    others: &[Vec<f64>],
    reference_point: &[f64],
    obj_count: usize,
) -> f64 {
    let volume = inclusive_hv(point, reference_point, obj_count);
    if others.is_empty() || volume == 0.0 {
        return volume;
    }
    volume - self::volume(limit_set(point, others, obj_count), reference_point, obj_count)
}

/// Calculate the volume of the box between a point and the reference point.
///
/// # Arguments
///
/// * `point`: The point.
/// * `reference_point`: The reference point.
/// * `obj_count`: The number of objectives to process.
///
/// returns: `f64`
fn inclusive_hv(point: &[f64], reference_point: &[f64], obj_count: usize) -> f64 {
    point[..obj_count]
        .iter()
        .zip(reference_point)
        .map(|(p, r)| (r - p).max(0.0))
        .product()
}

/// Build the non-dominated set of the points in `others` limited by `point`, i.e. each
/// coordinate is replaced by the worst value between the point and the other point.
///
/// # Arguments
///
/// * `point`: The point limiting the set.
/// * `others`: The points to limit.
/// * `obj_count`: The number of objectives to process.
///
/// returns: `Vec<Vec<f64>>`
fn limit_set(point: &[f64], others: &[Vec<f64>], obj_count: usize) -> Vec<Vec<f64>> {
    let limited: Vec<Vec<f64>> = others
        .iter()
        .map(|q| {
            q[..obj_count]
                .iter()
                .zip(point)
                .map(|(qv, pv)| qv.max(*pv))
                .collect()
        })
        .collect();

    limited
        .iter()
        .enumerate()
        .filter(|(i, p)| {
            !limited.iter().enumerate().any(|(j, q)| {
                // keep the first of duplicated points
                match weakly_dominates(q, p) {
                    Some(Ordering::Less) => true,
                    Some(Ordering::Equal) => j < *i,
                    _ => false,
                }
            })
        })
        .map(|(_, p)| p.clone())
        .collect()
}

/// Check whether `p1` is not worse than `p2` in every objective.
///
/// returns: `Option<Ordering>`. `Some(Ordering::Less)` if `p1` dominates `p2`,
/// `Some(Ordering::Equal)` if the points are identical or `None` otherwise.
fn weakly_dominates(p1: &[f64], p2: &[f64]) -> Option<Ordering> {
    let mut strictly_better = false;
    for (v1, v2) in p1.iter().zip(p2) {
        if v1 > v2 {
            return None;
        }
        if v1 < v2 {
            strictly_better = true;
        }
    }
    if strictly_better {
        Some(Ordering::Less)
    } else {
        Some(Ordering::Equal)
    }
}
