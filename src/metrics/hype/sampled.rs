use log::{debug, warn};
use rand::{Rng, RngCore};
use rayon::prelude::*;

use crate::core::{Front, HError};
use crate::metrics::{alpha_weights, DEFAULT_SAMPLED_SAMPLES};

/// Estimate the HypE indicator `Ih_k` for each point of a front using Monte-Carlo integration.
/// `number_of_samples` points are uniformly drawn in the box between the coordinate-wise minimum
/// of the front and the reference point. Each sample dominated by `c` points of the front adds
/// `alpha[c - 1]` (see [`alpha_weights`]) to the indicator of each of those points. The sums are
/// finally scaled by the box volume divided by the number of samples.
///
/// Implemented based on:
/// > Johannes Bader, Eckart Zitzler. HypE: An Algorithm for Fast Hypervolume-Based
/// > Many-Objective Optimization. Evolutionary Computation 19(1), 2011.
///
/// **IMPLEMENTATION NOTES**:
/// 1) The estimate is unbiased and its variance decreases with `number_of_samples`.
/// 2) The samples are always drawn serially from `rng`, so the same seed gives the same samples
///    whether `parallel` is enabled or not.
///
/// # Arguments
///
/// * `front`: The front.
/// * `k`: The number of points to remove. This must be between `1` and the front size.
/// * `reference_point`: The reference point. When `None`, this defaults to the coordinate-wise
///   maximum of the front.
/// * `number_of_samples`: The number of samples to draw. When `None`, this defaults to
///   [`DEFAULT_SAMPLED_SAMPLES`].
/// * `rng`: The random number generator.
/// * `parallel`: Whether to check the samples against the front in threads.
///
/// returns: `Result<Vec<f64>, HError>`. The indicator of each point in the same order as the
/// front points.
pub fn hype_indicator_sampled(
    front: &Front,
    k: usize,
    reference_point: Option<&[f64]>,
    number_of_samples: Option<usize>,
    rng: &mut dyn RngCore,
    parallel: bool,
) -> Result<Vec<f64>, HError> {
    let metric_name = "Sampled HypE indicator".to_string();
    let number_of_samples = number_of_samples.unwrap_or(DEFAULT_SAMPLED_SAMPLES);
    if number_of_samples == 0 {
        return Err(HError::Metric(
            metric_name,
            "The number of samples must be at least 1".to_string(),
        ));
    }

    let alpha = alpha_weights(front.len(), k)?;
    let upper_bounds = front.reference_point(reference_point)?;
    let lower_bounds = front.lower_bounds()?;
    let widths: Vec<f64> = upper_bounds
        .iter()
        .zip(&lower_bounds)
        .map(|(u, l)| u - l)
        .collect();
    let box_volume: f64 = widths.iter().product();
    if box_volume <= 0.0 {
        warn!(
            "The sampling box between {:?} and {:?} has no volume",
            lower_bounds, upper_bounds
        );
    }
    debug!(
        "Estimating HypE indicator for {} points with k={} and {} samples in a box of volume {}",
        front.len(),
        k,
        number_of_samples,
        box_volume
    );

    let number_of_objectives = front.number_of_objectives();
    let mut samples = Vec::with_capacity(number_of_samples * number_of_objectives);
    for _ in 0..number_of_samples {
        for (lower, width) in lower_bounds.iter().zip(&widths) {
            samples.push(lower + rng.gen::<f64>() * width);
        }
    }

    let points = front.points();
    let indicator = if parallel {
        samples
            .par_chunks(number_of_objectives)
            .fold(
                || (vec![0.0; points.len()], Vec::with_capacity(points.len())),
                |(mut indicator, mut dominators), sample| {
                    add_sample(points, &alpha, sample, &mut dominators, &mut indicator);
                    (indicator, dominators)
                },
            )
            .map(|(indicator, _)| indicator)
            .reduce(
                || vec![0.0; points.len()],
                |mut a, b| {
                    a.iter_mut().zip(b).for_each(|(v1, v2)| *v1 += v2);
                    a
                },
            )
    } else {
        let mut indicator = vec![0.0; points.len()];
        let mut dominators = Vec::with_capacity(points.len());
        for sample in samples.chunks(number_of_objectives) {
            add_sample(points, &alpha, sample, &mut dominators, &mut indicator);
        }
        indicator
    };

    let scale = box_volume / number_of_samples as f64;
    Ok(indicator.into_iter().map(|v| v * scale).collect())
}

/// Add the weight of one sample to the indicator of the points dominating it.
///
/// # Arguments
///
/// * `points`: The front points.
/// * `alpha`: The HypE weights.
/// * `sample`: The sample coordinates.
/// * `dominators`: A buffer to store the indices of the points dominating the sample.
/// * `indicator`: The indicator being accumulated.
///
/// returns: `()`
fn add_sample(
    points: &[Vec<f64>],
    alpha: &[f64],
    sample: &[f64],
    dominators: &mut Vec<usize>,
    indicator: &mut [f64],
) {
    dominators.clear();
    dominators.extend(
        points
            .iter()
            .enumerate()
            .filter(|(_, p)| p.iter().zip(sample).all(|(pv, sv)| sv >= pv))
            .map(|(idx, _)| idx),
    );
    if let Some(count) = dominators.len().checked_sub(1) {
        let weight = alpha[count];
        for idx in dominators.iter() {
            indicator[*idx] += weight;
        }
    }
}

#[cfg(test)]
mod test {
    use crate::core::test_utils::{assert_all_close, parse_test_data_file};
    use crate::core::{get_rng, Front, HError};
    use crate::metrics::{hype_indicator_exact, hype_indicator_sampled, DEFAULT_SAMPLED_SAMPLES};

    #[test]
    fn test_wrong_args() {
        let front = Front::new(vec![vec![1.0, 9.0], vec![9.0, 1.0]]).unwrap();
        let mut rng = get_rng(Some(1));
        assert!(matches!(
            hype_indicator_sampled(&front, 3, None, Some(100), &mut rng, false),
            Err(HError::InvalidRank(3, 2))
        ));
        assert!(hype_indicator_sampled(&front, 1, None, Some(0), &mut rng, false)
            .unwrap_err()
            .to_string()
            .contains("The number of samples must be at least 1"));
        assert!(matches!(
            hype_indicator_sampled(&front, 1, Some(&[1.0]), Some(100), &mut rng, false),
            Err(HError::ShapeMismatch(_, 1, 2))
        ));
    }

    #[test]
    /// The estimate is close to the exact values
    fn test_simple_front() {
        let front = Front::new(vec![vec![1.0, 9.0], vec![5.0, 5.0], vec![9.0, 1.0]]).unwrap();
        let ref_point = [10.0, 10.0];
        let mut rng = get_rng(Some(10));

        for k in 1..=3 {
            let exact = hype_indicator_exact(&front, k, Some(&ref_point)).unwrap();
            let sampled =
                hype_indicator_sampled(&front, k, Some(&ref_point), Some(100_000), &mut rng, false)
                    .unwrap();
            assert_all_close(&sampled, &exact, 0.1, 0.0);
        }
    }

    #[test]
    /// The same seed gives the same estimate, also when the samples are processed in threads
    fn test_seed() {
        let front = Front::new(vec![vec![1.0, 9.0], vec![5.0, 5.0], vec![9.0, 1.0]]).unwrap();
        let h1 = hype_indicator_sampled(&front, 2, None, Some(5000), &mut get_rng(Some(3)), false)
            .unwrap();
        let h2 = hype_indicator_sampled(&front, 2, None, Some(5000), &mut get_rng(Some(3)), false)
            .unwrap();
        let h3 =
            hype_indicator_sampled(&front, 2, None, Some(5000), &mut get_rng(Some(3)), true).unwrap();
        assert_eq!(h1, h2);
        assert_all_close(&h3, &h1, 1e-9, 1e-12);
    }

    #[test]
    /// Without a sample count, the default number of samples is drawn
    fn test_default_samples() {
        let front = Front::new(vec![vec![1.0, 9.0], vec![5.0, 5.0], vec![9.0, 1.0]]).unwrap();
        let ref_point: Option<&[f64]> = Some(&[10.0, 10.0]);
        let h_default =
            hype_indicator_sampled(&front, 1, ref_point, None, &mut get_rng(Some(4)), false)
                .unwrap();
        let h = hype_indicator_sampled(
            &front,
            1,
            ref_point,
            Some(DEFAULT_SAMPLED_SAMPLES),
            &mut get_rng(Some(4)),
            false,
        )
        .unwrap();
        assert_eq!(h_default, h);

        let h_fewer =
            hype_indicator_sampled(&front, 1, ref_point, Some(100), &mut get_rng(Some(4)), false)
                .unwrap();
        assert_ne!(h_default, h_fewer);
    }

    #[test]
    /// Degenerate fronts do not fail
    fn test_degenerate_fronts() {
        let mut rng = get_rng(Some(1));

        // one point and no volume
        let front = Front::new(vec![vec![1.0, 2.0]]).unwrap();
        let h = hype_indicator_sampled(&front, 1, None, Some(1000), &mut rng, false).unwrap();
        assert_eq!(h, vec![0.0]);

        // one point with a reference point - the point dominates the whole box
        let h =
            hype_indicator_sampled(&front, 1, Some(&[3.0, 5.0]), Some(1000), &mut rng, false).unwrap();
        assert_all_close(&h, &[6.0], 1e-12, 1e-12);

        // identical points
        let front = Front::new(vec![vec![1.0, 1.0], vec![1.0, 1.0]]).unwrap();
        let h = hype_indicator_sampled(&front, 2, None, Some(1000), &mut rng, true).unwrap();
        assert_eq!(h, vec![0.0, 0.0]);
    }

    #[test]
    /// Test against the reference values for 20 points on the unit hypersphere
    fn test_sphere_fronts() {
        let mut rng = get_rng(Some(1));
        for file in ["sphere_d2_n20", "sphere_d3_n20", "sphere_d4_n20"] {
            let data = parse_test_data_file(file).unwrap();
            let front = Front::new(data.points.clone()).unwrap();
            let ref_point = Some(data.reference_point.as_slice());

            for case in data.cases.iter() {
                let h =
                    hype_indicator_sampled(&front, case.k, ref_point, Some(100_000), &mut rng, true)
                        .unwrap();
                assert!(h.iter().all(|v| *v >= 0.0));
                assert_all_close(&h, &case.indicator, 1e-3, 1e-3);
            }

            // remove all points
            let h = hype_indicator_sampled(&front, front.len(), ref_point, Some(1000), &mut rng, false)
                .unwrap();
            assert!(h.iter().all(|v| v.is_finite() && *v >= 0.0));
        }
    }
}
