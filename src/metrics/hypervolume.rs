use log::debug;

use crate::core::HError;
use crate::metrics::{HyperVolume2D, HyperVolumeWfg};

/// A capability to calculate the hyper-volume dominated by a set of points and bounded by a
/// reference point. All objectives are assumed to be minimised.
pub trait HyperVolumeCalculator: Send + Sync {
    /// Calculate the hyper-volume.
    ///
    /// # Arguments
    ///
    /// * `points`: The points. Each nested vector must have the same size as `reference_point`.
    /// * `reference_point`: The reference or anti-optimal point.
    ///
    /// returns: `Result<f64, HError>`. The hyper-volume or zero if `points` is empty.
    fn compute(&self, points: &[Vec<f64>], reference_point: &[f64]) -> Result<f64, HError>;

    /// The name of the method.
    fn name(&self) -> String;
}

/// Check the input arguments of the hyper-volume calculators.
///
/// # Arguments
///
/// * `points`: The points to use in the calculation.
/// * `reference_point`: The reference or anti-optimal point to use in the calculation.
///
/// returns: `Result<(), HError>`
pub(crate) fn check_args(points: &[Vec<f64>], reference_point: &[f64]) -> Result<(), HError> {
    if reference_point.is_empty() {
        return Err(HError::Metric(
            "Hyper-volume".to_string(),
            "The reference point must have at least one coordinate".to_string(),
        ));
    }
    for (point_idx, point) in points.iter().enumerate() {
        if point.len() != reference_point.len() {
            return Err(HError::ShapeMismatch(
                format!("point #{}", point_idx),
                point.len(),
                reference_point.len(),
            ));
        }
        if point.iter().any(|v| v.is_nan()) {
            return Err(HError::NaN(point_idx));
        }
    }
    Ok(())
}

/// Calculate the exact hyper-volume. Depending on the number of objectives `d`, a different
/// method is used to ensure a correct and fast calculation:
///
/// - with `2` objectives: by summing the rectangle areas between the points and the reference
///   point with [`HyperVolume2D`].
/// - with `1` or `3` or more objectives: by using the algorithm proposed by
///   [While et al. (2012)](http://dx.doi.org/10.1109/TEVC.2010.2077298) in [`HyperVolumeWfg`].
#[derive(Default, Debug, Clone, Copy)]
pub struct HyperVolume;

impl HyperVolumeCalculator for HyperVolume {
    fn compute(&self, points: &[Vec<f64>], reference_point: &[f64]) -> Result<f64, HError> {
        match reference_point.len() {
            2 => {
                debug!("Using {} for {} points", HyperVolume2D.name(), points.len());
                HyperVolume2D.compute(points, reference_point)
            }
            _ => {
                debug!("Using {} for {} points", HyperVolumeWfg.name(), points.len());
                HyperVolumeWfg.compute(points, reference_point)
            }
        }
    }

    fn name(&self) -> String {
        "Hyper-volume".to_string()
    }
}
