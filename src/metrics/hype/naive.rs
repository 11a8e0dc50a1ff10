use log::debug;
use rayon::prelude::*;

use crate::core::{Front, HError};
use crate::metrics::{HyperVolume, HyperVolumeCalculator};

/// Calculate the HypE indicator `Ih_1` by using leave-one-out hyper-volumes: the indicator of
/// each point is the hyper-volume of the whole front minus the hyper-volume of the front
/// without the point. This requires `n + 1` hyper-volume calculations and it is mainly used to
/// validate [`crate::metrics::hype_indicator_exact`].
///
/// The hyper-volume method is chosen by the caller with the `calculator` argument. Use
/// [`NaiveIndicator`] to fix the method once.
///
/// # Arguments
///
/// * `front`: The front.
/// * `reference_point`: The reference point. When `None`, this defaults to the coordinate-wise
///   maximum of the front.
/// * `calculator`: The method to calculate the hyper-volume.
/// * `parallel`: Whether to calculate the leave-one-out volumes in threads.
///
/// returns: `Result<Vec<f64>, HError>`. The indicator of each point in the same order as the
/// front points.
pub fn hype_indicator_naive(
    front: &Front,
    reference_point: Option<&[f64]>,
    calculator: &dyn HyperVolumeCalculator,
    parallel: bool,
) -> Result<Vec<f64>, HError> {
    let ref_point = front.reference_point(reference_point)?;
    debug!(
        "Calculating naive HypE indicator with {} and reference point {:?}",
        calculator.name(),
        ref_point
    );

    let total = calculator.compute(front.points(), &ref_point)?;
    let leave_one_out = |point_idx: usize| -> Result<f64, HError> {
        Ok(total - calculator.compute(&front.without(point_idx), &ref_point)?)
    };

    if parallel {
        (0..front.len()).into_par_iter().map(leave_one_out).collect()
    } else {
        (0..front.len()).map(leave_one_out).collect()
    }
}

/// Calculate the HypE indicator `Ih_1` with a hyper-volume method selected at construction.
/// See [`hype_indicator_naive`].
#[derive(Debug, Clone)]
pub struct NaiveIndicator<C: HyperVolumeCalculator = HyperVolume> {
    /// The method to calculate the hyper-volume.
    calculator: C,
    /// Whether to calculate the leave-one-out volumes in threads.
    parallel: bool,
}

impl Default for NaiveIndicator<HyperVolume> {
    fn default() -> Self {
        Self::new(HyperVolume, false)
    }
}

impl<C: HyperVolumeCalculator> NaiveIndicator<C> {
    /// Create the indicator.
    ///
    /// # Arguments
    ///
    /// * `calculator`: The method to calculate the hyper-volume.
    /// * `parallel`: Whether to calculate the leave-one-out volumes in threads.
    ///
    /// returns: `NaiveIndicator<C>`
    pub fn new(calculator: C, parallel: bool) -> Self {
        Self {
            calculator,
            parallel,
        }
    }

    /// Calculate the indicator of each point.
    ///
    /// # Arguments
    ///
    /// * `front`: The front.
    /// * `reference_point`: The optional reference point.
    ///
    /// returns: `Result<Vec<f64>, HError>`
    pub fn compute(
        &self,
        front: &Front,
        reference_point: Option<&[f64]>,
    ) -> Result<Vec<f64>, HError> {
        hype_indicator_naive(front, reference_point, &self.calculator, self.parallel)
    }
}
