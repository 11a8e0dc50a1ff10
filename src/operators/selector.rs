use std::fs;
use std::path::Path;

use log::debug;
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::core::{estimate_reference_point, Front, HError};
use crate::metrics::{
    additive_epsilon_contributions, hype_indicator_exact, hype_indicator_sampled,
    multiplicative_epsilon_contributions, HyperVolume, HyperVolumeCalculator, NaiveIndicator,
};
use crate::utils::{argsort, Sort};

/// The default number of objectives from which the HypE indicator is estimated with the
/// Monte-Carlo method.
pub const DEFAULT_DIM_THRESHOLD: usize = 4;

/// The default number of samples used by the selectors when the HypE indicator is estimated.
pub const DEFAULT_SELECTOR_SAMPLES: usize = 100_000;

/// A trait implementing methods to choose the least contributing points of a front. The
/// returned indices can be discarded when a population must be reduced.
pub trait ContributionSelector {
    /// Select the indices of the worst points in the front, ordered from the least
    /// contributing one.
    ///
    /// # Arguments
    ///
    /// * `front`: The front.
    /// * `rng`: The random number generator. This is only used by the selectors estimating the
    ///   contributions.
    ///
    /// returns: `Result<Vec<usize>, HError>`
    fn select_worst(&self, front: &Front, rng: &mut dyn RngCore) -> Result<Vec<usize>, HError>;

    /// The name of the selector.
    fn name(&self) -> String;
}

/// Input arguments for the [`HypESelector`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct HypESelectorArgs {
    /// The number of points to remove from the front. This is the number of returned indices.
    pub number_to_remove: usize,
    /// The number of objectives from which the Monte-Carlo estimation is used. Fronts with fewer
    /// objectives use the exact algorithm.
    pub dim_threshold: usize,
    /// The number of samples used by the Monte-Carlo estimation.
    pub number_of_samples: usize,
    /// The reference point. When `None`, this defaults to the coordinate-wise maximum of the front.
    pub reference_point: Option<Vec<f64>>,
    /// Whether the Monte-Carlo samples are processed in threads. Default to `true`.
    pub parallel: Option<bool>,
}

impl Default for HypESelectorArgs {
    fn default() -> Self {
        Self {
            number_to_remove: 1,
            dim_threshold: DEFAULT_DIM_THRESHOLD,
            number_of_samples: DEFAULT_SELECTOR_SAMPLES,
            reference_point: None,
            parallel: None,
        }
    }
}

impl HypESelectorArgs {
    /// Load the arguments from a JSON string. Missing fields get their default value.
    ///
    /// # Arguments
    ///
    /// * `data`: The JSON string.
    ///
    /// returns: `Result<HypESelectorArgs, HError>`
    pub fn from_json_str(data: &str) -> Result<Self, HError> {
        serde_json::from_str(data).map_err(|e| HError::Config(e.to_string()))
    }

    /// Load the arguments from a JSON file. Missing fields get their default value.
    ///
    /// # Arguments
    ///
    /// * `file`: The path to the JSON file.
    ///
    /// returns: `Result<HypESelectorArgs, HError>`
    pub fn from_json_file(file: &Path) -> Result<Self, HError> {
        let data = fs::read_to_string(file).map_err(|e| {
            HError::Config(format!("cannot read the file {}: {}", file.display(), e))
        })?;
        Self::from_json_str(&data)
    }
}

/// Select the points with the lowest HypE indicator `Ih_k`, where `k` is the number of points to
/// remove. The indicator is calculated with [`hype_indicator_exact`] when the front has fewer
/// objectives than [`HypESelectorArgs::dim_threshold`], otherwise it is estimated with
/// [`hype_indicator_sampled`].
#[derive(Debug, Clone)]
pub struct HypESelector {
    /// The selector arguments.
    args: HypESelectorArgs,
}

impl HypESelector {
    /// Create the selector.
    ///
    /// # Arguments
    ///
    /// * `args`: The [`HypESelectorArgs`] arguments.
    ///
    /// returns: `Result<HypESelector, HError>`
    pub fn new(args: HypESelectorArgs) -> Result<Self, HError> {
        if args.number_of_samples == 0 {
            return Err(HError::SelectorOperator(
                "HypE".to_string(),
                "The number of samples must be at least 1".to_string(),
            ));
        }
        Ok(Self { args })
    }

    /// The selector arguments.
    pub fn args(&self) -> &HypESelectorArgs {
        &self.args
    }

    /// Calculate the HypE indicator of each point with the algorithm chosen based on the number
    /// of objectives.
    ///
    /// # Arguments
    ///
    /// * `front`: The front.
    /// * `rng`: The random number generator used by the Monte-Carlo estimation.
    ///
    /// returns: `Result<Vec<f64>, HError>`
    pub fn indicator(&self, front: &Front, rng: &mut dyn RngCore) -> Result<Vec<f64>, HError> {
        let k = self.args.number_to_remove;
        let ref_point = self.args.reference_point.as_deref();
        if front.number_of_objectives() >= self.args.dim_threshold {
            debug!(
                "Estimating HypE indicator with {} samples for {} objectives",
                self.args.number_of_samples,
                front.number_of_objectives()
            );
            hype_indicator_sampled(
                front,
                k,
                ref_point,
                Some(self.args.number_of_samples),
                rng,
                self.args.parallel.unwrap_or(true),
            )
        } else {
            debug!(
                "Calculating exact HypE indicator for {} objectives",
                front.number_of_objectives()
            );
            hype_indicator_exact(front, k, ref_point)
        }
    }

    /// Get the indices of the [`HypESelectorArgs::number_to_remove`] points with the lowest
    /// indicator, sorted by ascending indicator. Points with the same indicator are sorted by
    /// their index. The number of points to remove must be between `1` and the front size.
    ///
    /// # Arguments
    ///
    /// * `front`: The front.
    /// * `rng`: The random number generator used by the Monte-Carlo estimation.
    ///
    /// returns: `Result<Vec<usize>, HError>`
    pub fn rank_worst(&self, front: &Front, rng: &mut dyn RngCore) -> Result<Vec<usize>, HError> {
        if self.args.number_to_remove == 0 || self.args.number_to_remove > front.len() {
            return Err(HError::InvalidRank(self.args.number_to_remove, front.len()));
        }
        let indicator = self.indicator(front, rng)?;
        let mut worst = argsort(&indicator, Sort::Ascending);
        worst.truncate(self.args.number_to_remove);
        Ok(worst)
    }
}

impl ContributionSelector for HypESelector {
    fn select_worst(&self, front: &Front, rng: &mut dyn RngCore) -> Result<Vec<usize>, HError> {
        self.rank_worst(front, rng)
    }

    fn name(&self) -> String {
        "HypE".to_string()
    }
}

/// Select the point with the lowest exact hyper-volume contribution, calculated with
/// [`NaiveIndicator`]. When no reference point is given, this uses the coordinate-wise maximum of
/// the front plus `1` on each objective, so that the extreme points keep a contribution.
#[derive(Debug, Clone)]
pub struct HyperVolumeContributionSelector<C: HyperVolumeCalculator = HyperVolume> {
    /// The optional reference point.
    reference_point: Option<Vec<f64>>,
    /// The indicator.
    indicator: NaiveIndicator<C>,
}

impl Default for HyperVolumeContributionSelector<HyperVolume> {
    fn default() -> Self {
        Self::new(None)
    }
}

impl HyperVolumeContributionSelector<HyperVolume> {
    /// Create the selector with the default hyper-volume method.
    ///
    /// # Arguments
    ///
    /// * `reference_point`: The optional reference point.
    ///
    /// returns: `HyperVolumeContributionSelector`
    pub fn new(reference_point: Option<Vec<f64>>) -> Self {
        Self::with_calculator(reference_point, HyperVolume)
    }
}

impl<C: HyperVolumeCalculator> HyperVolumeContributionSelector<C> {
    /// Create the selector with a custom hyper-volume method.
    ///
    /// # Arguments
    ///
    /// * `reference_point`: The optional reference point.
    /// * `calculator`: The method to calculate the hyper-volume.
    ///
    /// returns: `HyperVolumeContributionSelector<C>`
    pub fn with_calculator(reference_point: Option<Vec<f64>>, calculator: C) -> Self {
        Self {
            reference_point,
            indicator: NaiveIndicator::new(calculator, true),
        }
    }

    /// Calculate the hyper-volume contribution of each point.
    ///
    /// # Arguments
    ///
    /// * `front`: The front.
    ///
    /// returns: `Result<Vec<f64>, HError>`
    pub fn contributions(&self, front: &Front) -> Result<Vec<f64>, HError> {
        let ref_point = match &self.reference_point {
            Some(r) => r.clone(),
            None => {
                let offset = vec![1.0; front.number_of_objectives()];
                estimate_reference_point(front, Some(&offset))?
            }
        };
        self.indicator.compute(front, Some(&ref_point))
    }
}

impl<C: HyperVolumeCalculator> ContributionSelector for HyperVolumeContributionSelector<C> {
    fn select_worst(&self, front: &Front, _: &mut dyn RngCore) -> Result<Vec<usize>, HError> {
        let contributions = self.contributions(front)?;
        Ok(argsort(&contributions, Sort::Ascending)
            .into_iter()
            .take(1)
            .collect())
    }

    fn name(&self) -> String {
        "Hyper-volume contribution".to_string()
    }
}

/// Select the worst points with [`HypESelector`] when the front has at least
/// [`HypESelectorArgs::dim_threshold`] objectives, otherwise select the single point with the
/// lowest exact hyper-volume contribution with [`HyperVolumeContributionSelector`].
#[derive(Debug, Clone)]
pub struct AdaptiveHyperVolumeSelector {
    /// The selector for many-objective fronts.
    hype: HypESelector,
    /// The selector for fronts with few objectives.
    contribution: HyperVolumeContributionSelector,
}

impl AdaptiveHyperVolumeSelector {
    /// Create the selector.
    ///
    /// # Arguments
    ///
    /// * `args`: The [`HypESelectorArgs`] arguments. The reference point is shared by both
    ///   selectors.
    ///
    /// returns: `Result<AdaptiveHyperVolumeSelector, HError>`
    pub fn new(args: HypESelectorArgs) -> Result<Self, HError> {
        let contribution = HyperVolumeContributionSelector::new(args.reference_point.clone());
        Ok(Self {
            hype: HypESelector::new(args)?,
            contribution,
        })
    }
}

impl ContributionSelector for AdaptiveHyperVolumeSelector {
    fn select_worst(&self, front: &Front, rng: &mut dyn RngCore) -> Result<Vec<usize>, HError> {
        let number_to_remove = self.hype.args().number_to_remove;
        if number_to_remove == 0 || number_to_remove > front.len() {
            return Err(HError::InvalidRank(number_to_remove, front.len()));
        }
        if front.number_of_objectives() >= self.hype.args().dim_threshold {
            self.hype.select_worst(front, rng)
        } else {
            self.contribution.select_worst(front, rng)
        }
    }

    fn name(&self) -> String {
        "Adaptive hyper-volume".to_string()
    }
}

/// Select the point with the lowest additive epsilon contribution.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdditiveEpsilonSelector;

impl ContributionSelector for AdditiveEpsilonSelector {
    fn select_worst(&self, front: &Front, _: &mut dyn RngCore) -> Result<Vec<usize>, HError> {
        let contributions = additive_epsilon_contributions(front);
        Ok(argsort(&contributions, Sort::Ascending)
            .into_iter()
            .take(1)
            .collect())
    }

    fn name(&self) -> String {
        "Additive epsilon".to_string()
    }
}

/// Select the point with the lowest multiplicative epsilon contribution. The front coordinates
/// must be strictly positive.
#[derive(Debug, Clone, Copy, Default)]
pub struct MultiplicativeEpsilonSelector;

impl ContributionSelector for MultiplicativeEpsilonSelector {
    fn select_worst(&self, front: &Front, _: &mut dyn RngCore) -> Result<Vec<usize>, HError> {
        let contributions = multiplicative_epsilon_contributions(front)?;
        Ok(argsort(&contributions, Sort::Ascending)
            .into_iter()
            .take(1)
            .collect())
    }

    fn name(&self) -> String {
        "Multiplicative epsilon".to_string()
    }
}
