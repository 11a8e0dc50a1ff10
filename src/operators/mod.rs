pub use selector::{
    AdaptiveHyperVolumeSelector, AdditiveEpsilonSelector, ContributionSelector,
    HyperVolumeContributionSelector, HypESelector, HypESelectorArgs,
    MultiplicativeEpsilonSelector, DEFAULT_DIM_THRESHOLD, DEFAULT_SELECTOR_SAMPLES,
};

mod selector;
