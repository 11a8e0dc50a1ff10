pub use epsilon::{additive_epsilon_contributions, multiplicative_epsilon_contributions};
pub use hv_wfg::HyperVolumeWfg;
pub use hype::{
    alpha_weights, hype_indicator_exact, hype_indicator_naive, hype_indicator_sampled,
    NaiveIndicator, DEFAULT_SAMPLED_SAMPLES,
};
pub use hypervolume::{HyperVolume, HyperVolumeCalculator};
pub use hypervolume_2d::HyperVolume2D;

mod epsilon;
mod hv_wfg;
mod hype;
pub mod hypervolume;
mod hypervolume_2d;
