pub use alpha::alpha_weights;
pub use exact::hype_indicator_exact;
pub use naive::{hype_indicator_naive, NaiveIndicator};
pub use sampled::hype_indicator_sampled;

mod alpha;
mod exact;
mod naive;
mod sampled;

/// The default number of samples used by [`hype_indicator_sampled`].
pub const DEFAULT_SAMPLED_SAMPLES: usize = 10_000;
