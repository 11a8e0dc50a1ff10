pub use error::HError;
pub use front::{estimate_reference_point, Front};
pub use objective::ObjectiveDirection;
pub use utils::get_rng;

mod error;
mod front;
mod objective;
#[cfg(test)]
pub(crate) mod test_utils;
pub mod utils;
