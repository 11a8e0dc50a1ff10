//! Hypervolume-based fitness assignment for Pareto fronts.
//!
//! This crate calculates, for a set of mutually non-dominated points, the HypE indicator
//! `Ih_k` proposed by [Bader and Zitzler (2011)](https://doi.org/10.1162/EVCO_a_00009): the
//! portion of the dominated hyper-volume each point is expected to lose when `k` points are
//! removed from the front. Three algorithms are available:
//!
//! - [`metrics::hype_indicator_naive`]: `Ih_1` from leave-one-out hyper-volumes calculated with a
//!   [`metrics::HyperVolumeCalculator`].
//! - [`metrics::hype_indicator_exact`]: exact `Ih_k` by recursive dimension elimination.
//! - [`metrics::hype_indicator_sampled`]: Monte-Carlo estimate of `Ih_k`.
//!
//! Evolutionary algorithms should use the selectors in [`operators`] to get the indices of the
//! points to discard when a population must be pruned.
//!
//! # Example
//! ```rust
//! use hype::core::{get_rng, Front};
//! use hype::operators::{ContributionSelector, HypESelector, HypESelectorArgs};
//!
//! let front = Front::new(vec![vec![1.0, 9.0], vec![5.0, 5.0], vec![9.0, 1.0]]).unwrap();
//! let args = HypESelectorArgs {
//!     reference_point: Some(vec![10.0, 10.0]),
//!     ..HypESelectorArgs::default()
//! };
//! let selector = HypESelector::new(args).unwrap();
//! let worst = selector.select_worst(&front, &mut get_rng(Some(1))).unwrap();
//! assert_eq!(worst.len(), 1);
//! ```
pub mod core;
pub mod metrics;
pub mod operators;
pub mod utils;
