//! Shared numeric helpers

pub mod combinatorics;
pub mod numbers;

pub use combinatorics::{binomial, combinations, permutations};
pub use numbers::parse_payout;
