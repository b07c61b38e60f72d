//! Boundary loaders for settlement tables and action sets

pub mod actions;
pub mod settlement;

pub use actions::{load_action_set, parse_action_set};
pub use settlement::load_settlement_csv;
