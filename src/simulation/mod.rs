//! Wager simulation: ticket pricing and portfolio aggregation

pub mod metrics;
pub mod simulator;
pub mod tickets;

pub use metrics::{aggregate_returns, PortfolioStat};
pub use simulator::{RaceReturn, Simulator};
pub use tickets::{BetOutcome, TicketPricer};
