//! Keiba wager simulation engine
//!
//! Prices pari-mutuel betting tickets against official settlement tables and
//! aggregates the results into portfolio return statistics:
//! - Seven bet types (win, place, quinella, exacta, wide, trio, trifecta)
//!   with box and key-horse (wheel) expansion
//! - Per-race outcome rows and a return/variance aggregate for comparing
//!   strategies across threshold sweeps
//! - Loaders for settlement CSVs and policy-layer action JSON
//!
//! # Example
//!
//! ```
//! use keiba::models::{BetType, Selection, SettlementBook, SettlementRow};
//! use keiba::simulation::TicketPricer;
//!
//! let mut book = SettlementBook::new();
//! book.add_row(
//!     BetType::Quinella,
//!     "202101010101",
//!     SettlementRow::new(vec![1, 3], 840.0),
//! )
//! .unwrap();
//!
//! let pricer = TicketPricer::new(&book);
//! let outcome = pricer
//!     .price(
//!         "202101010101",
//!         BetType::Quinella,
//!         &Selection::numbers(vec![1, 3, 5]),
//!         100.0,
//!     )
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(outcome.n_bets, 3);
//! assert_eq!(outcome.return_amount, 840.0);
//! ```

pub mod core;
pub mod data;
pub mod error;
pub mod models;
pub mod simulation;

// Re-export commonly used types
pub use data::{load_action_set, load_settlement_csv, parse_action_set};
pub use error::KeibaError;
pub use models::{ActionSet, BetType, RaceActions, Selection, SettlementBook, SettlementRow};
pub use simulation::{BetOutcome, PortfolioStat, RaceReturn, Simulator, TicketPricer};
