use polars::error::PolarsError;
use thiserror::Error;

use crate::models::BetType;

/// Errors surfaced by the pricing engine and its boundary loaders
#[derive(Debug, Error)]
pub enum KeibaError {
    /// Tag outside the closed bet-type set, rejected when tables are built
    #[error("unknown bet type tag {0:?}")]
    UnknownBetType(String),

    /// Settlement row whose winning-number count does not fit the bet type
    #[error("settlement row for {bet_type} has {got} winning numbers, expected {min}-{max}")]
    MalformedRow {
        bet_type: BetType,
        got: usize,
        min: usize,
        max: usize,
    },

    /// Selection shape the bet type cannot expand (e.g. a wheel on a triple)
    #[error("invalid {bet_type} selection: {reason}")]
    InvalidSelection { bet_type: BetType, reason: String },

    /// Payout cell that fails to parse as a number
    #[error("non-numeric payout cell {value:?}")]
    BadPayout { value: String },

    /// Winning-number cell that is not a valid competitor number
    #[error("bad winning number {value:?} in column {column}")]
    BadNumber { column: String, value: String },

    /// Null race id cell (0-based row index)
    #[error("missing race id in settlement row {0}")]
    MissingRaceId(usize),

    /// Null payout cell
    #[error("missing payout for race {0}")]
    MissingPayout(String),

    #[error(transparent)]
    Polars(#[from] PolarsError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_bet_type_display() {
        let err = KeibaError::UnknownBetType("tansho".to_string());
        assert!(err.to_string().contains("tansho"));
    }

    #[test]
    fn test_malformed_row_display() {
        let err = KeibaError::MalformedRow {
            bet_type: BetType::Trio,
            got: 2,
            min: 3,
            max: 3,
        };
        assert!(err.to_string().contains("trio"));
        assert!(err.to_string().contains("3-3"));
    }
}
