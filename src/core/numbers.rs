//! Number formatting helpers for settlement data
//!
//! The raw payout tables carry comma-grouped amounts ("12,340"). Parsing is
//! strict: anything that is not a number after ungrouping is reported as
//! `None` so the caller can fail loudly instead of coercing to zero.

/// Parse a payout cell that may carry comma grouping.
pub fn parse_payout(cell: &str) -> Option<f64> {
    let cleaned = cell.trim().replace(',', "");
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_payout_plain() {
        assert_eq!(parse_payout("260"), Some(260.0));
        assert_eq!(parse_payout(" 110 "), Some(110.0));
    }

    #[test]
    fn test_parse_payout_comma_grouped() {
        assert_eq!(parse_payout("12,340"), Some(12340.0));
        assert_eq!(parse_payout("1,234,560"), Some(1234560.0));
    }

    #[test]
    fn test_parse_payout_rejects_garbage() {
        assert_eq!(parse_payout(""), None);
        assert_eq!(parse_payout("   "), None);
        assert_eq!(parse_payout("n/a"), None);
        assert_eq!(parse_payout("260円"), None);
    }
}
