//! Portfolio return statistics
//!
//! Reduces per-race return rows into the six-field aggregate compared across
//! strategy parameterizations (threshold sweeps, expected-value margins).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::simulator::RaceReturn;

/// Aggregate over all races that produced a return row
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioStat {
    pub n_bets: u64,
    pub n_races: u64,
    pub n_hits: u64,
    pub total_bet_amount: f64,
    /// Total payout divided by total stake; 0 when nothing was staked
    pub return_rate: f64,
    /// Standard error of the return rate: per-race payout stdev scaled by
    /// sqrt(n_races) over total stake; 0 when nothing was staked
    pub std: f64,
}

/// Reduce per-race rows into the portfolio aggregate.
pub fn aggregate_returns(per_race: &BTreeMap<String, RaceReturn>) -> PortfolioStat {
    let mut stat = PortfolioStat {
        n_races: per_race.len() as u64,
        ..PortfolioStat::default()
    };

    let mut total_return = 0.0;
    for row in per_race.values() {
        stat.n_bets += row.n_bets;
        stat.n_hits += row.hit_or_not as u64;
        stat.total_bet_amount += row.bet_amount;
        total_return += row.return_amount;
    }

    if stat.total_bet_amount > 0.0 {
        stat.return_rate = total_return / stat.total_bet_amount;

        let returns: Vec<f64> = per_race.values().map(|row| row.return_amount).collect();
        stat.std = sample_std(&returns) * (stat.n_races as f64).sqrt() / stat.total_bet_amount;
    }

    stat
}

/// Sample standard deviation (n - 1 denominator); 0 for fewer than two values.
fn sample_std(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let variance = values
        .iter()
        .map(|value| (value - mean).powi(2))
        .sum::<f64>()
        / (values.len() - 1) as f64;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(n_bets: u64, bet_amount: f64, return_amount: f64) -> RaceReturn {
        RaceReturn {
            n_bets,
            bet_amount,
            return_amount,
            hit_or_not: return_amount > 0.0,
        }
    }

    #[test]
    fn test_aggregate_empty_is_all_zero() {
        let stat = aggregate_returns(&BTreeMap::new());
        assert_eq!(stat, PortfolioStat::default());
    }

    #[test]
    fn test_aggregate_sums_and_rates() {
        let mut per_race = BTreeMap::new();
        per_race.insert("a".to_string(), row(3, 3.0, 8.4));
        per_race.insert("b".to_string(), row(2, 2.0, 0.0));

        let stat = aggregate_returns(&per_race);
        assert_eq!(stat.n_bets, 5);
        assert_eq!(stat.n_races, 2);
        assert_eq!(stat.n_hits, 1);
        assert_eq!(stat.total_bet_amount, 5.0);
        assert!((stat.return_rate - 1.68).abs() < 1e-9);
        // stdev([8.4, 0]) = 4.2 * sqrt(2); times sqrt(2) races over 5 staked.
        assert!((stat.std - 1.68).abs() < 1e-9);
    }

    #[test]
    fn test_aggregate_single_race_has_zero_std() {
        let mut per_race = BTreeMap::new();
        per_race.insert("a".to_string(), row(1, 1.0, 2.6));

        let stat = aggregate_returns(&per_race);
        assert!((stat.return_rate - 2.6).abs() < 1e-9);
        assert_eq!(stat.std, 0.0);
    }

    #[test]
    fn test_aggregate_zero_stake_has_zero_rates() {
        // Races retained with zero-ticket rows keep both rates defined.
        let mut per_race = BTreeMap::new();
        per_race.insert("a".to_string(), row(0, 0.0, 0.0));
        per_race.insert("b".to_string(), row(0, 0.0, 0.0));

        let stat = aggregate_returns(&per_race);
        assert_eq!(stat.n_races, 2);
        assert_eq!(stat.return_rate, 0.0);
        assert_eq!(stat.std, 0.0);
    }

    #[test]
    fn test_sample_std() {
        assert_eq!(sample_std(&[]), 0.0);
        assert_eq!(sample_std(&[5.0]), 0.0);
        assert!((sample_std(&[2.0, 4.0]) - std::f64::consts::SQRT_2).abs() < 1e-12);
    }
}
