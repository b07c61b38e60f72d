//! Portfolio simulation over an action set
//!
//! Dispatches every (race, bet type) selection to the ticket pricer with a
//! fixed unit stake and reduces the per-race rows into the portfolio return
//! statistic used to compare strategy parameterizations.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::metrics::{aggregate_returns, PortfolioStat};
use super::tickets::TicketPricer;
use crate::error::KeibaError;
use crate::models::{ActionSet, SettlementBook};

/// Accumulation of every bet-type entry priced for one race
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RaceReturn {
    pub n_bets: u64,
    pub bet_amount: f64,
    pub return_amount: f64,
    pub hit_or_not: bool,
}

/// Portfolio simulator over a read-only settlement book
#[derive(Debug, Clone, Copy)]
pub struct Simulator<'a> {
    pricer: TicketPricer<'a>,
    unit_stake: f64,
}

impl<'a> Simulator<'a> {
    /// Simulator with the conventional unit stake of 1.
    pub fn new(book: &'a SettlementBook) -> Self {
        Self::with_stake(book, 1.0)
    }

    pub fn with_stake(book: &'a SettlementBook, unit_stake: f64) -> Self {
        Self {
            pricer: TicketPricer::new(book),
            unit_stake,
        }
    }

    /// Price every race of the action set into one row per race.
    ///
    /// A race whose settlement lookup misses for any of its bet-type entries
    /// is dropped entirely, so unsettled races shrink the sample instead of
    /// counting as wins or losses.
    pub fn calc_returns_per_race(
        &self,
        actions: &ActionSet,
    ) -> Result<BTreeMap<String, RaceReturn>, KeibaError> {
        let mut per_race = BTreeMap::new();

        'races: for (race_id, race_actions) in actions {
            let mut row = RaceReturn::default();
            for (&bet_type, selection) in race_actions {
                match self
                    .pricer
                    .price(race_id, bet_type, selection, self.unit_stake)?
                {
                    Some(outcome) => {
                        row.n_bets += outcome.n_bets;
                        row.bet_amount += outcome.bet_amount;
                        row.return_amount += outcome.return_amount;
                    }
                    None => {
                        debug!(%race_id, %bet_type, "no settlement rows, dropping race");
                        continue 'races;
                    }
                }
            }
            row.hit_or_not = row.return_amount > 0.0;
            per_race.insert(race_id.clone(), row);
        }

        Ok(per_race)
    }

    /// Price the action set and aggregate it into the portfolio statistic.
    ///
    /// An empty action set yields the all-zero aggregate.
    pub fn calc_returns(&self, actions: &ActionSet) -> Result<PortfolioStat, KeibaError> {
        let per_race = self.calc_returns_per_race(actions)?;
        Ok(aggregate_returns(&per_race))
    }
}
