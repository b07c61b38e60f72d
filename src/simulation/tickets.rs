//! Ticket pricing against official settlement tables
//!
//! Expands a selection into its elemental tickets (box combinatorics for
//! flat selections, anchor x partner pairs for key-horse wheels) and settles
//! every ticket against every payout row recorded for the race. Payouts sum
//! across rows by design: dead heats and multi-slot place settlements report
//! one row per payout line.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::core::combinatorics::{combinations, permutations};
use crate::error::KeibaError;
use crate::models::{BetType, Selection, SettlementBook, SettlementRow};

/// Result of pricing one (race, bet type, selection) request
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BetOutcome {
    /// Elemental tickets bought
    pub n_bets: u64,
    /// Total stake: `n_bets` times the per-ticket stake
    pub bet_amount: f64,
    /// Total payout across all matching settlement rows
    pub return_amount: f64,
}

impl BetOutcome {
    pub fn hit(&self) -> bool {
        self.return_amount > 0.0
    }
}

/// Stateless per-race payout calculator over a read-only settlement book
#[derive(Debug, Clone, Copy)]
pub struct TicketPricer<'a> {
    book: &'a SettlementBook,
}

impl<'a> TicketPricer<'a> {
    pub fn new(book: &'a SettlementBook) -> Self {
        Self { book }
    }

    /// Price one wager request.
    ///
    /// Returns `Ok(None)` when the race has no entry in the settlement table
    /// for this bet type: a lookup miss the caller can tell apart from a
    /// legitimate zero payout. A selection below the bet type's minimum size
    /// prices to the all-zero outcome without consulting the table at all.
    pub fn price(
        &self,
        race_id: &str,
        bet_type: BetType,
        selection: &Selection,
        stake: f64,
    ) -> Result<Option<BetOutcome>, KeibaError> {
        let tickets = expand_tickets(bet_type, selection)?;
        if tickets.is_empty() {
            return Ok(Some(BetOutcome::default()));
        }

        let rows = match self.book.lookup(bet_type, race_id) {
            Some(rows) => rows,
            None => return Ok(None),
        };

        let n_bets = tickets.len() as u64;
        let bet_amount = n_bets as f64 * stake;
        let mut return_amount = 0.0;
        for row in rows {
            for ticket in &tickets {
                if ticket_matches(bet_type, ticket, row) {
                    return_amount += row.payout * stake / 100.0;
                }
            }
        }

        Ok(Some(BetOutcome {
            n_bets,
            bet_amount,
            return_amount,
        }))
    }
}

/// Expand a selection into the elemental tickets for `bet_type`.
///
/// A flat selection of size k buys every combination as its own ticket, so
/// repeated numbers buy repeated tickets and each settles independently.
/// Wheel pairs go through a set instead: a pair produced by two overlapping
/// anchors is counted exactly once. Unordered tickets are stored sorted.
fn expand_tickets(bet_type: BetType, selection: &Selection) -> Result<Vec<Vec<u8>>, KeibaError> {
    match selection {
        Selection::Numbers(numbers) => {
            let k = bet_type.ticket_size();
            let raw = if bet_type.is_ordered() {
                permutations(numbers, k)
            } else {
                combinations(numbers, k)
            };
            Ok(raw
                .into_iter()
                .map(|ticket| normalize(bet_type, ticket))
                .collect())
        }
        Selection::Wheel { anchors, partners } => {
            if bet_type.ticket_size() != 2 {
                return Err(KeibaError::InvalidSelection {
                    bet_type,
                    reason: "key-horse wheels are only defined for pair bet types".to_string(),
                });
            }
            let mut tickets = BTreeSet::new();
            for &anchor in anchors {
                for &partner in partners {
                    // A partner doubling as an anchor is never bought against itself
                    // or another anchor.
                    if anchors.contains(&partner) {
                        continue;
                    }
                    tickets.insert(normalize(bet_type, vec![anchor, partner]));
                }
            }
            Ok(tickets.into_iter().collect())
        }
    }
}

fn normalize(bet_type: BetType, mut ticket: Vec<u8>) -> Vec<u8> {
    if !bet_type.is_ordered() {
        ticket.sort_unstable();
    }
    ticket
}

/// Match one elemental ticket against one settlement row.
///
/// Tickets for unordered types arrive sorted from `expand_tickets`.
fn ticket_matches(bet_type: BetType, ticket: &[u8], row: &SettlementRow) -> bool {
    match bet_type {
        BetType::Win => row.numbers.first() == Some(&ticket[0]),
        BetType::Place => row.numbers.contains(&ticket[0]),
        BetType::Quinella | BetType::Trio => sorted(&row.numbers) == ticket,
        BetType::Exacta | BetType::Trifecta => row.numbers == ticket,
        BetType::Wide => ticket.iter().all(|n| row.numbers.contains(n)),
    }
}

fn sorted(numbers: &[u8]) -> Vec<u8> {
    let mut out = numbers.to_vec();
    out.sort_unstable();
    out
}
