use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use crate::error::KeibaError;

/// Pari-mutuel bet types settled by the official payout tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BetType {
    /// 単勝 - the single winner
    Win,
    /// 複勝 - finishes among the 2-3 paying places
    Place,
    /// 馬連 - first two in either order
    Quinella,
    /// 馬単 - first two in exact order
    Exacta,
    /// ワイド - any two of the paying places
    Wide,
    /// 三連複 - first three in either order
    Trio,
    /// 三連単 - first three in exact order
    Trifecta,
}

impl BetType {
    pub const ALL: [BetType; 7] = [
        BetType::Win,
        BetType::Place,
        BetType::Quinella,
        BetType::Exacta,
        BetType::Wide,
        BetType::Trio,
        BetType::Trifecta,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BetType::Win => "win",
            BetType::Place => "place",
            BetType::Quinella => "quinella",
            BetType::Exacta => "exacta",
            BetType::Wide => "wide",
            BetType::Trio => "trio",
            BetType::Trifecta => "trifecta",
        }
    }

    /// Competitor numbers on one elemental ticket
    pub fn ticket_size(self) -> usize {
        match self {
            BetType::Win | BetType::Place => 1,
            BetType::Quinella | BetType::Exacta | BetType::Wide => 2,
            BetType::Trio | BetType::Trifecta => 3,
        }
    }

    /// Whether finishing order matters for a match
    pub fn is_ordered(self) -> bool {
        matches!(self, BetType::Exacta | BetType::Trifecta)
    }

    /// Accepted winning-number count in one settlement row
    fn row_arity(self) -> (usize, usize) {
        match self {
            BetType::Win | BetType::Place => (1, 1),
            BetType::Quinella | BetType::Exacta => (2, 2),
            BetType::Wide => (2, 3),
            BetType::Trio | BetType::Trifecta => (3, 3),
        }
    }
}

impl fmt::Display for BetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BetType {
    type Err = KeibaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "win" => Ok(BetType::Win),
            "place" => Ok(BetType::Place),
            "quinella" => Ok(BetType::Quinella),
            "exacta" => Ok(BetType::Exacta),
            "wide" | "quinella_place" => Ok(BetType::Wide),
            "trio" => Ok(BetType::Trio),
            "trifecta" => Ok(BetType::Trifecta),
            other => Err(KeibaError::UnknownBetType(other.to_string())),
        }
    }
}

/// One selection decided by the policy layer for a race and bet type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Selection {
    /// Flat list of competitor numbers; expanded as a box for pair/triple types
    Numbers(Vec<u8>),
    /// Key-horse (wheel) structure: every anchor against every partner
    Wheel { anchors: Vec<u8>, partners: Vec<u8> },
}

impl Selection {
    pub fn numbers(numbers: impl Into<Vec<u8>>) -> Self {
        Selection::Numbers(numbers.into())
    }

    pub fn wheel(anchors: impl Into<Vec<u8>>, partners: impl Into<Vec<u8>>) -> Self {
        Selection::Wheel {
            anchors: anchors.into(),
            partners: partners.into(),
        }
    }
}

/// Bet-type entries for one race
pub type RaceActions = BTreeMap<BetType, Selection>;

/// Full action set: race id -> bet type -> selection
pub type ActionSet = BTreeMap<String, RaceActions>;

/// One official payout line: a winning combination and its payout per 100 staked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementRow {
    /// 1-3 competitor numbers; order is meaningful for exacta/trifecta rows
    pub numbers: Vec<u8>,
    /// Currency returned per 100 units staked
    pub payout: f64,
}

impl SettlementRow {
    pub fn new(numbers: impl Into<Vec<u8>>, payout: f64) -> Self {
        Self {
            numbers: numbers.into(),
            payout,
        }
    }
}

/// Settlement tables for every bet type, keyed by race id
///
/// A race maps to an ordered collection of payout rows: usually one, several
/// for dead heats and multi-slot place settlements, possibly zero. The book
/// is read-only once loaded; lookups never allocate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettlementBook {
    tables: HashMap<BetType, HashMap<String, Vec<SettlementRow>>>,
}

impl SettlementBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one payout row, validating the winning-number count for the type.
    pub fn add_row(
        &mut self,
        bet_type: BetType,
        race_id: impl Into<String>,
        row: SettlementRow,
    ) -> Result<(), KeibaError> {
        let (min, max) = bet_type.row_arity();
        let got = row.numbers.len();
        if got < min || got > max {
            return Err(KeibaError::MalformedRow {
                bet_type,
                got,
                min,
                max,
            });
        }
        self.tables
            .entry(bet_type)
            .or_default()
            .entry(race_id.into())
            .or_default()
            .push(row);
        Ok(())
    }

    /// Mark a race as settled with no payout rows.
    pub fn add_race(&mut self, bet_type: BetType, race_id: impl Into<String>) {
        self.tables
            .entry(bet_type)
            .or_default()
            .entry(race_id.into())
            .or_default();
    }

    /// Payout rows for a race, or `None` when the race is absent from the
    /// table for this bet type. An empty slice means the race is present but
    /// recorded no payout lines.
    pub fn lookup(&self, bet_type: BetType, race_id: &str) -> Option<&[SettlementRow]> {
        self.tables
            .get(&bet_type)?
            .get(race_id)
            .map(Vec::as_slice)
    }

    /// Number of races settled for a bet type
    pub fn n_races(&self, bet_type: BetType) -> usize {
        self.tables.get(&bet_type).map_or(0, HashMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.tables.values().all(HashMap::is_empty)
    }
}
