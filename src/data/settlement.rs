//! Settlement table CSV loading
//!
//! Builds a `SettlementBook` from a normalized payout CSV with one winning
//! combination per row:
//!
//! ```text
//! race_id,bet_type,win_0,win_1,win_2,payout
//! 202101010101,win,5,,,260
//! 202101010101,quinella,1,3,,840
//! 202101010101,trifecta,3,1,5,12340
//! ```
//!
//! Corrupt cells never coerce silently: a non-numeric payout, an
//! out-of-range winning number or a null race id fails the whole load,
//! since a coerced value would be indistinguishable from a legitimate
//! settlement.

use polars::prelude::*;
use std::path::Path;
use tracing::info;

use crate::core::numbers::parse_payout;
use crate::error::KeibaError;
use crate::models::{BetType, SettlementBook, SettlementRow};

/// Load a settlement book from a payout CSV.
pub fn load_settlement_csv<P: AsRef<Path>>(path: P) -> Result<SettlementBook, KeibaError> {
    let df = CsvReadOptions::default()
        .try_into_reader_with_file_path(Some(path.as_ref().to_path_buf()))?
        .finish()?;

    // Race ids are digit strings; an all-numeric file makes polars infer an
    // integer column, so cast back.
    let race_col = df.column("race_id")?.cast(&DataType::String)?;
    let race_col = race_col.str()?;
    let type_col = df.column("bet_type")?.str()?;
    let win_cols = [
        number_column(&df, "win_0")?,
        number_column(&df, "win_1")?,
        number_column(&df, "win_2")?,
    ];
    let payouts = payout_column(&df)?;

    let mut book = SettlementBook::new();
    for i in 0..df.height() {
        let race_id = race_col.get(i).ok_or(KeibaError::MissingRaceId(i))?;
        let bet_type: BetType = type_col
            .get(i)
            .ok_or_else(|| KeibaError::UnknownBetType(String::new()))?
            .parse()?;
        let numbers: Vec<u8> = win_cols.iter().filter_map(|col| col[i]).collect();
        let payout = payouts[i].ok_or_else(|| KeibaError::MissingPayout(race_id.to_string()))?;
        book.add_row(bet_type, race_id, SettlementRow::new(numbers, payout))?;
    }

    info!(rows = df.height(), "loaded settlement book");
    Ok(book)
}

/// Winning-number column as optional u8 per row.
///
/// An all-empty column infers as string, so both dtypes are accepted. Cells
/// outside the competitor-number range fail the load; a wrapped value would
/// settle some other entrant as a false winner.
fn number_column(df: &DataFrame, name: &str) -> Result<Vec<Option<u8>>, KeibaError> {
    let col = df.column(name)?;
    if let Ok(ints) = col.i64() {
        return ints
            .into_iter()
            .map(|cell| match cell {
                None => Ok(None),
                Some(v) => u8::try_from(v).map(Some).map_err(|_| KeibaError::BadNumber {
                    column: name.to_string(),
                    value: v.to_string(),
                }),
            })
            .collect();
    }
    let strs = col.str()?;
    strs.into_iter()
        .map(|cell| match cell {
            None => Ok(None),
            Some(s) if s.trim().is_empty() => Ok(None),
            Some(s) => s.trim().parse::<u8>().map(Some).map_err(|_| KeibaError::BadNumber {
                column: name.to_string(),
                value: s.to_string(),
            }),
        })
        .collect()
}

/// Payout column as optional f64 per row.
///
/// Integer and float columns pass through; a string column (the shape the
/// raw tables arrive in, with comma grouping) is parsed strictly and any
/// non-numeric cell aborts the load.
fn payout_column(df: &DataFrame) -> Result<Vec<Option<f64>>, KeibaError> {
    let col = df.column("payout")?;
    if let Ok(ints) = col.i64() {
        return Ok(ints.into_iter().map(|v| v.map(|v| v as f64)).collect());
    }
    if let Ok(floats) = col.f64() {
        return Ok(floats.into_iter().collect());
    }
    let strs = col.str()?;
    strs.into_iter()
        .map(|cell| match cell {
            None => Ok(None),
            Some(s) => parse_payout(s).map(Some).ok_or_else(|| KeibaError::BadPayout {
                value: s.to_string(),
            }),
        })
        .collect()
}
