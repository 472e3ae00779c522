//! Sparse dictionary-of-dictionaries ingestion.
//!
//! A relation arrives as a JSON object mapping row labels to objects mapping
//! column labels to 0/1 cell values. Label order is significant: rows emit in
//! first-seen order, columns in first-seen order across all rows. Missing
//! (row, column) pairs fill with a caller-supplied default.
//!
//! Requires serde_json's `preserve_order` feature so object iteration is
//! insertion order.

use hashbrown::HashMap;
use serde_json::Value;

use crate::{Error, Result};
use super::Relation;

/// Convert a dict-of-dicts JSON value into a dense [`Relation`].
///
/// For sparse input, ensure every row and column label appears at least once
/// and pass the fill value as `default`.
pub fn relation_from_dict(value: &Value, default: u8) -> Result<Relation> {
    let row_map = value.as_object().ok_or_else(|| {
        Error::MalformedRelation("input must be a mapping of row labels to mappings".into())
    })?;

    let row_count = row_map.len();
    let mut col_index: HashMap<&str, usize> = HashMap::new();
    let mut col_order: Vec<&str> = Vec::new();
    let mut entries: Vec<(usize, usize, u8)> = Vec::new();

    for (r, (row_label, cells)) in row_map.iter().enumerate() {
        let cells = cells.as_object().ok_or_else(|| {
            Error::MalformedRelation(format!(
                "row '{row_label}' must be a mapping of column labels to values"
            ))
        })?;
        for (col_label, cell) in cells {
            let c = *col_index.entry(col_label.as_str()).or_insert_with(|| {
                col_order.push(col_label.as_str());
                col_order.len() - 1
            });
            entries.push((r, c, cell_value(row_label, col_label, cell)?));
        }
    }

    let cols = col_order.len();
    let mut grid = vec![vec![default; cols]; row_count];
    for (r, c, v) in entries {
        grid[r][c] = v;
    }
    Relation::from_rows(grid)
}

/// A cell is a JSON integer that fits in u8, or a boolean.
fn cell_value(row_label: &str, col_label: &str, cell: &Value) -> Result<u8> {
    match cell {
        Value::Bool(b) => Ok(u8::from(*b)),
        Value::Number(n) => n
            .as_u64()
            .and_then(|v| u8::try_from(v).ok())
            .ok_or_else(|| {
                Error::MalformedRelation(format!(
                    "cell ('{row_label}', '{col_label}') is not a small non-negative integer: {n}"
                ))
            }),
        other => Err(Error::MalformedRelation(format!(
            "cell ('{row_label}', '{col_label}') is not an integer: {other}"
        ))),
    }
}
