//! # Word Table Resolution
//!
//! `data.copy.words` lists every grid entry as `{ "id", "x", "y" }`, with
//! 1-based coordinates stored as strings. A coordinate may also be a range
//! such as `"3-7"`; only its first number matters since the length of a word
//! comes from its answer. This module turns the list into a lookup table from
//! word id to zero-based anchor.

use std::collections::HashMap;
use log::{trace, warn};
use serde_json::Value;

use crate::crossword::types::error::{CrosswordError, Result};
use crate::crossword::utils;

/// Zero-based grid position of a word's first cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub row: u32,
    pub column: u32,
}

/// Word id → anchor, built once per parse.
pub type WordTable = HashMap<u32, Anchor>;

/// Builds the word table from the `data.copy.words` array.
///
/// When two records share an id, the later one wins.
pub fn parse(words: &[Value]) -> Result<WordTable> {
    let mut table = WordTable::with_capacity(words.len());
    for (index, value) in words.iter().enumerate() {
        let (id, anchor) = parse_record(index, value)?;
        trace!("Word {}: row={}, column={}", id, anchor.row, anchor.column);
        if table.insert(id, anchor).is_some() {
            warn!("Duplicate word id {} at 'data.copy.words[{}]', keeping the later record", id, index);
        }
    }
    Ok(table)
}

fn parse_record(index: usize, value: &Value) -> Result<(u32, Anchor)> {
    let obj = value.as_object().ok_or_else(|| CrosswordError::NotAnObject {
        path: format!("data.copy.words[{}]", index),
    })?;

    let column = read_axis(obj, index, "x")?;
    let row = read_axis(obj, index, "y")?;

    let id = utils::opt_int(obj, "id")
        .and_then(|id| u32::try_from(id).ok())
        .ok_or(CrosswordError::WordMissingId { index })?;

    Ok((id, Anchor { row, column }))
}

fn read_axis(obj: &serde_json::Map<String, Value>, index: usize, axis: &'static str) -> Result<u32> {
    let raw = utils::get_string(obj, axis)
        .ok_or(CrosswordError::WordMissingCoordinate { index, axis })?;
    parse_coordinate(&raw).ok_or(CrosswordError::InvalidCoordinate { index, axis, value: raw })
}

/// Converts a 1-based coordinate (`"12"`) or range (`"3-5"`) to a zero-based index.
///
/// Returns `None` for anything that does not start with a positive number.
pub fn parse_coordinate(raw: &str) -> Option<u32> {
    let leading = match raw.split_once('-') {
        Some((head, _)) => head,
        None => raw,
    };
    leading.parse::<u32>().ok()?.checked_sub(1)
}
