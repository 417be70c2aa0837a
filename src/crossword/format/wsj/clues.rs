//! # Clue Cross-Referencing
//!
//! `data.copy.clues` holds one bucket per direction:
//!
//! ```text
//! [ { "title": "Across", "clues": [ { "word", "number", "clue", "answer" }, ... ] },
//!   { "title": "Down",   "clues": [ ... ] } ]
//! ```
//!
//! Each sub-clue names a word id; its anchor comes from the word table and its
//! cells from the answer string. Words are produced in the order the buckets
//! and their sub-clues appear.

use log::{debug, trace};
use serde_json::{Map, Value};

use super::words::WordTable;
use crate::crossword::types::error::{CrosswordError, Result};
use crate::crossword::types::models::{CrosswordWord, Direction, WordBuilder};
use crate::crossword::utils;

/// Number of buckets the clue table must hold, one per direction.
pub const BUCKET_COUNT: usize = 2;

/// Resolves every sub-clue against `table` and returns the words in source order.
///
/// The caller has already checked that there are [`BUCKET_COUNT`] buckets.
pub fn parse(buckets: &[Value], table: &WordTable) -> Result<Vec<CrosswordWord>> {
    debug_assert_eq!(buckets.len(), BUCKET_COUNT, "clue bucket count checked by the envelope");

    let mut words = Vec::new();
    for (bucket_index, bucket) in buckets.iter().enumerate() {
        let bucket = bucket.as_object().ok_or_else(|| CrosswordError::NotAnObject {
            path: format!("data.copy.clues[{}]", bucket_index),
        })?;

        let sub_clues = utils::opt_array(bucket, "clues")
            .ok_or(CrosswordError::MissingClueList(bucket_index))?;

        let title = utils::opt_string(bucket, "title");
        let direction = Direction::from_title(&title).ok_or_else(|| CrosswordError::InvalidDirection {
            bucket: bucket_index,
            title: title.clone(),
        })?;
        debug!("Bucket {} ({}): {} clues", bucket_index, direction, sub_clues.len());

        for (clue_index, sub_clue) in sub_clues.iter().enumerate() {
            let sub_clue = sub_clue.as_object().ok_or_else(|| CrosswordError::NotAnObject {
                path: format!("data.copy.clues[{}].clues[{}]", bucket_index, clue_index),
            })?;
            let word = build_word(sub_clue, direction, table, bucket_index, clue_index)?;
            trace!("{} {}: '{}' at ({}, {})", word.number, word.direction, word.answer(), word.start_row, word.start_column);
            words.push(word);
        }
    }

    Ok(words)
}

fn build_word(
    sub_clue: &Map<String, Value>,
    direction: Direction,
    table: &WordTable,
    bucket: usize,
    clue: usize,
) -> Result<CrosswordWord> {
    let anchor = utils::opt_int(sub_clue, "word")
        .and_then(|id| u32::try_from(id).ok())
        .and_then(|id| table.get(&id))
        .ok_or(CrosswordError::UnmatchedWord { bucket, clue })?;

    let number = match utils::opt_int(sub_clue, "number") {
        None => 0,
        Some(n) => u32::try_from(n).map_err(|_| CrosswordError::InvalidClueField {
            bucket,
            clue,
            field: "number",
        })?,
    };

    let answer = utils::get_string(sub_clue, "answer").ok_or(CrosswordError::InvalidClueField {
        bucket,
        clue,
        field: "answer",
    })?;

    let builder = WordBuilder::new(direction)
        .number(number)
        .hint(utils::opt_string(sub_clue, "clue"))
        .start(anchor.row, anchor.column);

    Ok(answer
        .chars()
        .fold(builder, |wb, ch| wb.add_cell(ch.to_string(), None))
        .build())
}
