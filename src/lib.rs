//! # xword-reader
//!
//! A reader for JSON crossword puzzles in the WSJ dialect.
//! Resolves the word position table, the two clue buckets and the answer
//! strings into a single [`Crossword`] model.
//!
//! **Note:** The format is read-only. Writing a puzzle back always fails with
//! [`CrosswordError::Unsupported`].
pub mod crossword;

// Re-export the main types for convenience
pub use crossword::{
    CrosswordReader,
    WsjFormatter,
    types::{
        error::{CrosswordError, ErrorKind, Result},
        formatter::CrosswordFormatter,
        locator::{LocatorKind, WordLocator},
        models::{Cell, Crossword, CrosswordBuilder, CrosswordWord, Direction, WordBuilder},
    },
};
