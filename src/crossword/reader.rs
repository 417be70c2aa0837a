use std::fs::File;
use std::io::Read;
use std::path::Path;
use log::info;

use super::types::error::{CrosswordError, Result};
use super::types::formatter::CrosswordFormatter;
use super::types::models::{Crossword, CrosswordBuilder};
use super::utils;

/// The main entry point for loading crossword puzzles.
///
/// Wraps a [`CrosswordFormatter`] and reads whole puzzles from files, streams
/// or byte slices. Holds no per-puzzle state, so one reader can serve any
/// number of calls, including from several threads.
#[derive(Debug, Clone)]
pub struct CrosswordReader<F: CrosswordFormatter> {
    formatter: F,
}

impl<F: CrosswordFormatter> CrosswordReader<F> {
    /// Creates a reader around `formatter`.
    ///
    /// `user_encoding` overrides the formatter's text encoding when given.
    ///
    /// # Errors
    /// Returns [`CrosswordError::UnknownEncoding`] if the label is not recognized.
    pub fn new(mut formatter: F, user_encoding: Option<&str>) -> Result<Self> {
        if let Some(label) = user_encoding {
            let encoding = utils::parse_encoding(label)
                .ok_or_else(|| CrosswordError::UnknownEncoding(label.to_string()))?;
            info!("Text encoding overridden: '{}'", encoding.name());
            formatter.set_encoding(encoding);
        }
        Ok(Self { formatter })
    }

    pub fn formatter(&self) -> &F {
        &self.formatter
    }

    /// Reads a puzzle from the file at `path`.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file cannot be opened or read
    /// - The content is not a valid puzzle in this reader's format
    pub fn read_path(&self, path: impl AsRef<Path>) -> Result<Crossword> {
        let path = path.as_ref();
        info!("Opening {} puzzle: {}", self.formatter.name(), path.display());
        let mut file = File::open(path)?;
        self.read_from(&mut file)
    }

    /// Reads a puzzle from `reader`, consuming it to the end.
    pub fn read_from(&self, reader: &mut dyn Read) -> Result<Crossword> {
        if !self.formatter.can_read() {
            return Err(CrosswordError::Unsupported("Reading"));
        }
        let mut builder = CrosswordBuilder::new();
        self.formatter.read(&mut builder, reader)?;
        let crossword = builder.build();
        info!(
            "Puzzle loaded: title='{}', {}x{}, {} words",
            crossword.title,
            crossword.width,
            crossword.height,
            crossword.word_count()
        );
        Ok(crossword)
    }

    /// Reads a puzzle held in memory.
    pub fn read_bytes(&self, mut bytes: &[u8]) -> Result<Crossword> {
        self.read_from(&mut bytes)
    }
}
