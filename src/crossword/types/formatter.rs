//! The capability every crossword source format implements.

use std::io::{Read, Write};
use encoding_rs::Encoding;
use super::error::Result;
use super::models::{Crossword, CrosswordBuilder};

/// A trait that defines how a specific puzzle format is read and written.
///
/// Formats share the [`Crossword`] model and the crate error type, so a caller
/// can swap one for another without touching anything downstream.
pub trait CrosswordFormatter: Send + Sync {
    /// A short name used for debugging and logging.
    fn name(&self) -> &'static str;

    /// Sets the text encoding used to decode the input.
    fn set_encoding(&mut self, encoding: &'static Encoding);

    /// Reads a whole puzzle from `reader` into `builder`.
    ///
    /// The stream is consumed to the end; it is not closed. On error `builder`
    /// is left exactly as it was passed in.
    fn read(&self, builder: &mut CrosswordBuilder, reader: &mut dyn Read) -> Result<()>;

    /// Writes `crossword` to `writer`.
    ///
    /// Read-only formats fail with
    /// [`CrosswordError::Unsupported`](super::error::CrosswordError::Unsupported).
    fn write(&self, crossword: &Crossword, writer: &mut dyn Write) -> Result<()>;

    fn can_read(&self) -> bool;

    fn can_write(&self) -> bool;

    /// Convenience wrapper that reads into a fresh builder and returns the result.
    fn read_crossword(&self, reader: &mut dyn Read) -> Result<Crossword> {
        let mut builder = CrosswordBuilder::new();
        self.read(&mut builder, reader)?;
        Ok(builder.build())
    }
}
