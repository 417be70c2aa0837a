//! # WSJ JSON Puzzle Format
//!
//! The puzzle is a single JSON document:
//!
//! ```text
//! { "data": { "copy": {
//!     "title", "description", "publisher", "byline",
//!     "date-release": "yyyy-MM-dd HH:mm:ss",
//!     "gridsize": { "cols", "rows" },
//!     "words": [ ... ],   ← words::parse()
//!     "clues": [ ... ]    ← clues::parse()
//! }}}
//! ```
//!
//! The envelope is read top-down and the first problem aborts the whole parse.
//! The format is read-only.

use std::borrow::Cow;
use std::io::{Read, Write};
use std::sync::OnceLock;
use chrono::NaiveDateTime;
use encoding_rs::Encoding;
use log::{debug, info};
use regex::Regex;
use serde_json::{Map, Value};

use crate::crossword::types::error::{CrosswordError, Result};
use crate::crossword::types::formatter::CrosswordFormatter;
use crate::crossword::types::models::{Crossword, CrosswordBuilder};
use crate::crossword::utils;

pub mod clues;
pub mod words;

/// Layout of `data.copy.date-release`.
pub const RELEASE_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Exact shape of a release date; chrono alone is lenient about whitespace.
static RELEASE_DATE_PATTERN: OnceLock<Regex> = OnceLock::new();

fn release_date_regex() -> &'static Regex {
    RELEASE_DATE_PATTERN.get_or_init(|| {
        Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}$").expect("Invalid release date regex pattern")
    })
}

/// Reader for the WSJ JSON crossword dialect.
#[derive(Debug, Clone, Copy)]
pub struct WsjFormatter {
    encoding: &'static Encoding,
}

impl Default for WsjFormatter {
    fn default() -> Self {
        Self { encoding: encoding_rs::UTF_8 }
    }
}

impl WsjFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a formatter that decodes input with `encoding`.
    pub fn with_encoding(encoding: &'static Encoding) -> Self {
        Self { encoding }
    }

    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    /// Sets the input encoding from a label such as `"utf-8"` or `"GBK"`.
    pub fn set_encoding_label(&mut self, label: &str) -> Result<()> {
        self.encoding = utils::parse_encoding(label)
            .ok_or_else(|| CrosswordError::UnknownEncoding(label.to_string()))?;
        Ok(())
    }

    /// Parses a complete puzzle held in memory.
    pub fn parse(&self, bytes: &[u8]) -> Result<Crossword> {
        let mut builder = CrosswordBuilder::new();
        self.parse_into(&mut builder, bytes)?;
        Ok(builder.build())
    }

    fn parse_into(&self, builder: &mut CrosswordBuilder, bytes: &[u8]) -> Result<()> {
        // Step 1: Decode and parse the document
        let text = self.decode(bytes)?;
        let root: Map<String, Value> = serde_json::from_str(&text)?;

        // Step 2: Descend to the required objects
        let data = utils::opt_object(&root, "data").ok_or(CrosswordError::MissingObject("data"))?;
        let copy = utils::opt_object(data, "copy").ok_or(CrosswordError::MissingObject("data.copy"))?;
        let grid = utils::opt_object(copy, "gridsize")
            .ok_or(CrosswordError::MissingObject("data.copy.gridsize"))?;

        // Step 3: Metadata
        builder
            .title(utils::opt_string(copy, "title"))
            .description(utils::opt_string(copy, "description"))
            .copyright(utils::opt_string(copy, "publisher"))
            .author(utils::opt_string(copy, "byline"));

        // Step 4: Release date
        let release = utils::opt_string(copy, "date-release");
        builder.release_date(parse_release_date(&release)?);

        // Step 5: Grid size
        builder
            .width(grid_dimension(grid, "cols")?)
            .height(grid_dimension(grid, "rows")?);

        // Step 6: Words and clues (bucket count before the word table)
        let clue_buckets =
            utils::opt_array(copy, "clues").ok_or(CrosswordError::MissingObject("data.copy.clues"))?;
        if clue_buckets.len() != clues::BUCKET_COUNT {
            return Err(CrosswordError::UnexpectedCluesLength(clue_buckets.len()));
        }
        let word_records =
            utils::opt_array(copy, "words").ok_or(CrosswordError::MissingObject("data.copy.words"))?;

        let table = words::parse(word_records)?;
        debug!("Word table: {} entries", table.len());

        for word in clues::parse(clue_buckets, &table)? {
            builder.add_word(word);
        }

        info!("WSJ puzzle parsed: {} words", builder.word_count());
        Ok(())
    }

    /// Decodes the input, letting a byte-order mark override the configured encoding.
    fn decode<'a>(&self, bytes: &'a [u8]) -> Result<Cow<'a, str>> {
        let (encoding, payload) = match Encoding::for_bom(bytes) {
            Some((bom_encoding, bom_len)) => {
                debug!("Byte-order mark found, decoding as {}", bom_encoding.name());
                (bom_encoding, &bytes[bom_len..])
            }
            None => (self.encoding, bytes),
        };
        encoding
            .decode_without_bom_handling_and_without_replacement(payload)
            .ok_or(CrosswordError::Decode { encoding: encoding.name() })
    }
}

impl CrosswordFormatter for WsjFormatter {
    fn name(&self) -> &'static str {
        "WSJ"
    }

    fn set_encoding(&mut self, encoding: &'static Encoding) {
        self.encoding = encoding;
    }

    fn read(&self, builder: &mut CrosswordBuilder, reader: &mut dyn Read) -> Result<()> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        debug!("Read {} bytes of WSJ input", bytes.len());

        // Fill a scratch builder so a failed parse leaves the caller's untouched
        let mut parsed = CrosswordBuilder::new();
        self.parse_into(&mut parsed, &bytes)?;
        builder.merge(parsed);
        Ok(())
    }

    fn write(&self, _crossword: &Crossword, _writer: &mut dyn Write) -> Result<()> {
        Err(CrosswordError::Unsupported("Writing"))
    }

    fn can_read(&self) -> bool {
        true
    }

    fn can_write(&self) -> bool {
        false
    }
}

/// Parses `yyyy-MM-dd HH:mm:ss` as a naive timestamp.
///
/// Every field must be zero-padded and separated by exactly one space; no
/// surrounding whitespace is allowed.
pub fn parse_release_date(raw: &str) -> Result<NaiveDateTime> {
    let invalid = || CrosswordError::InvalidReleaseDate(raw.to_string());
    if !release_date_regex().is_match(raw) {
        return Err(invalid());
    }
    NaiveDateTime::parse_from_str(raw, RELEASE_DATE_FORMAT).map_err(|_| invalid())
}

fn grid_dimension(grid: &Map<String, Value>, field: &'static str) -> Result<u32> {
    match utils::opt_int(grid, field) {
        None => Ok(0),
        Some(value) => u32::try_from(value).map_err(|_| CrosswordError::InvalidGridSize { field, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn release_date_is_strict() {
        let date = parse_release_date("2017-02-17 00:00:00").unwrap();
        assert_eq!(
            date,
            NaiveDate::from_ymd_opt(2017, 2, 17).unwrap().and_hms_opt(0, 0, 0).unwrap()
        );

        for bad in [
            "2017/02/17 00:00:00",
            "2017-02-17",
            "",
            "2017-02-17T00:00:00",
            "2017-02-30 00:00:00",
            "2017-02-1700:00:00",
            " 2017-02-17 00:00:00",
            "2017-02-17 00:00:00 ",
            "2017-02-17  00:00:00",
            "2017-2-17 00:00:00",
            "+2017-02-17 00:00:00",
        ] {
            let err = parse_release_date(bad).unwrap_err();
            assert!(matches!(err, CrosswordError::InvalidReleaseDate(ref s) if s == bad), "{bad}");
        }
    }

    #[test]
    fn formatter_is_read_only() {
        let formatter = WsjFormatter::new();
        assert!(formatter.can_read());
        assert!(!formatter.can_write());
        let crossword = CrosswordBuilder::new().build();
        let err = formatter.write(&crossword, &mut Vec::<u8>::new()).unwrap_err();
        assert!(matches!(err, CrosswordError::Unsupported("Writing")));
    }

    #[test]
    fn encoding_label_can_be_changed() {
        let mut formatter = WsjFormatter::new();
        formatter.set_encoding_label("windows-1252").unwrap();
        assert_eq!(formatter.encoding(), encoding_rs::WINDOWS_1252);

        let err = formatter.set_encoding_label("no-such-charset").unwrap_err();
        assert!(matches!(err, CrosswordError::UnknownEncoding(_)));
        assert_eq!(formatter.encoding(), encoding_rs::WINDOWS_1252);
    }

    #[test]
    fn failed_read_leaves_builder_untouched() {
        let input = br#"{ "data": { "copy": {
            "title": "Half Done", "date-release": "yesterday",
            "gridsize": { "cols": 5, "rows": 5 }, "words": [], "clues": [] } } }"#;
        let mut builder = CrosswordBuilder::new();
        builder.title("Kept").width(9);

        let err = WsjFormatter::new().read(&mut builder, &mut &input[..]).unwrap_err();
        assert!(matches!(err, CrosswordError::InvalidReleaseDate(ref s) if s == "yesterday"));

        let crossword = builder.build();
        assert_eq!(crossword.title, "Kept");
        assert_eq!(crossword.width, 9);
        assert_eq!(crossword.release_date, None);
    }

    #[test]
    fn clue_count_is_checked_before_words() {
        let input = br#"{ "data": { "copy": {
            "date-release": "2017-02-17 00:00:00", "gridsize": {},
            "clues": [{ "title": "Across", "clues": [] }] } } }"#;
        let err = WsjFormatter::new().parse(input).unwrap_err();
        assert!(matches!(err, CrosswordError::UnexpectedCluesLength(1)));
    }

    #[test]
    fn invalid_bytes_for_encoding_fail() {
        let formatter = WsjFormatter::new();
        let err = formatter.parse(&[b'{', 0xFF, b'}']).unwrap_err();
        assert!(matches!(err, CrosswordError::Decode { encoding: "UTF-8" }));
    }
}
