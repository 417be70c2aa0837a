//! Word locators embedded in clue text.
//!
//! Clues may point at other entries with `ref://<direction>/<number>` or
//! `cite://<direction>/<number>`, where `<direction>` is the numeric code of
//! [`Direction`]. This module only covers the locator grammar; rendering
//! the links is left to the consumer.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use regex::Regex;
use super::error::{CrosswordError, Result};
use super::models::{Crossword, CrosswordWord, Direction};

/// Compiled pattern for `scheme://direction/number`.
static LOCATOR_PATTERN: OnceLock<Regex> = OnceLock::new();

fn locator_regex() -> &'static Regex {
    LOCATOR_PATTERN.get_or_init(|| Regex::new(r"^(\w+)://(\d+)/(\d+)$").expect("Invalid locator regex pattern"))
}

/// What following a locator should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocatorKind {
    /// Jump to the referenced word (`ref://`).
    Reference,
    /// Show the referenced word's clue (`cite://`).
    Citation,
}

impl LocatorKind {
    pub fn scheme(self) -> &'static str {
        match self {
            LocatorKind::Reference => "ref",
            LocatorKind::Citation => "cite",
        }
    }
}

/// A parsed `ref://` or `cite://` locator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordLocator {
    pub kind: LocatorKind,
    pub direction: Direction,
    pub number: u32,
}

impl WordLocator {
    pub fn reference(direction: Direction, number: u32) -> Self {
        Self { kind: LocatorKind::Reference, direction, number }
    }

    pub fn citation(direction: Direction, number: u32) -> Self {
        Self { kind: LocatorKind::Citation, direction, number }
    }
}

impl FromStr for WordLocator {
    type Err = CrosswordError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || CrosswordError::InvalidLocator(s.to_string());
        let caps = locator_regex().captures(s).ok_or_else(invalid)?;

        let kind = match &caps[1] {
            "ref" => LocatorKind::Reference,
            "cite" => LocatorKind::Citation,
            _ => return Err(invalid()),
        };
        let direction = caps[2]
            .parse::<u32>()
            .ok()
            .and_then(Direction::from_code)
            .ok_or_else(invalid)?;
        let number = caps[3].parse::<u32>().map_err(|_| invalid())?;

        Ok(Self { kind, direction, number })
    }
}

impl fmt::Display for WordLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}/{}", self.kind.scheme(), self.direction.code(), self.number)
    }
}

impl Crossword {
    /// Returns the word a locator points at, if the puzzle has it.
    pub fn resolve(&self, locator: &WordLocator) -> Option<&CrosswordWord> {
        self.find_word(locator.direction, locator.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_schemes() {
        let loc: WordLocator = "ref://1/17".parse().unwrap();
        assert_eq!(loc, WordLocator::reference(Direction::Down, 17));

        let loc: WordLocator = "cite://0/3".parse().unwrap();
        assert_eq!(loc, WordLocator::citation(Direction::Across, 3));
        assert_eq!(loc.to_string(), "cite://0/3");
    }

    #[test]
    fn rejects_malformed_locators() {
        for bad in ["http://0/1", "ref://2/1", "ref://0/", "ref://0/1/2", " ref://0/1", "ref:/0/1"] {
            let err = bad.parse::<WordLocator>().unwrap_err();
            assert!(matches!(err, CrosswordError::InvalidLocator(ref s) if s == bad), "{bad}");
        }
    }
}
