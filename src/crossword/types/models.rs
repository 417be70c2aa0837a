//! Core data structures for the crossword model.
//!
//! This module defines the types every formatter produces:
//! - [`Crossword`], the finished puzzle with its metadata and ordered words
//! - [`CrosswordWord`] and [`Cell`], one directional entry and its letters
//! - [`CrosswordBuilder`] and [`WordBuilder`], which accumulate those values
//!   field by field without re-validating geometry

use std::fmt;
use chrono::NaiveDateTime;
use serde::Serialize;

/// Orientation of a word in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    /// Resolves a clue bucket title, ignoring case.
    pub fn from_title(title: &str) -> Option<Self> {
        if title.eq_ignore_ascii_case("Across") {
            Some(Self::Across)
        } else if title.eq_ignore_ascii_case("Down") {
            Some(Self::Down)
        } else {
            None
        }
    }

    /// Numeric code used in word locators (0 = across, 1 = down).
    pub fn code(self) -> u32 {
        match self {
            Direction::Across => 0,
            Direction::Down => 1,
        }
    }

    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(Self::Across),
            1 => Some(Self::Down),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Across => write!(f, "Across"),
            Direction::Down => write!(f, "Down"),
        }
    }
}

/// A single square of a word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cell {
    /// Solution text for the square, usually one character.
    pub chars: String,
    /// Per-cell marker some formats attach (circles, rebus flags).
    /// Formats without such markers leave it unset.
    pub attributes: Option<u8>,
}

impl Cell {
    pub fn new(chars: impl Into<String>, attributes: Option<u8>) -> Self {
        Self {
            chars: chars.into(),
            attributes,
        }
    }
}

/// One clued entry in the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrosswordWord {
    pub direction: Direction,
    pub number: u32,
    /// Clue text, exactly as supplied by the source.
    pub hint: String,
    /// Zero-based row of the first cell.
    pub start_row: u32,
    /// Zero-based column of the first cell.
    pub start_column: u32,
    pub cells: Vec<Cell>,
}

impl CrosswordWord {
    /// Number of cells in the word.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The solution, rebuilt by joining the cells.
    pub fn answer(&self) -> String {
        self.cells.iter().map(|c| c.chars.as_str()).collect()
    }

    /// Zero-based `(row, column)` of each cell, following the word's direction.
    ///
    /// No clipping against the grid is done here. Stops early at the first
    /// position that does not fit in a `u32`.
    pub fn cell_positions(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (0..self.cells.len()).map_while(move |i| {
            let i = u32::try_from(i).ok()?;
            match self.direction {
                Direction::Across => Some((self.start_row, self.start_column.checked_add(i)?)),
                Direction::Down => Some((self.start_row.checked_add(i)?, self.start_column)),
            }
        })
    }
}

/// A fully assembled crossword puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Crossword {
    pub title: String,
    pub description: String,
    pub author: String,
    pub copyright: String,
    pub release_date: Option<NaiveDateTime>,
    /// Number of grid columns, as declared by the source.
    pub width: u32,
    /// Number of grid rows, as declared by the source.
    pub height: u32,
    /// Words in the order the source listed them.
    pub words: Vec<CrosswordWord>,
}

impl Crossword {
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Across words, in source order.
    pub fn words_across(&self) -> impl Iterator<Item = &CrosswordWord> {
        self.words_in(Direction::Across)
    }

    /// Down words, in source order.
    pub fn words_down(&self) -> impl Iterator<Item = &CrosswordWord> {
        self.words_in(Direction::Down)
    }

    fn words_in(&self, direction: Direction) -> impl Iterator<Item = &CrosswordWord> {
        self.words.iter().filter(move |w| w.direction == direction)
    }

    /// Finds the first word with the given direction and clue number.
    pub fn find_word(&self, direction: Direction, number: u32) -> Option<&CrosswordWord> {
        self.words_in(direction).find(|w| w.number == number)
    }
}

/// Accumulates the parts of a [`Crossword`].
///
/// Values are stored as given; geometry is not checked against the grid.
#[derive(Debug, Default)]
pub struct CrosswordBuilder {
    title: String,
    description: String,
    author: String,
    copyright: String,
    release_date: Option<NaiveDateTime>,
    width: u32,
    height: u32,
    words: Vec<CrosswordWord>,
}

impl CrosswordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = title.into();
        self
    }

    pub fn description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = description.into();
        self
    }

    pub fn author(&mut self, author: impl Into<String>) -> &mut Self {
        self.author = author.into();
        self
    }

    pub fn copyright(&mut self, copyright: impl Into<String>) -> &mut Self {
        self.copyright = copyright.into();
        self
    }

    pub fn release_date(&mut self, date: NaiveDateTime) -> &mut Self {
        self.release_date = Some(date);
        self
    }

    pub fn width(&mut self, width: u32) -> &mut Self {
        self.width = width;
        self
    }

    pub fn height(&mut self, height: u32) -> &mut Self {
        self.height = height;
        self
    }

    /// Appends a word; order of calls is the order of [`Crossword::words`].
    pub fn add_word(&mut self, word: CrosswordWord) -> &mut Self {
        self.words.push(word);
        self
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Takes over everything `other` holds.
    ///
    /// Metadata is replaced, the release date only when `other` has one, and
    /// `other`'s words are appended after the existing ones.
    pub fn merge(&mut self, other: CrosswordBuilder) -> &mut Self {
        self.title = other.title;
        self.description = other.description;
        self.author = other.author;
        self.copyright = other.copyright;
        if other.release_date.is_some() {
            self.release_date = other.release_date;
        }
        self.width = other.width;
        self.height = other.height;
        self.words.extend(other.words);
        self
    }

    pub fn build(self) -> Crossword {
        Crossword {
            title: self.title,
            description: self.description,
            author: self.author,
            copyright: self.copyright,
            release_date: self.release_date,
            width: self.width,
            height: self.height,
            words: self.words,
        }
    }
}

/// Accumulates the parts of a [`CrosswordWord`].
#[derive(Debug)]
pub struct WordBuilder {
    word: CrosswordWord,
}

impl WordBuilder {
    pub fn new(direction: Direction) -> Self {
        Self {
            word: CrosswordWord {
                direction,
                number: 0,
                hint: String::new(),
                start_row: 0,
                start_column: 0,
                cells: Vec::new(),
            },
        }
    }

    pub fn number(mut self, number: u32) -> Self {
        self.word.number = number;
        self
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.word.hint = hint.into();
        self
    }

    pub fn start(mut self, row: u32, column: u32) -> Self {
        self.word.start_row = row;
        self.word.start_column = column;
        self
    }

    pub fn add_cell(mut self, chars: impl Into<String>, attributes: Option<u8>) -> Self {
        self.word.cells.push(Cell::new(chars, attributes));
        self
    }

    pub fn build(self) -> CrosswordWord {
        self.word
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(direction: Direction, number: u32, answer: &str) -> CrosswordWord {
        answer
            .chars()
            .fold(
                WordBuilder::new(direction).number(number).start(2, 3),
                |wb, ch| wb.add_cell(ch.to_string(), None),
            )
            .build()
    }

    #[test]
    fn direction_titles_ignore_case() {
        assert_eq!(Direction::from_title("across"), Some(Direction::Across));
        assert_eq!(Direction::from_title("DOWN"), Some(Direction::Down));
        assert_eq!(Direction::from_title("Diagonal"), None);
        assert_eq!(Direction::from_title(""), None);
    }

    #[test]
    fn cell_positions_follow_direction() {
        let across: Vec<_> = word(Direction::Across, 1, "CAT").cell_positions().collect();
        assert_eq!(across, vec![(2, 3), (2, 4), (2, 5)]);

        let down: Vec<_> = word(Direction::Down, 1, "CAT").cell_positions().collect();
        assert_eq!(down, vec![(2, 3), (3, 3), (4, 3)]);
    }

    #[test]
    fn cell_positions_stop_at_u32_limit() {
        let mut across = word(Direction::Across, 1, "ABC");
        across.start_column = u32::MAX - 1;
        let positions: Vec<_> = across.cell_positions().collect();
        assert_eq!(positions, vec![(2, u32::MAX - 1), (2, u32::MAX)]);

        let mut down = word(Direction::Down, 1, "ABC");
        down.start_row = u32::MAX;
        let positions: Vec<_> = down.cell_positions().collect();
        assert_eq!(positions, vec![(u32::MAX, 3)]);
    }

    #[test]
    fn merge_replaces_metadata_and_appends_words() {
        let mut target = CrosswordBuilder::new();
        target.title("Old").add_word(word(Direction::Across, 1, "ONE"));

        let mut other = CrosswordBuilder::new();
        other.title("New").width(5).add_word(word(Direction::Down, 2, "TWO"));
        target.merge(other);

        let crossword = target.build();
        assert_eq!(crossword.title, "New");
        assert_eq!(crossword.width, 5);
        assert_eq!(crossword.words.len(), 2);
        assert_eq!(crossword.words[1].answer(), "TWO");
    }

    #[test]
    fn builder_keeps_insertion_order() {
        let mut builder = CrosswordBuilder::new();
        builder
            .title("Sample")
            .width(15)
            .height(15)
            .add_word(word(Direction::Down, 1, "ONE"))
            .add_word(word(Direction::Across, 1, "TWO"))
            .add_word(word(Direction::Across, 4, "SIX"));
        let crossword = builder.build();

        let numbers: Vec<_> = crossword.words.iter().map(|w| (w.direction, w.number)).collect();
        assert_eq!(
            numbers,
            vec![(Direction::Down, 1), (Direction::Across, 1), (Direction::Across, 4)]
        );
        assert_eq!(crossword.words_across().count(), 2);
        assert_eq!(crossword.words_down().count(), 1);
        assert_eq!(crossword.find_word(Direction::Across, 4).map(|w| w.answer()), Some("SIX".to_string()));
        assert!(crossword.find_word(Direction::Down, 4).is_none());
    }
}
