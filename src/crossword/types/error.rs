//! Custom error types for the xword-reader crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
///
/// Every variant is fatal: the parse stops at the first one and no partially
/// filled crossword is handed back.
#[derive(Debug, Error)]
pub enum CrosswordError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// The input bytes are not valid text in the declared encoding.
    #[error("Error parsing JSON object: input is not valid {encoding}")]
    Decode { encoding: &'static str },

    /// The decoded text is not a valid JSON document.
    #[error("Error parsing JSON object: {0}")]
    Json(#[from] serde_json::Error),

    /// A required nested object or array is absent.
    #[error("Missing '{0}'")]
    MissingObject(&'static str),

    /// A clue bucket has no nested `clues` array.
    #[error("Missing 'data.copy.clues[{0}].clues'")]
    MissingClueList(usize),

    /// The clue table does not hold exactly one bucket per direction.
    #[error("Unexpected clues length of '{0}'")]
    UnexpectedCluesLength(usize),

    /// A clue bucket's title is neither "Across" nor "Down".
    #[error("Invalid direction: '{title}' at 'data.copy.clues[{bucket}].title'")]
    InvalidDirection { bucket: usize, title: String },

    /// An array element that must be a JSON object is something else.
    #[error("'{path}' is not an object")]
    NotAnObject { path: String },

    /// A word record has no usable identifier.
    #[error("Word missing identifier at 'data.copy.words[{index}]'")]
    WordMissingId { index: usize },

    /// A word record lacks one of its coordinates.
    #[error("Word missing '{axis}' at 'data.copy.words[{index}]'")]
    WordMissingCoordinate { index: usize, axis: &'static str },

    /// A word coordinate is not a positive 1-based number (or range).
    #[error("Invalid '{axis}' value '{value}' at 'data.copy.words[{index}]'")]
    InvalidCoordinate {
        index: usize,
        axis: &'static str,
        value: String,
    },

    /// A grid dimension is present but not a usable count.
    #[error("Invalid '{field}' value '{value}' at 'data.copy.gridsize'")]
    InvalidGridSize { field: &'static str, value: i64 },

    /// A sub-clue lacks a required field or carries a malformed one.
    #[error("Missing or invalid '{field}' at 'data.copy.clues[{bucket}].clues[{clue}]'")]
    InvalidClueField {
        bucket: usize,
        clue: usize,
        field: &'static str,
    },

    /// A sub-clue refers to a word id that the word table does not contain.
    #[error("No matching word for clue at 'data.copy.clues[{bucket}].clues[{clue}].word'")]
    UnmatchedWord { bucket: usize, clue: usize },

    /// The release date does not follow `yyyy-MM-dd HH:mm:ss`.
    #[error("Can't parse '{0}' as release date")]
    InvalidReleaseDate(String),

    /// The requested text encoding label is unknown.
    #[error("Unknown text encoding: '{0}'")]
    UnknownEncoding(String),

    /// A word locator string does not follow `scheme://direction/number`.
    #[error("Invalid word locator: '{0}'")]
    InvalidLocator(String),

    /// The operation is not available for this format.
    #[error("{0} not supported")]
    Unsupported(&'static str),
}

/// The class of failure an error belongs to.
///
/// Variants of [`CrosswordError`] are fine-grained for diagnostics; this groups
/// them so callers can react to a whole class at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Io,
    Syntax,
    MissingStructure,
    Shape,
    Field,
    CrossReference,
    Date,
    Unsupported,
    Config,
}

impl CrosswordError {
    /// Returns the taxonomy class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CrosswordError::Io(_) => ErrorKind::Io,
            CrosswordError::Decode { .. } | CrosswordError::Json(_) => ErrorKind::Syntax,
            CrosswordError::MissingObject(_) | CrosswordError::MissingClueList(_) => {
                ErrorKind::MissingStructure
            }
            CrosswordError::UnexpectedCluesLength(_)
            | CrosswordError::InvalidDirection { .. }
            | CrosswordError::NotAnObject { .. } => ErrorKind::Shape,
            CrosswordError::WordMissingId { .. }
            | CrosswordError::WordMissingCoordinate { .. }
            | CrosswordError::InvalidCoordinate { .. }
            | CrosswordError::InvalidGridSize { .. }
            | CrosswordError::InvalidClueField { .. } => ErrorKind::Field,
            CrosswordError::UnmatchedWord { .. } => ErrorKind::CrossReference,
            CrosswordError::InvalidReleaseDate(_) => ErrorKind::Date,
            CrosswordError::Unsupported(_) => ErrorKind::Unsupported,
            CrosswordError::UnknownEncoding(_) | CrosswordError::InvalidLocator(_) => {
                ErrorKind::Config
            }
        }
    }
}

/// A convenience `Result` type alias using the crate's `CrosswordError` type.
pub type Result<T> = std::result::Result<T, CrosswordError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_location() {
        let err = CrosswordError::UnmatchedWord { bucket: 1, clue: 4 };
        assert_eq!(
            err.to_string(),
            "No matching word for clue at 'data.copy.clues[1].clues[4].word'"
        );
        assert_eq!(err.kind(), ErrorKind::CrossReference);

        let err = CrosswordError::UnexpectedCluesLength(3);
        assert!(err.to_string().contains("'3'"));
        assert_eq!(err.kind(), ErrorKind::Shape);
    }

    #[test]
    fn unsupported_is_its_own_kind() {
        let err = CrosswordError::Unsupported("Writing");
        assert_eq!(err.to_string(), "Writing not supported");
        assert_eq!(err.kind(), ErrorKind::Unsupported);
    }
}
