//! Core crossword reader module

pub mod format;
pub mod types;
mod reader;
mod utils;

pub use format::wsj::WsjFormatter;
pub use reader::CrosswordReader;
