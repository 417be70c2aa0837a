//! File format parsing layer.
//!
//! Each submodule turns one puzzle source format into the shared
//! [`Crossword`](crate::crossword::types::models::Crossword) model by
//! implementing [`CrosswordFormatter`](crate::crossword::types::formatter::CrosswordFormatter).
//!
//! # Module Organization
//!
//! - [`wsj`]: The WSJ JSON dialect (read-only)
//!
//! # Architecture
//!
//! ```text
//! WSJ document:
//! ┌──────────────────────┐
//! │  data.copy metadata  │ ← wsj::WsjFormatter
//! ├──────────────────────┤
//! │  data.copy.words     │ ← wsj::words::parse()
//! │  (id → anchor)       │
//! ├──────────────────────┤
//! │  data.copy.clues     │ ← wsj::clues::parse()
//! │  (Across / Down)     │
//! └──────────────────────┘
//! ```

pub mod wsj;
