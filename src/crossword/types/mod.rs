//! Foundational data structures, error types, and the formatter trait.

pub mod error;
pub mod formatter;
pub mod locator;
pub mod models;
