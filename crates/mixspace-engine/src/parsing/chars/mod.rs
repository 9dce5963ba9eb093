//! # Character Classes
//!
//! The read-only inputs of a parse: what class a character belongs to, and
//! which characters act as brackets, quotes and shorthand apostrophes.
//!
//! ## Modules
//!
//! - **`types`**: `CharType` enum (space, half/full-width content and punctuation)
//! - **`classify`**: `CharClassifier` trait and the default `UnicodeClassifier`
//! - **`tables`**: `CharTables` with the bracket, quote and shorthand sets
//!
//! Both the classifier and the tables are immutable once built and can be
//! shared across any number of concurrent parses.

pub mod classify;
pub mod tables;
pub mod types;

pub use classify::{CharClassifier, UnicodeClassifier};
pub use tables::{CharTables, ShorthandPair};
pub use types::CharType;
