//! # Tokenizing
//!
//! Single-pass tokenizer for mixed-script prose. One forward scan turns a
//! string into a tree of content runs, punctuation, bracket marks and quote
//! groups that later lint passes walk.
//!
//! ## Architecture
//!
//! ```text
//! chars ─► classify ─┬─► shorthand? ──► content run
//!                    ├─► punctuation ─► marks / groups / plain punctuation
//!                    ├─► space ───────► space run
//!                    └─► other ───────► content run
//! ```
//!
//! All of it runs over one [`state::ParseState`], created fresh per parse and
//! passed by `&mut` to free functions. Nothing is shared between parses
//! except the read-only [`chars::CharTables`] and classifier.
//!
//! ## Modules
//!
//! - **`chars`**: `CharType`, the `CharClassifier` seam and `CharTables`
//! - **`tokens`**: token/group/mark shapes, the token factory and `Document`
//! - **`state`**: `ParseState`, the per-parse context
//! - **`finalize`**: closing the current token, mark or group
//! - **`marks`**: bracket marks (stack nesting)
//! - **`groups`**: quote groups (tree nesting, neutral toggling)
//! - **`dispatch`**: content merging and the punctuation decision procedure
//! - **`shorthand`**: apostrophe vs. quote disambiguation
//! - **`space`**: space run lookahead
//! - **`scanner`**: `Tokenizer`, the character loop and hyper marks
//! - **`snapshot`**: stable rendering and invariant checks for tests
//!
//! ## Failure
//!
//! An unmatched closing bracket or quote aborts the parse. Brackets and
//! quotes that are never closed are not errors: they stay open
//! (`end_index == None`) for document-level checks to report.

pub mod chars;
pub mod dispatch;
pub mod error;
pub mod finalize;
pub mod groups;
pub mod marks;
pub mod scanner;
pub mod shorthand;
pub mod snapshot;
pub mod space;
pub mod state;
pub mod tokens;

#[cfg(test)]
mod tests;

pub use error::TokenizeError;
pub use scanner::Tokenizer;

use tokens::Document;

/// Tokenizes `text` with the default classifier and tables.
pub fn tokenize(text: &str) -> Result<Document, TokenizeError> {
    Tokenizer::new().tokenize(text)
}
