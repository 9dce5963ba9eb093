//! # Snapshot Testing Support
//!
//! Utilities for testing the tokenizer via snapshot assertions and invariant
//! checks.
//!
//! ## Modules
//!
//! - **`render`**: Converts a `Document` to a stable, indented text tree for
//!   `insta` snapshots
//! - **`invariants`**: Runtime checks for tokenizer correctness (lossless
//!   text, contiguous offsets, mark tokens inside their marks)

pub mod invariants;
pub mod render;

pub use invariants::check as check_invariants;
pub use render::render;
