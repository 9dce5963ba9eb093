//! # Tokens
//!
//! The output shapes of a parse and the helpers that build them.
//!
//! ## Modules
//!
//! - **`types`**: `SingleToken` leaves, `GroupToken` containers, `Mark`
//!   metadata and the `Node` variant tying leaves and groups together
//! - **`factory`**: functions that create, extend and append leaf tokens
//! - **`document`**: `Document`, the finished parse with whole-document queries
//!
//! Groups and marks live in arenas and are addressed by `GroupId` / `MarkId`.
//! A bracket token refers to its mark by id; it never owns it.

pub mod document;
pub mod factory;
pub mod types;

pub use document::Document;
pub use types::{GroupId, GroupToken, Mark, MarkId, MarkSide, MarkType, Node, SingleToken, TokenKind};
