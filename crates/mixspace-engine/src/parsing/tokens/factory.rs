//! Builders for leaf tokens.
//!
//! Content tokens are built up one character at a time through
//! `last_token`; every other token is complete when created and goes straight
//! into the current group.

use crate::parsing::{chars::CharType, finalize::finalize_current_token, state::ParseState};

use super::types::{MarkId, MarkSide, SingleToken, TokenKind};

/// Starts a new in-progress content token holding `c`.
pub fn create_content(state: &mut ParseState, index: usize, c: char, t: CharType) {
    state.last_token = Some(SingleToken::new(t.into(), index, c));
}

/// Extends the in-progress token by one character. No-op without one.
pub fn append_content(state: &mut ParseState, c: char) {
    if let Some(token) = state.last_token.as_mut() {
        token.content.push(c);
        token.raw.push(c);
        token.length += 1;
    }
}

/// Emits a bracket delimiter referencing the currently open mark.
pub fn append_bracket(state: &mut ParseState, index: usize, c: char, side: MarkSide) {
    let mut token = SingleToken::new(TokenKind::MarkBrackets, index, c);
    if let Some(mark) = state.last_mark {
        token = token.with_mark(mark, side);
    }
    state.push_token(token);
}

/// Emits one delimiter token of `mark`'s mark-content kind covering `content`.
pub fn append_hyper_mark(
    state: &mut ParseState,
    index: usize,
    mark: MarkId,
    content: &str,
    side: MarkSide,
) {
    finalize_current_token(state, index);
    let kind = TokenKind::from(state.marks[mark.0].kind);
    state.push_token(SingleToken::new(kind, index, content).with_mark(mark, side));
}

/// Emits `content` as one multi-character content token.
pub fn append_hyper_content(state: &mut ParseState, index: usize, content: &str) {
    finalize_current_token(state, index);
    state.push_token(SingleToken::new(TokenKind::ContentHyper, index, content));
}

/// Emits a run of spaces as a single token.
pub fn append_space_run(state: &mut ParseState, index: usize, run: &str) {
    finalize_current_token(state, index);
    state.push_token(SingleToken::new(TokenKind::Space, index, run));
}

/// Emits a punctuation character that plays no bracket or quote role.
pub fn add_normal_punctuation(state: &mut ParseState, index: usize, c: char, t: CharType) {
    state.push_token(SingleToken::new(t.into(), index, c));
}
