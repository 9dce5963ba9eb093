//! Bracket marks.
//!
//! Brackets nest with a plain stack discipline: opening pushes the current
//! mark, closing pops it back. The bracket characters themselves are emitted
//! as `MarkBrackets` tokens into whatever group is current.

use super::{
    error::TokenizeError,
    finalize::finalize_current_mark,
    state::ParseState,
    tokens::{Mark, MarkSide, MarkType, factory::append_bracket},
};

/// Records a new mark opened by `c` at `index` and makes it current.
pub fn create_bracket(state: &mut ParseState, index: usize, c: char, kind: MarkType) {
    if let Some(open) = state.last_mark.take() {
        state.mark_stack.push(open);
    }
    let id = state.add_mark(Mark::open(kind, index, c));
    log::trace!("opened mark {} with {c:?} at {index}", id.0);
    state.last_mark = Some(id);
}

/// Handles a left bracket character.
pub fn open_bracket(state: &mut ParseState, index: usize, c: char) {
    create_bracket(state, index, c, MarkType::Brackets);
    append_bracket(state, index, c, MarkSide::Left);
}

/// Handles a right bracket character.
pub fn close_bracket(state: &mut ParseState, index: usize, c: char) -> Result<(), TokenizeError> {
    if state.last_mark.is_none() {
        log::debug!("unmatched closing bracket {c:?} at {index}");
        return Err(TokenizeError::UnmatchedClosingBracket { ch: c, index });
    }
    append_bracket(state, index, c, MarkSide::Right);
    finalize_current_mark(state, index, c);
    Ok(())
}
