//! Quote groups.
//!
//! Unlike marks, groups are containers: opening one nests it as a child of
//! the current group and everything up to its closing quote lands inside it.

use super::{
    error::TokenizeError,
    finalize::finalize_current_group,
    state::ParseState,
    tokens::{GroupToken, Node},
};

/// Opens a group with `c` at `index` inside the current group.
pub fn create_new_group(state: &mut ParseState, index: usize, c: char) {
    let parent = state.last_group;
    state.group_stack.push(parent);
    let id = state.add_group(GroupToken::open(index, c));
    state.groups[parent.0].children.push(Node::Group(id));
    log::trace!("opened group {} with {c:?} at {index}", id.0);
    state.last_group = id;
}

/// Handles a neutral quote: closes the current group if `c` opened it,
/// otherwise opens a new one.
pub fn toggle_neutral_quote(state: &mut ParseState, index: usize, c: char) {
    if state.has_open_group() && state.current_group().opened_by(c) {
        finalize_current_group(state, index, c);
    } else {
        create_new_group(state, index, c);
    }
}

/// Handles a right quote.
pub fn close_quote(state: &mut ParseState, index: usize, c: char) -> Result<(), TokenizeError> {
    if !state.has_open_group() {
        log::debug!("unmatched closing quote {c:?} at {index}");
        return Err(TokenizeError::UnmatchedClosingQuote { ch: c, index });
    }
    finalize_current_group(state, index, c);
    Ok(())
}
