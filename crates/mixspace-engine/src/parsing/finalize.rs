use super::state::ParseState;

/// Fixes the length of the in-progress token and appends it to the current
/// group. Idempotent when nothing is in progress.
pub fn finalize_current_token(state: &mut ParseState, index: usize) {
    if let Some(mut token) = state.last_token.take() {
        token.length = index - token.index;
        state.push_token(token);
    }
}

/// Closes the innermost open mark at `index` and reinstates its parent.
pub fn finalize_current_mark(state: &mut ParseState, index: usize, c: char) {
    let Some(id) = state.last_mark else {
        return;
    };
    state.marks[id.0].close(index, c);
    log::trace!("closed mark {} at {index}", id.0);
    state.last_mark = state.mark_stack.pop();
}

/// Closes the innermost open group at `index` and reinstates its parent.
///
/// The root is the floor: with no other group open this does nothing.
pub fn finalize_current_group(state: &mut ParseState, index: usize, c: char) {
    let Some(parent) = state.group_stack.pop() else {
        return;
    };
    let id = state.last_group;
    state.groups[id.0].close(index, c);
    log::trace!("closed group {} at {index}", id.0);
    state.last_group = parent;
}
