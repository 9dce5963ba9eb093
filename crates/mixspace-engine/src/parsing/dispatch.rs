use super::{
    chars::{CharTables, CharType},
    error::TokenizeError,
    finalize::finalize_current_token,
    groups::{close_quote, create_new_group, toggle_neutral_quote},
    marks::{close_bracket, open_bracket},
    state::ParseState,
    tokens::{
        TokenKind,
        factory::{add_normal_punctuation, append_content, create_content},
    },
};

/// Routes a punctuation character.
///
/// A content run never spans punctuation, so the in-progress token is
/// finalized first. Roles are tested in a fixed order: brackets, neutral
/// quotes, left quotes, right quotes, then plain punctuation.
pub fn handle_punctuation(
    state: &mut ParseState,
    tables: &CharTables,
    index: usize,
    c: char,
    t: CharType,
) -> Result<(), TokenizeError> {
    finalize_current_token(state, index);

    if tables.is_left_bracket(c) {
        open_bracket(state, index, c);
    } else if tables.is_right_bracket(c) {
        close_bracket(state, index, c)?;
    } else if tables.is_neutral_quote(c) {
        toggle_neutral_quote(state, index, c);
    } else if tables.is_left_quote(c) {
        create_new_group(state, index, c);
    } else if tables.is_right_quote(c) {
        close_quote(state, index, c)?;
    } else {
        add_normal_punctuation(state, index, c, t);
    }
    Ok(())
}

/// Merges `c` into the in-progress content run, or splits the run when the
/// class changes. `Unknown` characters never force a split.
pub fn handle_content(state: &mut ParseState, index: usize, c: char, t: CharType) {
    match state.last_token.as_ref().map(|token| token.kind) {
        Some(kind) if t != CharType::Unknown && kind != TokenKind::from(t) => {
            finalize_current_token(state, index);
            create_content(state, index, c, t);
        }
        Some(_) => append_content(state, c),
        None => create_content(state, index, c, t),
    }
}
