use super::{
    chars::{CharClassifier, CharTables, CharType},
    state::ParseState,
    tokens::TokenKind,
};

/// Decides whether an apostrophe-like character at `index` is part of a word
/// (`don't`, `students' books`) rather than a quote delimiter.
///
/// Only a character that directly follows an in-progress half-width content
/// run qualifies. Before another half-width character it is always
/// shorthand. Before a space it is shorthand unless the open group was
/// started by the quote this character pairs with, in which case it closes
/// that group. Anything else, including end of input, makes it a quote.
pub fn is_shorthand<C: CharClassifier + ?Sized>(
    chars: &[char],
    state: &ParseState,
    tables: &CharTables,
    classifier: &C,
    index: usize,
    c: char,
) -> bool {
    if !tables.is_shorthand(c) {
        return false;
    }
    if !matches!(&state.last_token, Some(t) if t.kind == TokenKind::ContentHalf) {
        return false;
    }
    let Some(&next) = chars.get(index + 1) else {
        return false;
    };
    match classifier.classify(next) {
        CharType::ContentHalf => true,
        CharType::Space => {
            if !state.has_open_group() {
                return true;
            }
            match tables.paired_quote(c) {
                Some(quote) => !state.current_group().opened_by(quote),
                None => true,
            }
        }
        _ => false,
    }
}
