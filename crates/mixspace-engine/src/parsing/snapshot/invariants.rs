use crate::parsing::tokens::{Document, MarkSide, document::Visit};

/// Validates tokenizer output invariants against the source `text`.
///
/// Asserts that:
/// - The document renders back to `text` exactly
/// - Group delimiters and leaf tokens tile the input with no gaps or overlaps
/// - Each leaf's `length` matches its raw text
/// - Exactly the delimiter tokens reference a mark
/// - Mark delimiter tokens sit on their mark's start or end
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(text: &str, doc: &Document) {
    assert_eq!(doc.raw_text(), text, "document does not round-trip");

    let n = text.chars().count();
    let mut cursor = 0usize;
    doc.walk(|v| match v {
        Visit::Enter(id, g) => {
            if id.0 == 0 {
                return;
            }
            assert_eq!(g.start_index, cursor, "group {} starts off the cursor", id.0);
            cursor += g.raw_start_content.chars().count();
        }
        Visit::Token(t) => {
            assert_eq!(t.index, cursor, "token {t:?} starts off the cursor");
            assert_eq!(t.length, t.raw.chars().count(), "token {t:?} has a stale length");
            assert_eq!(t.kind.is_mark(), t.mark.is_some(), "token {t:?} mark mismatch");
            cursor = t.end();

            let (Some(id), Some(side)) = (t.mark, t.mark_side) else {
                return;
            };
            let mark = doc.mark(id);
            assert!(mark.encloses(t.index), "token {t:?} outside mark {mark:?}");
            match side {
                MarkSide::Left => assert_eq!(t.index, mark.start_index),
                MarkSide::Right => assert_eq!(Some(t.index), mark.end_index),
            }
        }
        Visit::Exit(id, g) => {
            if let Some(end) = g.end_index {
                assert_eq!(end, cursor, "group {} ends off the cursor", id.0);
                cursor += g.raw_end_content.chars().count();
            }
        }
    });
    assert_eq!(cursor, n, "tokens do not cover the input");
}
