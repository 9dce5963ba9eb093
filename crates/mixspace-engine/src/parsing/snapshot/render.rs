use std::fmt::Write;

use crate::parsing::tokens::{Document, SingleToken, document::Visit};

fn span_end(end: Option<usize>) -> String {
    end.map_or_else(|| "?".to_string(), |e| e.to_string())
}

fn token_line(t: &SingleToken) -> String {
    let mut line = format!("{:?}@{}+{} {:?}", t.kind, t.index, t.length, t.raw);
    if let (Some(mark), Some(side)) = (t.mark, t.mark_side) {
        let _ = write!(line, " mark#{} {side:?}", mark.0);
    }
    line
}

/// Renders the token tree and mark list, one node per line.
///
/// ```text
/// Root
///   MarkBrackets@0+1 "(" mark#0 Left
///   ContentHalf@1+2 "hi"
///   MarkBrackets@3+1 ")" mark#0 Right
/// Marks
///   #0 Brackets@0..3 "(" ")"
/// ```
pub fn render(doc: &Document) -> String {
    let mut lines = vec![];
    let mut depth = 0usize;
    doc.walk(|v| match v {
        Visit::Enter(id, g) => {
            if id.0 == 0 {
                lines.push("Root".to_string());
            } else {
                lines.push(format!(
                    "{}Group@{}..{} {:?} {:?}",
                    "  ".repeat(depth),
                    g.start_index,
                    span_end(g.end_index),
                    g.raw_start_content,
                    g.raw_end_content
                ));
            }
            depth += 1;
        }
        Visit::Token(t) => lines.push(format!("{}{}", "  ".repeat(depth), token_line(t))),
        Visit::Exit(..) => depth -= 1,
    });

    if !doc.marks().is_empty() {
        lines.push("Marks".to_string());
        for (i, m) in doc.marks().iter().enumerate() {
            lines.push(format!(
                "  #{i} {:?}@{}..{} {:?} {:?}",
                m.kind,
                m.start_index,
                span_end(m.end_index),
                m.raw_start_content,
                m.raw_end_content
            ));
        }
    }
    lines.join("\n")
}
