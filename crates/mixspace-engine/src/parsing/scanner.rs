use super::{
    chars::{CharClassifier, CharTables, CharType, UnicodeClassifier},
    dispatch::{handle_content, handle_punctuation},
    error::TokenizeError,
    finalize::finalize_current_token,
    shorthand::is_shorthand,
    space::connecting_space_length,
    state::ParseState,
    tokens::{
        Document, Mark, MarkId, MarkSide, MarkType,
        factory::{append_content, append_hyper_content, append_hyper_mark, append_space_run},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HyperKind {
    /// Inline markup such as `**strong**`; the inner text is tokenized.
    Hyper,
    /// A raw zone such as `` `code` ``; the inner text is one token.
    Raw,
}

impl From<HyperKind> for MarkType {
    fn from(k: HyperKind) -> Self {
        match k {
            HyperKind::Hyper => MarkType::Hyper,
            HyperKind::Raw => MarkType::Raw,
        }
    }
}

/// A span found by an earlier pass (usually a markup parser) that the
/// tokenizer must emit as whole delimiter tokens.
///
/// Offsets are character offsets into the text being tokenized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HyperMark {
    pub kind: HyperKind,
    pub start: usize,
    pub start_content: String,
    pub end: usize,
    pub end_content: String,
}

impl HyperMark {
    pub fn hyper(
        start: usize,
        start_content: impl Into<String>,
        end: usize,
        end_content: impl Into<String>,
    ) -> Self {
        Self {
            kind: HyperKind::Hyper,
            start,
            start_content: start_content.into(),
            end,
            end_content: end_content.into(),
        }
    }

    pub fn raw(
        start: usize,
        start_content: impl Into<String>,
        end: usize,
        end_content: impl Into<String>,
    ) -> Self {
        Self {
            kind: HyperKind::Raw,
            ..Self::hyper(start, start_content, end, end_content)
        }
    }
}

/// One delimiter of a registered hyper mark.
#[derive(Debug, Clone)]
struct Boundary {
    pos: usize,
    len: usize,
    mark: MarkId,
    kind: MarkType,
    side: MarkSide,
    content: String,
}

/// Hyper mark delimiters in document order, consumed as the scan passes them.
#[derive(Debug, Default)]
struct Boundaries {
    items: Vec<Boundary>,
    next: usize,
}

impl Boundaries {
    /// Validates `hyper` against the text and records each one as a closed
    /// mark in `state`.
    fn register(
        chars: &[char],
        hyper: &[HyperMark],
        state: &mut ParseState,
    ) -> Result<Self, TokenizeError> {
        let mut items = Vec::with_capacity(hyper.len() * 2);
        for h in hyper {
            let invalid = |reason: &str| TokenizeError::InvalidHyperMark {
                start: h.start,
                reason: reason.to_string(),
            };
            let start_len = h.start_content.chars().count();
            let end_len = h.end_content.chars().count();
            if start_len == 0 || end_len == 0 {
                return Err(invalid("empty delimiter"));
            }
            let fits = h.start.checked_add(start_len).is_some_and(|e| e <= h.end)
                && h.end.checked_add(end_len).is_some_and(|e| e <= chars.len());
            if !fits {
                return Err(invalid("out of bounds"));
            }
            if !matches_at(chars, h.start, &h.start_content) || !matches_at(chars, h.end, &h.end_content)
            {
                return Err(invalid("delimiter does not match the text"));
            }

            let kind = MarkType::from(h.kind);
            let mut mark = Mark::open(kind, h.start, h.start_content.as_str());
            mark.close(h.end, h.end_content.as_str());
            let id = state.add_mark(mark);

            items.push(Boundary {
                pos: h.start,
                len: start_len,
                mark: id,
                kind,
                side: MarkSide::Left,
                content: h.start_content.clone(),
            });
            items.push(Boundary {
                pos: h.end,
                len: end_len,
                mark: id,
                kind,
                side: MarkSide::Right,
                content: h.end_content.clone(),
            });
        }
        items.sort_by_key(|b| b.pos);
        Self::check_nesting(&items, hyper, state)?;
        Ok(Self { items, next: 0 })
    }

    /// Delimiters may not overlap, spans may nest but not cross, and nothing
    /// may start inside a raw span.
    fn check_nesting(
        items: &[Boundary],
        hyper: &[HyperMark],
        state: &ParseState,
    ) -> Result<(), TokenizeError> {
        let invalid = |b: &Boundary, reason: &str| TokenizeError::InvalidHyperMark {
            start: state.marks[b.mark.0].start_index,
            reason: reason.to_string(),
        };
        let mut open: Vec<&Boundary> = Vec::with_capacity(hyper.len());
        for (i, b) in items.iter().enumerate() {
            if let Some(prev) = i.checked_sub(1).map(|p| &items[p])
                && prev.pos + prev.len > b.pos
            {
                return Err(invalid(b, "overlaps another hyper mark"));
            }
            match b.side {
                MarkSide::Left => {
                    if open.last().is_some_and(|o| o.kind == MarkType::Raw) {
                        return Err(invalid(b, "starts inside a raw hyper mark"));
                    }
                    open.push(b);
                }
                MarkSide::Right => {
                    if open.pop().map(|o| o.mark) != Some(b.mark) {
                        return Err(invalid(b, "crosses another hyper mark"));
                    }
                }
            }
        }
        Ok(())
    }

    /// Takes the delimiter starting at `pos`, if there is one.
    fn take_at(&mut self, pos: usize) -> Option<Boundary> {
        let b = self.items.get(self.next).filter(|b| b.pos == pos)?.clone();
        self.next += 1;
        Some(b)
    }

    /// Characters from `pos` to the next delimiter.
    fn distance_to_next(&self, pos: usize) -> usize {
        self.items
            .get(self.next)
            .map_or(usize::MAX, |b| b.pos.saturating_sub(pos))
    }
}

fn matches_at(chars: &[char], at: usize, content: &str) -> bool {
    chars.get(at..).is_some_and(|rest| {
        rest.len() >= content.chars().count() && content.chars().zip(rest).all(|(a, &b)| a == b)
    })
}

fn collect(chars: &[char]) -> String {
    chars.iter().collect()
}

/// The tokenizer: immutable configuration plus the character loop.
///
/// Every call builds its own [`ParseState`], so one tokenizer can serve any
/// number of parses, sequentially or from several threads.
#[derive(Debug, Clone)]
pub struct Tokenizer<C = UnicodeClassifier> {
    tables: CharTables,
    classifier: C,
}

impl Tokenizer<UnicodeClassifier> {
    pub fn new() -> Self {
        Self::with_tables(CharTables::default())
    }

    pub fn with_tables(tables: CharTables) -> Self {
        Self::with_classifier(tables, UnicodeClassifier)
    }
}

impl Default for Tokenizer<UnicodeClassifier> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: CharClassifier> Tokenizer<C> {
    pub fn with_classifier(tables: CharTables, classifier: C) -> Self {
        Self { tables, classifier }
    }

    pub fn tokenize(&self, text: &str) -> Result<Document, TokenizeError> {
        self.tokenize_with_hyper_marks(text, &[])
    }

    /// Tokenizes `text`, emitting each of `hyper` as whole delimiter tokens.
    ///
    /// Fails on the first unmatched closing bracket or quote, or if a hyper
    /// mark does not fit the text. Brackets and quotes still open at the end
    /// are left unterminated in the returned document.
    pub fn tokenize_with_hyper_marks(
        &self,
        text: &str,
        hyper: &[HyperMark],
    ) -> Result<Document, TokenizeError> {
        let chars: Vec<char> = text.chars().collect();
        let mut state = ParseState::new();
        let mut boundaries = Boundaries::register(&chars, hyper, &mut state)?;

        let mut i = 0;
        while i < chars.len() {
            if let Some(b) = boundaries.take_at(i) {
                i = self.emit_boundary(&mut state, &chars, &mut boundaries, b);
                continue;
            }

            let c = chars[i];
            let t = self.classifier.classify(c);
            if is_shorthand(&chars, &state, &self.tables, &self.classifier, i, c) {
                append_content(&mut state, c);
            } else if t.is_punctuation() {
                handle_punctuation(&mut state, &self.tables, i, c, t)?;
            } else if t == CharType::Space {
                let run = connecting_space_length(&chars, i, &self.classifier)
                    .min(boundaries.distance_to_next(i))
                    .max(1);
                append_space_run(&mut state, i, &collect(&chars[i..i + run]));
                i += run;
                continue;
            } else {
                handle_content(&mut state, i, c, t);
            }
            i += 1;
        }
        finalize_current_token(&mut state, chars.len());

        let doc = state.into_document();
        if log::log_enabled!(log::Level::Debug) {
            log::debug!(
                "tokenized {} chars: {} groups ({} unterminated), {} marks ({} unterminated)",
                chars.len(),
                doc.groups().count(),
                doc.unterminated_groups().count(),
                doc.marks().len(),
                doc.unterminated_marks().count(),
            );
        }
        Ok(doc)
    }

    /// Emits one hyper delimiter and returns the index to resume at. A raw
    /// left delimiter also emits the raw inner text and its right delimiter.
    fn emit_boundary(
        &self,
        state: &mut ParseState,
        chars: &[char],
        boundaries: &mut Boundaries,
        b: Boundary,
    ) -> usize {
        append_hyper_mark(state, b.pos, b.mark, &b.content, b.side);
        let after = b.pos + b.len;
        if b.kind != MarkType::Raw || b.side != MarkSide::Left {
            return after;
        }

        let close_at = state.marks[b.mark.0].end_index.unwrap_or(after);
        if close_at > after {
            append_hyper_content(state, after, &collect(&chars[after..close_at]));
        }
        match boundaries.take_at(close_at) {
            Some(right) => {
                append_hyper_mark(state, right.pos, right.mark, &right.content, right.side);
                right.pos + right.len
            }
            None => close_at,
        }
    }
}
