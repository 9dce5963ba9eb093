use unicode_width::UnicodeWidthChar;

use super::types::CharType;

/// Maps one character to its [`CharType`].
///
/// The tokenizer never inspects characters directly; every class decision
/// goes through this seam. Closures of type `Fn(char) -> CharType` implement
/// it too, which keeps test classifiers short.
pub trait CharClassifier {
    fn classify(&self, c: char) -> CharType;
}

impl<F> CharClassifier for F
where
    F: Fn(char) -> CharType,
{
    fn classify(&self, c: char) -> CharType {
        self(c)
    }
}

/// Default classifier driven by Unicode properties and East Asian Width.
///
/// Letters and digits are content; their display width decides between
/// half and full width. Punctuation is split by block: ASCII and general
/// punctuation are half width, CJK and full-width forms (plus curly quotes,
/// ellipsis and em dash, which CJK text uses as its own) are full width.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeClassifier;

impl UnicodeClassifier {
    fn is_full_punctuation(c: char) -> bool {
        matches!(
            c,
            '\u{00B7}'
                | '\u{2014}'
                | '\u{2015}'
                | '\u{2018}'..='\u{201F}'
                | '\u{2026}'
                | '\u{3001}'..='\u{3003}'
                | '\u{3008}'..='\u{3011}'
                | '\u{3014}'..='\u{301F}'
                | '\u{3030}'
                | '\u{303D}'
                | '\u{FE10}'..='\u{FE1F}'
                | '\u{FE30}'..='\u{FE4F}'
                | '\u{FF01}'..='\u{FF0F}'
                | '\u{FF1A}'..='\u{FF20}'
                | '\u{FF3B}'..='\u{FF40}'
                | '\u{FF5B}'..='\u{FF65}'
        )
    }

    fn is_half_punctuation(c: char) -> bool {
        c.is_ascii_punctuation()
            || matches!(
                c,
                '\u{00A1}'
                    | '\u{00A7}'
                    | '\u{00AB}'
                    | '\u{00B6}'
                    | '\u{00BB}'
                    | '\u{00BF}'
                    | '\u{2010}'..='\u{2027}'
                    | '\u{2030}'..='\u{205E}'
            )
    }
}

impl CharClassifier for UnicodeClassifier {
    fn classify(&self, c: char) -> CharType {
        if c.is_whitespace() {
            return CharType::Space;
        }
        // Full-width checks first: the general punctuation block overlaps.
        if Self::is_full_punctuation(c) {
            return CharType::PunctuationFull;
        }
        if Self::is_half_punctuation(c) {
            return CharType::PunctuationHalf;
        }
        if c.is_alphanumeric() {
            return match c.width() {
                Some(2) => CharType::ContentFull,
                _ => CharType::ContentHalf,
            };
        }
        CharType::Unknown
    }
}
