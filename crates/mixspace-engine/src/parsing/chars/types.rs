/// The class of a single character as seen by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharType {
    /// Any whitespace character.
    Space,
    /// Letters and digits rendered at half width (Latin, Cyrillic, digits, ...).
    ContentHalf,
    /// Letters rendered at full width (Han, Kana, Hangul, ...).
    ContentFull,
    /// ASCII punctuation and most general punctuation.
    PunctuationHalf,
    /// CJK and full-width punctuation, including curly quotes.
    PunctuationFull,
    /// Anything else (symbols, emoji, control characters).
    Unknown,
}

impl CharType {
    pub fn is_punctuation(self) -> bool {
        matches!(self, CharType::PunctuationHalf | CharType::PunctuationFull)
    }
}
