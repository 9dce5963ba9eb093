use serde::{Deserialize, Serialize};

/// A shorthand apostrophe and the quote character it can be mistaken for.
///
/// `'` in `don't` pairs with the neutral `'`; `’` in `don’t` pairs with the
/// left quote `‘` that would have opened the group it might be closing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShorthandPair {
    pub mark: char,
    pub quote: char,
}

/// Which characters open and close marks and groups.
///
/// Every field falls back to its default when omitted from a serialized
/// table, so a config file only needs to list what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharTables {
    pub left_brackets: Vec<char>,
    pub right_brackets: Vec<char>,
    pub left_quotes: Vec<char>,
    pub right_quotes: Vec<char>,
    /// Quotes whose open and close glyphs are the same.
    pub neutral_quotes: Vec<char>,
    pub shorthand: Vec<ShorthandPair>,
}

impl Default for CharTables {
    fn default() -> Self {
        Self {
            left_brackets: vec!['(', '（'],
            right_brackets: vec![')', '）'],
            left_quotes: vec!['“', '‘', '「', '『', '《', '〈'],
            right_quotes: vec!['”', '’', '」', '』', '》', '〉'],
            neutral_quotes: vec!['"', '\''],
            shorthand: vec![
                ShorthandPair {
                    mark: '\'',
                    quote: '\'',
                },
                ShorthandPair {
                    mark: '’',
                    quote: '‘',
                },
            ],
        }
    }
}

impl CharTables {
    pub fn is_left_bracket(&self, c: char) -> bool {
        self.left_brackets.contains(&c)
    }

    pub fn is_right_bracket(&self, c: char) -> bool {
        self.right_brackets.contains(&c)
    }

    pub fn is_left_quote(&self, c: char) -> bool {
        self.left_quotes.contains(&c)
    }

    pub fn is_right_quote(&self, c: char) -> bool {
        self.right_quotes.contains(&c)
    }

    pub fn is_neutral_quote(&self, c: char) -> bool {
        self.neutral_quotes.contains(&c)
    }

    pub fn is_quote(&self, c: char) -> bool {
        self.is_left_quote(c) || self.is_right_quote(c) || self.is_neutral_quote(c)
    }

    pub fn is_shorthand(&self, c: char) -> bool {
        self.shorthand.iter().any(|p| p.mark == c)
    }

    /// Returns the quote a shorthand character must not be confused with.
    pub fn paired_quote(&self, c: char) -> Option<char> {
        self.shorthand.iter().find(|p| p.mark == c).map(|p| p.quote)
    }
}
