use crate::parsing::chars::CharType;

/// Index of a group in the group arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(pub usize);

impl GroupId {
    /// The outermost group, installed before the first character is read.
    pub const ROOT: GroupId = GroupId(0);
}

/// Index of a mark in the mark arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkId(pub usize);

/// What produced a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkType {
    /// A bracket pair found by the scan, e.g. `(` and `)`.
    Brackets,
    /// Pre-scanned inline markup; the text between its delimiters is scanned.
    Hyper,
    /// Pre-scanned raw zone; the text between its delimiters is one token.
    Raw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkSide {
    Left,
    Right,
}

/// The kind of a leaf token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Space,
    ContentHalf,
    ContentFull,
    PunctuationHalf,
    PunctuationFull,
    Unknown,
    /// Multi-character content supplied as one unit.
    ContentHyper,
    /// Delimiter of a [`MarkType::Brackets`] mark.
    MarkBrackets,
    /// Delimiter of a [`MarkType::Hyper`] mark.
    MarkHyper,
    /// Delimiter of a [`MarkType::Raw`] mark.
    MarkRaw,
}

impl TokenKind {
    pub fn is_mark(self) -> bool {
        matches!(
            self,
            TokenKind::MarkBrackets | TokenKind::MarkHyper | TokenKind::MarkRaw
        )
    }
}

impl From<CharType> for TokenKind {
    fn from(t: CharType) -> Self {
        match t {
            CharType::Space => TokenKind::Space,
            CharType::ContentHalf => TokenKind::ContentHalf,
            CharType::ContentFull => TokenKind::ContentFull,
            CharType::PunctuationHalf => TokenKind::PunctuationHalf,
            CharType::PunctuationFull => TokenKind::PunctuationFull,
            CharType::Unknown => TokenKind::Unknown,
        }
    }
}

impl From<MarkType> for TokenKind {
    fn from(t: MarkType) -> Self {
        match t {
            MarkType::Brackets => TokenKind::MarkBrackets,
            MarkType::Hyper => TokenKind::MarkHyper,
            MarkType::Raw => TokenKind::MarkRaw,
        }
    }
}

/// A leaf token covering `length` characters from `index`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleToken {
    pub kind: TokenKind,
    /// Text of the token; may be normalized by later passes.
    pub content: String,
    /// Source text of the token, never rewritten.
    pub raw: String,
    pub index: usize,
    pub length: usize,
    /// The mark this token delimits, if any.
    pub mark: Option<MarkId>,
    pub mark_side: Option<MarkSide>,
}

impl SingleToken {
    pub fn new(kind: TokenKind, index: usize, content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            kind,
            length: content.chars().count(),
            raw: content.clone(),
            content,
            index,
            mark: None,
            mark_side: None,
        }
    }

    /// Attaches the token to one side of a mark.
    pub fn with_mark(mut self, mark: MarkId, side: MarkSide) -> Self {
        self.mark = Some(mark);
        self.mark_side = Some(side);
        self
    }

    /// Exclusive end offset.
    pub fn end(&self) -> usize {
        self.index + self.length
    }
}

/// Metadata for a delimited span whose delimiters are ordinary tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mark {
    pub kind: MarkType,
    pub start_index: usize,
    pub start_content: String,
    pub raw_start_content: String,
    /// `None` while the mark is open.
    pub end_index: Option<usize>,
    pub end_content: String,
    pub raw_end_content: String,
}

impl Mark {
    pub fn open(kind: MarkType, index: usize, content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            kind,
            start_index: index,
            raw_start_content: content.clone(),
            start_content: content,
            end_index: None,
            end_content: String::new(),
            raw_end_content: String::new(),
        }
    }

    pub fn close(&mut self, index: usize, content: impl Into<String>) {
        let content = content.into();
        self.end_index = Some(index);
        self.raw_end_content = content.clone();
        self.end_content = content;
    }

    pub fn is_closed(&self) -> bool {
        self.end_index.is_some()
    }

    /// True if `index` falls between the start delimiter and the end
    /// delimiter, both included. An open mark extends to the end of input.
    pub fn encloses(&self, index: usize) -> bool {
        index >= self.start_index && self.end_index.is_none_or(|end| index <= end)
    }
}

/// A quote-delimited container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupToken {
    pub start_index: usize,
    pub start_content: String,
    pub raw_start_content: String,
    /// `None` while the group is open. The root group is never closed.
    pub end_index: Option<usize>,
    pub end_content: String,
    pub raw_end_content: String,
    pub children: Vec<Node>,
}

impl GroupToken {
    pub fn root() -> Self {
        Self::open(0, "")
    }

    pub fn open(index: usize, content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            start_index: index,
            raw_start_content: content.clone(),
            start_content: content,
            end_index: None,
            end_content: String::new(),
            raw_end_content: String::new(),
            children: Vec::new(),
        }
    }

    pub fn close(&mut self, index: usize, c: char) {
        self.end_index = Some(index);
        self.end_content = c.to_string();
        self.raw_end_content = self.end_content.clone();
    }

    pub fn is_closed(&self) -> bool {
        self.end_index.is_some()
    }

    /// True if this group was opened by exactly the character `c`.
    pub fn opened_by(&self, c: char) -> bool {
        let mut chars = self.start_content.chars();
        chars.next() == Some(c) && chars.next().is_none()
    }
}

/// A child of a group: either a leaf token or a nested group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Token(SingleToken),
    Group(GroupId),
}
