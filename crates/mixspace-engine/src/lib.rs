pub mod parsing;

// Re-export key types for easier usage
pub use parsing::{
    Tokenizer,
    chars::{CharClassifier, CharTables, CharType, ShorthandPair, UnicodeClassifier},
    error::TokenizeError,
    scanner::{HyperKind, HyperMark},
    tokenize,
    tokens::{Document, GroupId, GroupToken, Mark, MarkId, MarkSide, MarkType, Node, SingleToken, TokenKind},
};
