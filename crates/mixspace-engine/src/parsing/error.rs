use thiserror::Error;

/// Fatal tokenizer errors. A failed parse produces no document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizeError {
    #[error("Unmatched closed bracket {ch} at {index}")]
    UnmatchedClosingBracket { ch: char, index: usize },

    #[error("Unmatched closed quote {ch} at {index}")]
    UnmatchedClosingQuote { ch: char, index: usize },

    #[error("Invalid hyper mark starting at {start}: {reason}")]
    InvalidHyperMark { start: usize, reason: String },
}
