//! Token types for the BDL scanner.

mod kind;
mod table;

pub use kind::TokenKind;
pub use table::{delimiter, is_delimiter, lookup_keyword};

use std::fmt;

use crate::PosRange;

/// A scanned lexeme: its kind, its exact text and where it sits.
///
/// Immutable once produced.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub range: PosRange,
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, literal: impl Into<String>, range: PosRange) -> Self {
        Token {
            range,
            kind,
            literal: literal.into(),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?}) @ {}", self.kind, self.literal, self.range)
    }
}
