//! Scanner error types.
//!
//! Every error carries the [`Position`] it refers to and renders as
//! `line:column: message`.

use bdl_ir::Position;
use thiserror::Error;

/// A scanner error.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("{pos}: {kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub pos: Position,
}

/// What went wrong.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexErrorKind {
    /// The buffer is exhausted. At a token boundary this is the normal end
    /// of the token stream.
    #[error("end of input")]
    EndOfInput,
    /// A scan routine found nothing to scan, or `/` introduced neither a
    /// line nor a block comment.
    #[error("format error")]
    Format,
    /// A run of marks that spells no operator.
    #[error("unknown operator `{text}`")]
    UnknownOperator { text: String },
    /// `/*` without a matching `*/`.
    #[error("block comment is not closed")]
    UnterminatedComment,
    /// A character that can start no token.
    #[error("invalid character {ch:?}")]
    InvalidChar { ch: char },
}

impl LexError {
    #[inline]
    pub fn end_of_input(pos: Position) -> Self {
        LexError {
            kind: LexErrorKind::EndOfInput,
            pos,
        }
    }

    #[cold]
    pub fn format(pos: Position) -> Self {
        LexError {
            kind: LexErrorKind::Format,
            pos,
        }
    }

    #[cold]
    pub fn unknown_operator(pos: Position, text: impl Into<String>) -> Self {
        LexError {
            kind: LexErrorKind::UnknownOperator { text: text.into() },
            pos,
        }
    }

    /// `pos` is where the comment started.
    #[cold]
    pub fn unterminated_comment(pos: Position) -> Self {
        LexError {
            kind: LexErrorKind::UnterminatedComment,
            pos,
        }
    }

    #[cold]
    pub fn invalid_char(pos: Position, ch: char) -> Self {
        LexError {
            kind: LexErrorKind::InvalidChar { ch },
            pos,
        }
    }

    #[inline]
    pub fn is_end_of_input(&self) -> bool {
        self.kind == LexErrorKind::EndOfInput
    }
}
