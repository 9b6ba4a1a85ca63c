//! Parse error types.
//!
//! Scanner failures pass through unchanged; the parser adds its own
//! grammar-level errors on top.

use bdl_ir::{Position, TokenKind};
use bdl_lexer::LexError;
use thiserror::Error;

/// A parse error. Aborts the current parse; there is no recovery.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),

    /// The lookahead is not what the active rule requires. `found` is
    /// `None` at end of input.
    #[error("{pos}: expected {}, found {}", .expected.display_name(), found_name(.found))]
    UnexpectedToken {
        expected: TokenKind,
        found: Option<TokenKind>,
        pos: Position,
    },

    #[error("{pos}: integer literal `{literal}` does not fit in 64 bits")]
    IntOverflow { literal: String, pos: Position },
}

fn found_name(found: &Option<TokenKind>) -> &'static str {
    found.map_or("end of input", TokenKind::display_name)
}

impl ParseError {
    /// Where the error was detected.
    pub fn position(&self) -> Position {
        match self {
            ParseError::Lex(err) => err.pos,
            ParseError::UnexpectedToken { pos, .. } | ParseError::IntOverflow { pos, .. } => *pos,
        }
    }
}
