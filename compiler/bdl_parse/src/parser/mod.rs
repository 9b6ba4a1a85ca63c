//! Single-lookahead parser front end.

use bdl_ir::{Comment, Ident, IntLit, Position, Token, TokenKind};
use bdl_lexer::{Scanner, ScannerConfig};
use tracing::{debug, trace};

use crate::ParseError;

/// What the parser is currently looking at.
#[derive(Debug)]
enum Lookahead {
    /// `advance()` has not been called yet.
    Unloaded,
    Token(Token),
    End,
    /// The scanner failed; no token is current and no more are read.
    Failed,
}

/// Parser state: a scanner plus one lookahead token.
///
/// Grammar rules (`expect_*`) inspect the lookahead without consuming it;
/// the caller moves on with [`Parser::advance`]. The parser never
/// backtracks.
pub struct Parser {
    scanner: Scanner,
    lookahead: Lookahead,
}

impl Parser {
    /// Create a parser. Call [`Parser::advance`] to load the first token.
    pub fn new(source: &str) -> Self {
        Self::from_scanner(Scanner::new(source))
    }

    pub fn with_config(source: &str, config: ScannerConfig) -> Self {
        Self::from_scanner(Scanner::with_config(source, config))
    }

    pub fn from_scanner(scanner: Scanner) -> Self {
        Parser {
            scanner,
            lookahead: Lookahead::Unloaded,
        }
    }

    /// Pull the next token into the lookahead.
    ///
    /// Running out of input is not an error here: the lookahead becomes
    /// empty and [`Parser::is_at_end`] turns true. Every other scanner
    /// error is returned once; the lookahead is cleared, so later rules
    /// fail and later advances yield `None`.
    pub fn advance(&mut self) -> Result<Option<&Token>, ParseError> {
        if matches!(self.lookahead, Lookahead::End | Lookahead::Failed) {
            return Ok(None);
        }
        match self.scanner.scan_token() {
            Ok(token) => {
                trace!(kind = ?token.kind, at = %token.range.from, "lookahead");
                self.lookahead = Lookahead::Token(token);
            }
            Err(err) if err.is_end_of_input() => {
                trace!(at = %err.pos, "end of input");
                self.lookahead = Lookahead::End;
            }
            Err(err) => {
                debug!(%err, "scan failed");
                self.lookahead = Lookahead::Failed;
                return Err(err.into());
            }
        }
        Ok(self.current())
    }

    /// The lookahead token; `None` before the first advance or at the end.
    #[inline]
    pub fn current(&self) -> Option<&Token> {
        match &self.lookahead {
            Lookahead::Token(token) => Some(token),
            Lookahead::Unloaded | Lookahead::End | Lookahead::Failed => None,
        }
    }

    #[inline]
    pub fn current_kind(&self) -> Option<TokenKind> {
        self.current().map(|token| token.kind)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        matches!(self.lookahead, Lookahead::End)
    }

    /// Start of the lookahead, or the scanner position when there is none.
    pub fn position(&self) -> Position {
        self.current()
            .map_or_else(|| self.scanner.position(), |token| token.range.from)
    }

    /// Comments skipped so far.
    pub fn comments(&self) -> &[Comment] {
        self.scanner.comments()
    }

    /// Check that the lookahead has kind `kind`.
    pub fn expect_kind(&self, kind: TokenKind) -> Result<&Token, ParseError> {
        match self.current() {
            Some(token) if token.kind == kind => Ok(token),
            _ => Err(self.unexpected(kind)),
        }
    }

    /// The lookahead as an identifier.
    pub fn expect_ident(&self) -> Result<Ident, ParseError> {
        self.expect_kind(TokenKind::Ident)
            .map(|token| Ident::new(token.clone()))
    }

    /// The lookahead as a decimal integer that fits in a `u64`.
    pub fn expect_int(&self) -> Result<IntLit, ParseError> {
        let token = self.expect_kind(TokenKind::Int)?;
        match token.literal.parse::<u64>() {
            Ok(value) => Ok(IntLit::new(token.clone(), value)),
            Err(_) => Err(ParseError::IntOverflow {
                literal: token.literal.clone(),
                pos: token.range.from,
            }),
        }
    }

    #[cold]
    #[inline(never)]
    fn unexpected(&self, expected: TokenKind) -> ParseError {
        let found = self.current_kind();
        debug!(?expected, ?found, at = %self.position(), "unexpected token");
        ParseError::UnexpectedToken {
            expected,
            found,
            pos: self.position(),
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
