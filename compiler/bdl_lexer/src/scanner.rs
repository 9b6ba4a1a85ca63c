//! Tokenizer built on [`BufferScanner`].
//!
//! # Dispatch
//!
//! After skipping horizontal whitespace, the first character decides the
//! scan routine:
//!
//! | First char          | Routine            | Kind                     |
//! |---------------------|--------------------|--------------------------|
//! | `0-9`               | digit run          | `Int`                    |
//! | letter, `_`         | word run           | keyword or `Ident`       |
//! | `/`                 | comment (skipped)  | none, scan again         |
//! | delimiter           | single char        | table kind               |
//! | other punctuation   | mark run           | keyword, else error      |
//!
//! Integer literals are a maximal run of ASCII digits (`[0-9]+`); there is
//! no base prefix, fraction or unit suffix, so `3d` scans as `3` then `d`.

use bdl_ir::{
    delimiter, lookup_keyword, Comment, CommentKind, PosRange, Position, Token, TokenKind,
};
use tracing::{debug, trace};

use crate::{BufferScanner, LexError};

/// Scanner options.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct ScannerConfig {
    /// Emit each `'\n'` as a [`TokenKind::StmtEnd`] token instead of
    /// skipping it as whitespace.
    pub newline_terminates_statements: bool,
}

/// The BDL tokenizer: one token per [`Scanner::scan_token`] call.
///
/// Comments are skipped but recorded; see [`Scanner::comments`].
pub struct Scanner {
    cursor: BufferScanner,
    config: ScannerConfig,
    comments: Vec<Comment>,
    finished: bool,
}

#[inline]
fn is_word_start(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_'
}

#[inline]
fn is_word_continue(ch: char) -> bool {
    ch.is_alphabetic() || ch.is_ascii_digit() || ch == '_'
}

/// Punctuation or symbol character eligible for operator text.
#[inline]
pub fn is_mark(ch: char) -> bool {
    ch.is_ascii_punctuation()
}

impl Scanner {
    pub fn new(source: &str) -> Self {
        Self::with_config(source, ScannerConfig::default())
    }

    pub fn with_config(source: &str, config: ScannerConfig) -> Self {
        Scanner {
            cursor: BufferScanner::new(source),
            config,
            comments: Vec::new(),
            finished: false,
        }
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.cursor.position()
    }

    /// Comments skipped so far, in source order.
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn take_comments(&mut self) -> Vec<Comment> {
        std::mem::take(&mut self.comments)
    }

    /// Scan the next token.
    ///
    /// Fails with [`LexErrorKind::EndOfInput`](crate::LexErrorKind) once
    /// only whitespace and comments remain.
    pub fn scan_token(&mut self) -> Result<Token, LexError> {
        loop {
            self.skip_whitespace();

            let from = self.cursor.position();
            let ch = self.cursor.peek()?;

            let (kind, literal) = if ch.is_ascii_digit() {
                (TokenKind::Int, self.scan_digits()?)
            } else if is_word_start(ch) {
                let word = self.scan_word()?;
                (lookup_keyword(&word).unwrap_or(TokenKind::Ident), word)
            } else if ch == '/' {
                self.scan_comment()?;
                continue;
            } else if let Some(kind) = delimiter(ch) {
                self.cursor.advance()?;
                (kind, ch.to_string())
            } else if is_mark(ch) {
                let marks = self.scan_mark_seq()?;
                match lookup_keyword(&marks) {
                    Some(kind) => (kind, marks),
                    None => {
                        debug!(at = %from, text = %marks, "unknown operator");
                        return Err(LexError::unknown_operator(from, marks));
                    }
                }
            } else {
                return Err(LexError::invalid_char(from, ch));
            };

            let token = Token::new(kind, literal, PosRange::new(from, self.cursor.position()));
            trace!(kind = ?token.kind, literal = %token.literal, at = %token.range.from, "token");
            return Ok(token);
        }
    }

    fn is_whitespace(&self, ch: char) -> bool {
        match ch {
            ' ' | '\t' | '\r' => true,
            '\n' => !self.config.newline_terminates_statements,
            _ => false,
        }
    }

    fn skip_whitespace(&mut self) {
        while let Ok(ch) = self.cursor.peek() {
            if !self.is_whitespace(ch) {
                break;
            }
            let _ = self.cursor.advance();
        }
    }

    /// Consume a maximal run of characters accepted by `accept`.
    ///
    /// End of input ends the run. An empty run is a format error: callers
    /// only get here after checking the first character.
    fn scan_run(&mut self, accept: impl Fn(char) -> bool) -> Result<String, LexError> {
        let from = self.cursor.position();
        while let Ok(ch) = self.cursor.peek() {
            if !accept(ch) {
                break;
            }
            self.cursor.advance()?;
        }
        self.finish_run(from)
    }

    /// Text consumed since `from`; empty is a format error.
    fn finish_run(&self, from: Position) -> Result<String, LexError> {
        let range = PosRange::new(from, self.cursor.position());
        if range.offsets().is_empty() {
            return Err(LexError::format(range.to));
        }
        Ok(self.cursor.text(range))
    }

    fn scan_digits(&mut self) -> Result<String, LexError> {
        self.scan_run(|ch| ch.is_ascii_digit())
    }

    /// Letters, digits and underscores.
    fn scan_word(&mut self) -> Result<String, LexError> {
        self.scan_run(is_word_continue)
    }

    /// Consecutive marks, stopping before any delimiter.
    ///
    /// A comment introducer (`//` or `/*`) also ends the run, so `!// c`
    /// is `!` followed by a comment.
    fn scan_mark_seq(&mut self) -> Result<String, LexError> {
        let from = self.cursor.position();
        while let Ok(ch) = self.cursor.peek() {
            if !is_mark(ch) || delimiter(ch).is_some() || self.at_comment_start() {
                break;
            }
            self.cursor.advance()?;
        }
        self.finish_run(from)
    }

    fn at_comment_start(&self) -> bool {
        let buffer = self.cursor.buffer();
        let at = self.cursor.position().offset;
        matches!(buffer.get(at..at + 2), Some(['/', '/' | '*']))
    }

    /// Skip one comment starting at the `/` under the cursor.
    fn scan_comment(&mut self) -> Result<(), LexError> {
        let from = self.cursor.position();
        self.cursor.advance()?;

        let (kind, text) = match self.cursor.peek() {
            Ok('/') => {
                self.cursor.advance()?;
                (CommentKind::Line, self.scan_line_comment())
            }
            Ok('*') => {
                self.cursor.advance()?;
                (CommentKind::Block, self.scan_block_comment(from)?)
            }
            _ => return Err(LexError::format(self.cursor.position())),
        };

        let range = PosRange::new(from, self.cursor.position());
        debug!(?kind, %range, "skipped comment");
        self.comments.push(Comment { kind, range, text });
        Ok(())
    }

    /// Body up to, not including, the next newline.
    fn scan_line_comment(&mut self) -> String {
        let mut text = String::new();
        while let Ok(ch) = self.cursor.peek() {
            if ch == '\n' {
                break;
            }
            text.push(ch);
            let _ = self.cursor.advance();
        }
        text
    }

    /// Body up to the first `*/`, which is consumed. Backslashes have no
    /// special meaning.
    fn scan_block_comment(&mut self, from: Position) -> Result<String, LexError> {
        let mut text = String::new();
        loop {
            let Ok(ch) = self.cursor.advance() else {
                debug!(at = %from, "unterminated block comment");
                return Err(LexError::unterminated_comment(from));
            };
            if ch == '*' && self.cursor.at('/') {
                self.cursor.advance()?;
                return Ok(text);
            }
            text.push(ch);
        }
    }
}

/// Tokens until end of input.
///
/// End of input at a token boundary ends iteration. Any other error is
/// yielded once and ends iteration too.
impl Iterator for Scanner {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.scan_token() {
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.finished = true;
                if err.is_end_of_input() {
                    None
                } else {
                    Some(Err(err))
                }
            }
        }
    }
}

impl std::iter::FusedIterator for Scanner {}
