//! Character cursor over an in-memory source buffer.
//!
//! [`BufferScanner`] is the only place a [`Position`] is mutated. Scan
//! routines learn where a lexeme started and ended by reading
//! [`BufferScanner::position`] before and after the characters they
//! consume.

use bdl_ir::{PosRange, Position};

use crate::LexError;

/// Character buffer plus the cursor position into it.
#[derive(Clone, Debug)]
pub struct BufferScanner {
    buffer: Vec<char>,
    pos: Position,
}

impl BufferScanner {
    /// Cursor at the start of `source`.
    pub fn new(source: &str) -> Self {
        BufferScanner {
            buffer: source.chars().collect(),
            pos: Position::START,
        }
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.pos
    }

    #[inline]
    pub fn buffer(&self) -> &[char] {
        &self.buffer
    }

    /// The character under the cursor, without moving.
    #[inline]
    pub fn peek(&self) -> Result<char, LexError> {
        self.buffer
            .get(self.pos.offset)
            .copied()
            .ok_or_else(|| LexError::end_of_input(self.pos))
    }

    /// Whether the character under the cursor is `ch`.
    #[inline]
    pub fn at(&self, ch: char) -> bool {
        self.peek().is_ok_and(|c| c == ch)
    }

    /// Return the character under the cursor and move past it.
    ///
    /// On end of input the cursor does not move.
    #[inline]
    pub fn advance(&mut self) -> Result<char, LexError> {
        let ch = self.peek()?;
        self.pos = self.pos.step(ch);
        Ok(ch)
    }

    /// Text covered by `range`.
    pub fn text(&self, range: PosRange) -> String {
        let offsets = range.offsets();
        let end = offsets.end.min(self.buffer.len());
        let start = offsets.start.min(end);
        self.buffer[start..end].iter().collect()
    }

    /// The source line holding `pos`, with a caret under its column.
    ///
    /// ```text
    /// module AG1280 (&|
    ///                ^
    /// ```
    pub fn snippet(&self, pos: Position) -> String {
        let at = pos.offset.min(self.buffer.len());
        let line_start = at.saturating_sub(pos.column);
        let line_end = self.buffer[at..]
            .iter()
            .position(|&c| c == '\n')
            .map_or(self.buffer.len(), |n| at + n);
        let line: String = self.buffer[line_start..line_end].iter().collect();
        format!("{line}\n{}^", " ".repeat(at - line_start))
    }
}
