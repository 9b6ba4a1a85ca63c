//! Source positions and half-open position ranges.
//!
//! Positions are stored 0-based and rendered 1-based (`line:column`).

use std::fmt;

/// A cursor location in the source: character offset plus line and column.
///
/// # Invariant
///
/// A `Position` only moves forward, one character at a time, through
/// [`Position::step`]. `offset` counts characters, not bytes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, Debug)]
pub struct Position {
    /// Character index into the source buffer.
    pub offset: usize,
    /// 0-based line number.
    pub line: usize,
    /// 0-based column within the current line.
    pub column: usize,
}

impl Position {
    /// Start of input.
    pub const START: Position = Position {
        offset: 0,
        line: 0,
        column: 0,
    };

    #[inline]
    pub const fn new(offset: usize, line: usize, column: usize) -> Self {
        Position {
            offset,
            line,
            column,
        }
    }

    /// Position immediately after `ch`, when `ch` is read at `self`.
    ///
    /// A newline moves to column 0 of the next line; any other character
    /// moves one column right.
    #[inline]
    #[must_use]
    pub const fn step(self, ch: char) -> Self {
        if ch == '\n' {
            Position {
                offset: self.offset + 1,
                line: self.line + 1,
                column: 0,
            }
        } else {
            Position {
                offset: self.offset + 1,
                line: self.line,
                column: self.column + 1,
            }
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// Half-open range `[from, to)` covered by a lexeme.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, Debug)]
pub struct PosRange {
    /// Position before the first character.
    pub from: Position,
    /// Position after the last character.
    pub to: Position,
}

impl PosRange {
    #[inline]
    pub const fn new(from: Position, to: Position) -> Self {
        PosRange { from, to }
    }

    /// Character index range, for slicing the source buffer.
    #[inline]
    pub const fn offsets(&self) -> std::ops::Range<usize> {
        self.from.offset..self.to.offset
    }
}

impl fmt::Display for PosRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}
