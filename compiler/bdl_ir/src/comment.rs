//! Comments skipped by the scanner.
//!
//! Comments never reach the parser as tokens; the scanner keeps them on
//! the side so tooling can still see them.

use crate::PosRange;

/// A source comment.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Comment {
    pub kind: CommentKind,
    /// Covers the whole comment including `//`, `/*` and `*/`.
    pub range: PosRange,
    /// Body text without the comment markers.
    pub text: String,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum CommentKind {
    /// `// ...` up to (not including) the newline.
    Line,
    /// `/* ... */`, no nesting.
    Block,
}
