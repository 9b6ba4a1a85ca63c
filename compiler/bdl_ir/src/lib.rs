//! Core data types for the BDL front-end.
//!
//! # Architecture
//!
//! ```text
//! source text
//!     │
//!     ▼
//! BufferScanner ──► Position            (bdl_lexer)
//!     │
//!     ▼
//! Scanner ──► Token { range, kind, literal }
//!     │
//!     ▼
//! Parser ──► Ident / IntLit / ...       (bdl_parse)
//! ```
//!
//! This crate owns everything that flows between those stages but holds
//! no scanning logic of its own. The hierarchy model (`Module`, `Pin`) is
//! the netlist sink a declaration builder would populate.

mod ast;
mod comment;
mod hierarchy;
mod position;
mod token;

pub use ast::{CapacitorExpr, Ident, InductorExpr, IntLit, ResistorExpr};
pub use comment::{Comment, CommentKind};
pub use hierarchy::{HierarchyError, Module, Pin, PinKind, PinRef};
pub use position::{PosRange, Position};
pub use token::{delimiter, is_delimiter, lookup_keyword, Token, TokenKind};
