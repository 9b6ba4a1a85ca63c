//! Parser front end for BDL.
//!
//! Pulls tokens from a [`bdl_lexer::Scanner`] one at a time and exposes
//! grammar rules that turn the lookahead into AST leaves. Rules return a
//! [`ParseError`] on mismatch; whoever drives the parser decides whether
//! to stop.

mod error;
mod parser;

pub use error::ParseError;
pub use parser::Parser;
