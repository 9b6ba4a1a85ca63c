//! Keyword and delimiter lookup tables.
//!
//! The keyword table is the reverse of [`TokenKind::literal`] restricted to
//! the keyword band. It is built on first use and never mutated, so any
//! number of scanners may read it concurrently.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use super::TokenKind;

static KEYWORDS: LazyLock<FxHashMap<&'static str, TokenKind>> = LazyLock::new(|| {
    TokenKind::ALL
        .iter()
        .copied()
        .filter(|kind| kind.is_keyword())
        .filter_map(|kind| kind.literal().map(|text| (text, kind)))
        .collect()
});

/// Look up a keyword or operator by its spelling.
///
/// Returns `None` for plain identifiers and for delimiter spellings:
/// delimiters are matched character-wise by [`delimiter`], never by text.
#[inline]
pub fn lookup_keyword(text: &str) -> Option<TokenKind> {
    KEYWORDS.get(text).copied()
}

/// Delimiter kind of a single character.
///
/// `'\n'` maps to [`TokenKind::StmtEnd`]: a newline is a potential
/// statement terminator, not a structural delimiter.
#[inline]
pub const fn delimiter(ch: char) -> Option<TokenKind> {
    match ch {
        '{' => Some(TokenKind::LBrace),
        '}' => Some(TokenKind::RBrace),
        '[' => Some(TokenKind::LBrack),
        ']' => Some(TokenKind::RBrack),
        '(' => Some(TokenKind::LParen),
        ')' => Some(TokenKind::RParen),
        ',' => Some(TokenKind::Comma),
        ';' => Some(TokenKind::Semicolon),
        ':' => Some(TokenKind::Colon),
        '\n' => Some(TokenKind::StmtEnd),
        _ => None,
    }
}

#[inline]
pub const fn is_delimiter(ch: char) -> bool {
    delimiter(ch).is_some()
}
