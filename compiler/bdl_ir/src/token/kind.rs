//! Band-ordered token kinds.

/// Token kinds for BDL.
///
/// Discriminants are laid out in contiguous bands, each bracketed by a
/// pair of sentinel values:
///
/// | Band       | Members                                 |
/// |------------|-----------------------------------------|
/// | literals   | `Ident`, `Int`                          |
/// | keywords   | operators, `StmtEnd`, `Period`, `Ellipsis` |
/// | operators  | `And`, `Or`, `Xor`, `AndNot`, `Not` (nested in keywords) |
/// | delimiters | parens, brackets, braces, `,` `;` `:`   |
///
/// # Invariant
///
/// Every concrete kind lies strictly between its band's `*Begin`/`*End`
/// sentinels, so band membership is a pair of integer comparisons.
/// Sentinels are never produced by the scanner.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    Illegal = 0,

    /// `main`
    Ident,
    /// `12345`
    Int,

    KeywordBegin,

    OperatorBegin,

    /// `&`
    And,
    /// `|`
    Or,
    /// `^`
    Xor,
    /// `&^`
    AndNot,
    /// `!`
    Not,

    OperatorEnd,

    /// Newline, when newlines terminate statements.
    StmtEnd,

    /// `.`
    Period,
    /// `...`
    Ellipsis,

    KeywordEnd,

    DelimiterBegin,

    /// `(`
    LParen,
    /// `[`
    LBrack,
    /// `{`
    LBrace,
    /// `,`
    Comma,

    /// `)`
    RParen,
    /// `]`
    RBrack,
    /// `}`
    RBrace,
    /// `;`
    Semicolon,
    /// `:`
    Colon,

    DelimiterEnd,
}

impl TokenKind {
    /// Every kind, in discriminant order.
    pub const ALL: [TokenKind; 26] = [
        TokenKind::Illegal,
        TokenKind::Ident,
        TokenKind::Int,
        TokenKind::KeywordBegin,
        TokenKind::OperatorBegin,
        TokenKind::And,
        TokenKind::Or,
        TokenKind::Xor,
        TokenKind::AndNot,
        TokenKind::Not,
        TokenKind::OperatorEnd,
        TokenKind::StmtEnd,
        TokenKind::Period,
        TokenKind::Ellipsis,
        TokenKind::KeywordEnd,
        TokenKind::DelimiterBegin,
        TokenKind::LParen,
        TokenKind::LBrack,
        TokenKind::LBrace,
        TokenKind::Comma,
        TokenKind::RParen,
        TokenKind::RBrack,
        TokenKind::RBrace,
        TokenKind::Semicolon,
        TokenKind::Colon,
        TokenKind::DelimiterEnd,
    ];

    /// Raw discriminant.
    #[inline]
    pub const fn tag(self) -> u8 {
        self as u8
    }

    #[inline]
    const fn strictly_between(self, begin: TokenKind, end: TokenKind) -> bool {
        begin.tag() < self.tag() && self.tag() < end.tag()
    }

    /// Inside the keyword band (operators included).
    #[inline]
    pub const fn is_keyword(self) -> bool {
        self.strictly_between(TokenKind::KeywordBegin, TokenKind::KeywordEnd)
            && !self.is_sentinel()
    }

    #[inline]
    pub const fn is_operator(self) -> bool {
        self.strictly_between(TokenKind::OperatorBegin, TokenKind::OperatorEnd)
    }

    #[inline]
    pub const fn is_delimiter(self) -> bool {
        self.strictly_between(TokenKind::DelimiterBegin, TokenKind::DelimiterEnd)
    }

    /// Identifier or literal value.
    #[inline]
    pub const fn is_literal(self) -> bool {
        matches!(self, TokenKind::Ident | TokenKind::Int)
    }

    /// Band marker; only meaningful for range tests.
    #[inline]
    pub const fn is_sentinel(self) -> bool {
        matches!(
            self,
            TokenKind::KeywordBegin
                | TokenKind::KeywordEnd
                | TokenKind::OperatorBegin
                | TokenKind::OperatorEnd
                | TokenKind::DelimiterBegin
                | TokenKind::DelimiterEnd
        )
    }

    /// Canonical spelling of a fixed-text kind.
    ///
    /// `None` for identifiers, literals, sentinels and `StmtEnd`, whose
    /// text is not fixed by the kind.
    pub const fn literal(self) -> Option<&'static str> {
        match self {
            TokenKind::And => Some("&"),
            TokenKind::Or => Some("|"),
            TokenKind::Xor => Some("^"),
            TokenKind::AndNot => Some("&^"),
            TokenKind::Not => Some("!"),
            TokenKind::Period => Some("."),
            TokenKind::Ellipsis => Some("..."),
            TokenKind::LParen => Some("("),
            TokenKind::LBrack => Some("["),
            TokenKind::LBrace => Some("{"),
            TokenKind::Comma => Some(","),
            TokenKind::RParen => Some(")"),
            TokenKind::RBrack => Some("]"),
            TokenKind::RBrace => Some("}"),
            TokenKind::Semicolon => Some(";"),
            TokenKind::Colon => Some(":"),
            _ => None,
        }
    }

    /// Human-readable name used in diagnostics.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::Illegal => "illegal token",
            TokenKind::Ident => "identifier",
            TokenKind::Int => "integer literal",
            TokenKind::StmtEnd => "newline",
            TokenKind::KeywordBegin
            | TokenKind::KeywordEnd
            | TokenKind::OperatorBegin
            | TokenKind::OperatorEnd
            | TokenKind::DelimiterBegin
            | TokenKind::DelimiterEnd => "band marker",
            TokenKind::And => "`&`",
            TokenKind::Or => "`|`",
            TokenKind::Xor => "`^`",
            TokenKind::AndNot => "`&^`",
            TokenKind::Not => "`!`",
            TokenKind::Period => "`.`",
            TokenKind::Ellipsis => "`...`",
            TokenKind::LParen => "`(`",
            TokenKind::LBrack => "`[`",
            TokenKind::LBrace => "`{`",
            TokenKind::Comma => "`,`",
            TokenKind::RParen => "`)`",
            TokenKind::RBrack => "`]`",
            TokenKind::RBrace => "`}`",
            TokenKind::Semicolon => "`;`",
            TokenKind::Colon => "`:`",
        }
    }
}
