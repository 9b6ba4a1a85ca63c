//! AST leaves produced by parser rules.
//!
//! Each node is constructed from a token the parser already recognized;
//! none of them re-validates its input.

use crate::{PosRange, Token};

/// An identifier.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Ident {
    pub token: Token,
}

impl Ident {
    #[inline]
    pub fn new(token: Token) -> Self {
        Ident { token }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.token.literal
    }

    #[inline]
    pub fn range(&self) -> PosRange {
        self.token.range
    }
}

/// A decimal integer literal with its value.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct IntLit {
    pub token: Token,
    pub value: u64,
}

impl IntLit {
    #[inline]
    pub fn new(token: Token, value: u64) -> Self {
        IntLit { token, value }
    }

    #[inline]
    pub fn range(&self) -> PosRange {
        self.token.range
    }
}

/// Resistance, as an unsigned magnitude.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct ResistorExpr {
    pub value: u64,
}

/// Inductance, as an unsigned magnitude.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct InductorExpr {
    pub value: u64,
}

/// Capacitance, as an unsigned magnitude.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct CapacitorExpr {
    pub value: u64,
}

macro_rules! passive_component {
    ($($ty:ident),*) => {$(
        impl $ty {
            #[inline]
            pub const fn new(value: u64) -> Self {
                $ty { value }
            }
        }

        impl From<&IntLit> for $ty {
            fn from(lit: &IntLit) -> Self {
                $ty::new(lit.value)
            }
        }
    )*};
}

passive_component!(ResistorExpr, InductorExpr, CapacitorExpr);
