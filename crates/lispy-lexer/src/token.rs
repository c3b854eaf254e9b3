//! Token definitions for Lispy.

use bigdecimal::BigDecimal;
use lispy_common::Span;

/// A token with its kind and span.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// The kind of a token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Literals
    Number(BigDecimal),
    /// Raw text between the quotes; escapes are kept as written.
    String(String),
    Symbol(String),

    // Delimiters
    LParen, // (
    RParen, // )
    LBrace, // {
    RBrace, // }

    // Special
    Eof,
    Error,
}
