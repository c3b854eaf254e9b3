//! Delimiter tracking for error recovery.
//!
//! The parser keeps a stack of the delimiters it has opened so that a
//! stray or mismatched closer can be told apart from one that closes an
//! outer form.

use lispy_common::Span;
use lispy_lexer::TokenKind;

/// Delimiter kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelimiterKind {
    Paren, // ( )
    Brace, // { }
}

impl DelimiterKind {
    pub fn from_open(token: &TokenKind) -> Option<Self> {
        match token {
            TokenKind::LParen => Some(DelimiterKind::Paren),
            TokenKind::LBrace => Some(DelimiterKind::Brace),
            _ => None,
        }
    }

    pub fn from_close(token: &TokenKind) -> Option<Self> {
        match token {
            TokenKind::RParen => Some(DelimiterKind::Paren),
            TokenKind::RBrace => Some(DelimiterKind::Brace),
            _ => None,
        }
    }

    pub fn opening_str(&self) -> &'static str {
        match self {
            DelimiterKind::Paren => "(",
            DelimiterKind::Brace => "{",
        }
    }

    pub fn closing_str(&self) -> &'static str {
        match self {
            DelimiterKind::Paren => ")",
            DelimiterKind::Brace => "}",
        }
    }
}

/// Tracks nested delimiters and where each was opened.
#[derive(Debug, Default)]
pub struct DelimiterStack {
    stack: Vec<(DelimiterKind, Span)>,
}

impl DelimiterStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: DelimiterKind, opened_at: Span) {
        self.stack.push((kind, opened_at));
    }

    pub fn pop(&mut self) -> Option<(DelimiterKind, Span)> {
        self.stack.pop()
    }

    /// Check if an enclosing delimiter (below the innermost one) is of the
    /// given kind.
    pub fn inside_outer(&self, kind: DelimiterKind) -> bool {
        let outer = self.stack.len().saturating_sub(1);
        self.stack[..outer].iter().any(|(k, _)| *k == kind)
    }
}
