//! Expression nodes.

use std::fmt;

use bigdecimal::BigDecimal;
use lispy_common::Span;

/// A parsed form with its location.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Kind of parsed form.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// `42`, `-1.5`
    Number(BigDecimal),
    /// `"text"`, raw content between the quotes
    Text(String),
    /// `add-mul`, `+`, `\`
    Symbol(String),
    /// `( ... )`
    SExpr(Vec<Expr>),
    /// `{ ... }`
    QExpr(Vec<Expr>),
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn seq(f: &mut fmt::Formatter<'_>, open: &str, items: &[Expr], close: &str) -> fmt::Result {
            f.write_str(open)?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", item)?;
            }
            f.write_str(close)
        }

        match &self.kind {
            ExprKind::Number(n) => write!(f, "{}", n),
            ExprKind::Text(s) => write!(f, "\"{}\"", s),
            ExprKind::Symbol(s) => f.write_str(s),
            ExprKind::SExpr(items) => seq(f, "(", items, ")"),
            ExprKind::QExpr(items) => seq(f, "{", items, "}"),
        }
    }
}
