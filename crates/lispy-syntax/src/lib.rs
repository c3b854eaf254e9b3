//! Syntax tree definitions for Lispy.
//!
//! The parser produces this spanned tree; the evaluator lowers it into
//! runtime values.

mod ast;
mod expr;

pub use ast::*;
pub use expr::*;
