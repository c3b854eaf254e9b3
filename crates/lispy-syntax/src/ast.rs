//! Top-level syntax definitions.
//! 顶层语法定义。

use crate::Expr;
use lispy_common::Span;

/// A complete source text: the sequence of top-level forms.
/// 完整的源文本：顶层形式的序列。
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub exprs: Vec<Expr>,
    pub span: Span,
}

impl SourceFile {
    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.exprs.len()
    }
}
