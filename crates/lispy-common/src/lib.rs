//! Common data structures for Lispy.
//!
//! This crate provides source location tracking used by the lexer, the
//! parser and the diagnostics renderer:
//! - `BytePos`: a byte offset into source text
//! - `Span`: a half-open byte range
//! - `LineCol`: a human-facing line/column pair

mod span;

pub use span::{BytePos, LineCol, Span};
