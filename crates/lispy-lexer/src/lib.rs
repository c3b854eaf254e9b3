//! Lexical analysis for Lispy.
//! Lispy 词法分析模块。
//!
//! This crate provides the lexer that converts source code into tokens.
//! Comments and whitespace never reach the token stream.

mod lexer;
mod token;

pub use lexer::{Lexer, is_symbol_char};
pub use token::{Token, TokenKind};
