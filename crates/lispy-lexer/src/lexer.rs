//! The Lispy lexer.
//! Lispy 词法分析器。

use std::str::FromStr;

use bigdecimal::BigDecimal;
use lispy_common::Span;
use lispy_diagnostic::Diagnostic;

use crate::token::{Token, TokenKind};

/// Returns true for characters that may appear in a symbol.
/// 判断字符是否可以出现在符号中。
pub fn is_symbol_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric()
        || matches!(ch, '_' | '+' | '-' | '*' | '/' | '\\' | '=' | '<' | '>' | '!' | '&')
}

/// The Lispy lexer.
/// Lispy 词法分析器。
///
/// Token rules are tried in a fixed order at every position and the first
/// rule that matches wins: numbers before symbols. That is why `1dog`
/// lexes as the number `1` followed by the symbol `dog`.
pub struct Lexer<'src> {
    /// Source text
    source: &'src str,
    /// Character iterator with position info
    /// 带位置信息的字符迭代器
    chars: std::iter::Peekable<std::str::CharIndices<'src>>,
    /// Current position in source
    /// 当前在源码中的位置
    pos: usize,
    /// Collected diagnostics
    /// 收集的诊断信息
    diagnostics: Vec<Diagnostic>,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for the given source code.
    /// 为给定的源代码创建新的词法分析器。
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            pos: 0,
            diagnostics: Vec::new(),
        }
    }

    /// Tokenize the entire source and return tokens and diagnostics.
    /// 对整个源代码进行词法分析，返回 token 列表和诊断信息。
    pub fn tokenize(mut self) -> (Vec<Token>, Vec<Diagnostic>) {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }

        (tokens, self.diagnostics)
    }

    /// Get the next token.
    /// 获取下一个 token。
    fn next_token(&mut self) -> Token {
        self.skip_trivia();

        let start = self.pos;

        let Some((_, ch)) = self.advance() else {
            return Token::new(TokenKind::Eof, Span::from_usize(start, start));
        };

        let kind = match ch {
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,

            '"' => self.string_literal(start),

            // A minus only starts a number when a digit follows it
            // 只有后面跟着数字时，减号才开始一个数字
            '-' if self.peek_char().is_some_and(|c| c.is_ascii_digit()) => self.number(start),
            '0'..='9' => self.number(start),

            c if is_symbol_char(c) => self.symbol(start),

            _ => {
                self.error_unexpected_char(ch, start);
                TokenKind::Error
            }
        };

        Token::new(kind, Span::from_usize(start, self.pos))
    }

    /// Advance to the next character.
    /// 前进到下一个字符。
    fn advance(&mut self) -> Option<(usize, char)> {
        let result = self.chars.next();
        if let Some((pos, ch)) = result {
            self.pos = pos + ch.len_utf8();
        }
        result
    }

    /// Peek at the next character without consuming it.
    /// 查看下一个字符但不消耗它。
    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, ch)| *ch)
    }

    /// Peek at the nth character ahead.
    fn peek_nth(&self, n: usize) -> Option<char> {
        self.chars.clone().nth(n).map(|(_, ch)| ch)
    }

    /// Skip whitespace and `;` line comments.
    /// 跳过空白字符和 `;` 行注释。
    fn skip_trivia(&mut self) {
        while let Some(ch) = self.peek_char() {
            if ch.is_whitespace() {
                self.advance();
            } else if ch == ';' {
                self.skip_line_comment();
            } else {
                break;
            }
        }
    }

    /// Skip a line comment (; to end of line).
    fn skip_line_comment(&mut self) {
        while let Some(ch) = self.peek_char() {
            if ch == '\n' || ch == '\r' {
                break;
            }
            self.advance();
        }
    }

    /// Lex a number: `-?[0-9]+` with an optional `.` and one digit.
    /// 解析数字：可选的负号、整数部分、以及最多一位小数。
    fn number(&mut self, start: usize) -> TokenKind {
        while self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        // Exactly one fractional digit, and only when a digit follows the dot
        if self.peek_char() == Some('.') && self.peek_nth(1).is_some_and(|c| c.is_ascii_digit()) {
            self.advance(); // .
            self.advance(); // digit
        }

        match BigDecimal::from_str(&self.source[start..self.pos]) {
            Ok(n) => TokenKind::Number(n),
            Err(_) => TokenKind::Error,
        }
    }

    /// Lex a symbol.
    /// 解析符号。
    fn symbol(&mut self, start: usize) -> TokenKind {
        while self.peek_char().is_some_and(is_symbol_char) {
            self.advance();
        }
        TokenKind::Symbol(self.source[start..self.pos].to_string())
    }

    /// Lex a string literal; the opening quote is already consumed.
    /// 解析字符串字面量（起始引号已消耗）。
    fn string_literal(&mut self, start: usize) -> TokenKind {
        let content_start = self.pos;

        loop {
            match self.advance() {
                Some((_, '\\')) => {
                    // Escaped character is kept verbatim
                    if self.advance().is_none() {
                        break;
                    }
                }
                Some((end, '"')) => {
                    return TokenKind::String(self.source[content_start..end].to_string());
                }
                Some(_) => {}
                None => break,
            }
        }

        let span = Span::from_usize(start, self.pos);
        self.diagnostics.push(Diagnostic::unterminated_string(span, start));
        TokenKind::Error
    }

    /// Report an unexpected character error.
    /// 报告意外字符错误。
    fn error_unexpected_char(&mut self, ch: char, pos: usize) {
        let span = Span::from_usize(pos, self.pos);
        self.diagnostics.push(Diagnostic::unexpected_character(ch, span));
    }
}
