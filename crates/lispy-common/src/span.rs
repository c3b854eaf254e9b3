//! Source positions.
//! 源码位置。
//!
//! Lexer and parser work in byte offsets. Only diagnostics shown to a person
//! are converted to line and column.

use std::fmt;
use std::ops::Range;

/// Byte offset into a source text.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BytePos(pub u32);

impl fmt::Debug for BytePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.0)
    }
}

impl From<usize> for BytePos {
    fn from(pos: usize) -> Self {
        BytePos(pos as u32)
    }
}

impl From<BytePos> for usize {
    fn from(pos: BytePos) -> Self {
        pos.0 as usize
    }
}

/// Half-open byte range `start..end` covered by a token or form.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: BytePos,
    pub end: BytePos,
}

impl Span {
    /// Empty span at offset zero, for positions that cannot be known.
    pub const DUMMY: Span = Span {
        start: BytePos(0),
        end: BytePos(0),
    };

    pub fn from_usize(start: usize, end: usize) -> Self {
        Span {
            start: BytePos::from(start),
            end: BytePos::from(end),
        }
    }

    /// The one-byte span at `pos`. Delimiters and quotes are always one
    /// byte wide.
    pub fn byte(pos: usize) -> Self {
        Self::from_usize(pos, pos + 1)
    }

    /// Smallest span covering both `self` and `other`, e.g. an opener and
    /// its closer.
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub fn len(&self) -> usize {
        self.range().len()
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<usize> {
        usize::from(self.start)..usize::from(self.end)
    }

    /// The text this span covers, if it is in bounds.
    pub fn snippet<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.range())
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start.0, self.end.0)
    }
}

/// A 1-based line and column, counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCol {
    pub line: usize,
    pub col: usize,
}

impl LineCol {
    /// Locate a byte offset inside `source`.
    ///
    /// Offsets past the end clamp to the position just after the last
    /// character.
    pub fn locate(source: &str, pos: BytePos) -> LineCol {
        let target = usize::from(pos).min(source.len());
        let before = &source[..floor_char_boundary(source, target)];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |nl| nl + 1);
        let col = before[line_start..].chars().count() + 1;
        LineCol { line, col }
    }
}

fn floor_char_boundary(source: &str, mut idx: usize) -> usize {
    while !source.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locate_first_line() {
        let lc = LineCol::locate("+ 1 2", BytePos(2));
        assert_eq!(lc, LineCol { line: 1, col: 3 });
    }

    #[test]
    fn locate_after_newline() {
        let lc = LineCol::locate("(def {x} 1)\n(+ x", BytePos(13));
        assert_eq!(lc, LineCol { line: 2, col: 2 });
        assert_eq!(lc.to_string(), "2:2");
    }

    #[test]
    fn locate_past_end_clamps() {
        let lc = LineCol::locate("ab", BytePos(40));
        assert_eq!(lc, LineCol { line: 1, col: 3 });
    }

    #[test]
    fn locate_counts_characters_not_bytes() {
        let lc = LineCol::locate("\"héllo\" x", BytePos(9));
        assert_eq!(lc, LineCol { line: 1, col: 9 });
    }

    #[test]
    fn snippet_in_and_out_of_bounds() {
        let span = Span::from_usize(1, 4);
        assert_eq!(span.snippet("(head"), Some("hea"));
        assert_eq!(Span::from_usize(3, 9).snippet("ab"), None);
    }

    #[test]
    fn byte_span_is_one_wide() {
        assert_eq!(Span::byte(7), Span::from_usize(7, 8));
        assert_eq!(Span::byte(7).len(), 1);
    }
}
