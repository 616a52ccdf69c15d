use std::fmt;
use std::ops::Range;

use serde::Serialize;

#[derive(Debug, Default, Serialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location {
    pub start_byte: usize,
    pub end_byte: usize,
}

impl Location {
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start_byte: start,
            end_byte: end,
        }
    }

    pub fn to_range(&self) -> Range<usize> {
        self.start_byte..self.end_byte
    }
}

impl From<(usize, usize)> for Location {
    fn from((start_byte, end_byte): (usize, usize)) -> Self {
        Self {
            start_byte,
            end_byte,
        }
    }
}

impl From<Range<usize>> for Location {
    fn from(range: Range<usize>) -> Self {
        Self {
            start_byte: range.start,
            end_byte: range.end,
        }
    }
}

/// Human facing position of a token, both fields 1-based.
///
/// Columns count characters, not bytes, so a lexeme following a multi-byte
/// character still reports the column a reader would count.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coords {
    pub line: usize,
    pub column: usize,
}

impl Default for Coords {
    fn default() -> Self {
        Self::START
    }
}

impl Coords {
    pub const START: Coords = Coords { line: 1, column: 1 };

    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Moves past `text`, which must be the source slice starting at `self`.
    pub fn advance(&mut self, text: &str) {
        for ch in text.chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    pub fn advanced(mut self, text: &str) -> Self {
        self.advance(text);
        self
    }

    /// Coordinates of `byte_offset` inside `content`.
    pub fn at_offset(content: &str, byte_offset: usize) -> Self {
        let mut end = byte_offset.min(content.len());
        while !content.is_char_boundary(end) {
            end -= 1;
        }

        Self::START.advanced(&content[..end])
    }
}

impl fmt::Display for Coords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
