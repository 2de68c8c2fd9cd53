// Copyright (C) 2023-2026 The Grug Team.
// This file is part of the grug library.

// The grug library is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// The grug library is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with the grug library. If not, see <https://www.gnu.org/licenses/>.

//! Byte-offset spans and line/column resolution for grug source files.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A half-open byte range `[lo, hi)` into a single source file.
///
/// Spans are never part of the dumped JSON AST (the schema carries no
/// span/id fields); they exist purely to annotate lexical and syntactic
/// errors with a human-locatable position.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    pub lo: u32,
    pub hi: u32,
}

impl Span {
    pub const fn new(lo: u32, hi: u32) -> Self {
        Self { lo, hi }
    }

    pub fn to(self, other: Span) -> Span {
        Span { lo: self.lo.min(other.lo), hi: self.hi.max(other.hi) }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}..{}", self.lo, self.hi)
    }
}

/// A 1-indexed line/column position, the form errors are reported in.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Resolves byte offsets within one source file into line/column positions.
///
/// Built once per tokenize/parse operation from the raw source bytes; the
/// newline table is computed eagerly since grug files are small.
pub struct SourceMap<'a> {
    source: &'a str,
    line_starts: Vec<u32>,
}

impl<'a> SourceMap<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut line_starts = vec![0u32];
        for (i, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(i as u32 + 1);
            }
        }
        Self { source, line_starts }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Resolves a byte offset to a 1-indexed line/column position.
    pub fn position(&self, offset: u32) -> Position {
        let line_idx = match self.line_starts.binary_search(&offset) {
            Ok(idx) => idx,
            Err(idx) => idx.saturating_sub(1),
        };
        let line_start = self.line_starts[line_idx];
        let column = offset.saturating_sub(line_start) + 1;
        Position { line: line_idx as u32 + 1, column }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_at_start_of_file() {
        let map = SourceMap::new("abc\ndef\n");
        assert_eq!(map.position(0), Position { line: 1, column: 1 });
    }

    #[test]
    fn position_after_newline() {
        let map = SourceMap::new("abc\ndef\n");
        assert_eq!(map.position(4), Position { line: 2, column: 1 });
        assert_eq!(map.position(6), Position { line: 2, column: 3 });
    }

    #[test]
    fn span_to_merges_ranges() {
        let a = Span::new(2, 5);
        let b = Span::new(8, 12);
        assert_eq!(a.to(b), Span::new(2, 12));
    }
}
