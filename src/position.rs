//! Byte offset to line/character mapping.
//!
//! The scanner reports flat byte offsets. Editors address text by line and
//! character, where a character is a UTF-16 code unit. [`LineIndex`] converts
//! between the two for a single snapshot of a document.

use std::fmt;

/// Zero-based line and UTF-16 character position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub line: usize,
    pub character: usize,
}

impl Position {
    #[must_use]
    pub const fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }
}

impl fmt::Display for Position {
    /// One-based `line:column`, the way compilers and grep print locations.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.character + 1)
    }
}

/// Line start table for one text snapshot.
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    text: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    /// Index the line starts of `text`. Lines are split on `\n`; a preceding
    /// `\r` stays part of the previous line.
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(text.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self { text, line_starts }
    }

    /// Number of lines, counting a trailing empty line after a final `\n`.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Position of a byte offset. Offsets past the end clamp to the end and
    /// offsets inside a multi-byte character resolve to that character.
    #[must_use]
    pub fn position_at(&self, offset: usize) -> Position {
        let offset = offset.min(self.text.len());
        let line = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let line_start = self.line_starts[line];

        let character = self.text[line_start..]
            .char_indices()
            .take_while(|&(i, _)| line_start + i < offset)
            .map(|(_, c)| c.len_utf16())
            .sum();

        Position::new(line, character)
    }

    /// Byte offset of a position. Lines past the end clamp to the end of the
    /// text and characters past the end of a line clamp to the line end.
    #[must_use]
    pub fn offset_at(&self, position: Position) -> usize {
        let Some(&line_start) = self.line_starts.get(position.line) else {
            return self.text.len();
        };
        let line_end = self
            .line_starts
            .get(position.line + 1)
            .map_or(self.text.len(), |&next| next - 1);

        let mut units = 0;
        for (i, c) in self.text[line_start..line_end].char_indices() {
            if units >= position.character {
                return line_start + i;
            }
            units += c.len_utf16();
        }
        line_end
    }
}
