//! Character spans.
//!
//! All offsets in the engine are *character* offsets (Unicode scalar values),
//! not byte offsets. Devanagari letters are three bytes wide in UTF-8, and the
//! consumers of the result (UI code highlighting syllables) index by
//! character. Conversion to byte ranges happens only at the diagnostic edge.

use miette::SourceSpan;
use serde::{Deserialize, Serialize};

/// Represents a half-open `[start, end)` range of characters.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Collects the characters covered by this span.
    pub fn slice(&self, chars: &[char]) -> String {
        let end = self.end.min(chars.len());
        let start = self.start.min(end);
        chars[start..end].iter().collect()
    }

    /// Converts this character span into a byte-based `SourceSpan` over `text`.
    ///
    /// Offsets past the end of `text` are clamped to its length.
    pub fn to_source_span(&self, text: &str) -> SourceSpan {
        let start = byte_offset(text, self.start);
        let end = byte_offset(text, self.end).max(start);
        SourceSpan::from(start..end)
    }
}

fn byte_offset(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map(|(byte, _)| byte)
        .unwrap_or(text.len())
}
