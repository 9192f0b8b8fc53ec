//! Raw file buffer with exact-preserving span replacement.
//!
//! The buffer is immutable; edits are described as `(Span, String)` pairs
//! against the *original* byte offsets and applied in one left-to-right pass,
//! so earlier replacements never shift the offsets of later ones.

use crate::error::{Result, SettingsError};

/// A byte range in the original text. End is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start past end");
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Wraps the original file content. Everything outside a replaced span is
/// carried through byte-for-byte.
#[derive(Debug, Clone)]
pub struct TextModel {
    text: String,
}

impl TextModel {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn slice(&self, span: Span) -> &str {
        &self.text[span.start..span.end]
    }

    /// Applies a batch of replacements computed against the original offsets.
    ///
    /// Spans are sorted by start, checked for overlap, and substituted in a
    /// single pass with a running cursor. Previously emitted output is never
    /// revisited.
    pub fn replace_spans(&self, edits: &[(Span, String)]) -> Result<String> {
        let mut ordered: Vec<&(Span, String)> = edits.iter().collect();
        ordered.sort_by_key(|(span, _)| span.start);

        let mut out = String::with_capacity(self.text.len());
        let mut cursor = 0usize;

        for (span, replacement) in ordered {
            if span.start < cursor {
                return Err(SettingsError::OverlappingSpans(span.start));
            }
            if span.end > self.text.len() {
                return Err(SettingsError::StaleFile);
            }
            out.push_str(&self.text[cursor..span.start]);
            out.push_str(replacement);
            cursor = span.end;
        }
        out.push_str(&self.text[cursor..]);
        Ok(out)
    }
}
