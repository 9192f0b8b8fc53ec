use crate::text::Span;

/// One top-level `key: value` declaration found inside the settings literal,
/// before any type inference.
#[derive(Debug, Clone, PartialEq)]
pub struct RawEntry {
    pub key: String,
    /// Bytes holding the key token itself.
    pub key_span: Span,
    /// Bytes holding exactly the value literal, trimmed of surrounding
    /// whitespace and trailing comments. This is the range a rewrite
    /// replaces.
    pub value_span: Span,
    /// Comment texts immediately preceding the entry, in order.
    pub leading_comments: Vec<String>,
    /// A `//` comment sitting after the entry's comma on the same line.
    pub trailing_comment: Option<String>,
}

/// Result of scanning a settings file.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOutcome {
    /// The whole object literal, opening brace through closing brace.
    pub literal: Span,
    /// Top-level entries in declaration order.
    pub entries: Vec<RawEntry>,
}
