use crate::text::Span;
use crate::value::{QuoteStyle, SettingType, SettingValue};

/// One setting of the loaded document: key, inferred type, current value,
/// and the byte range in the original file its literal occupies.
///
/// `alternatives` holds commented-out candidate values recovered near a
/// string-list entry; they carry the decoded string only, since promoting
/// one re-renders the entry's whole span anyway.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingEntry {
    pub(super) key: String,
    pub(super) declared: SettingType,
    pub(super) value: SettingValue,
    pub(super) span: Span,
    pub(super) original_literal: String,
    pub(super) quote_style: QuoteStyle,
    pub(super) alternatives: Vec<String>,
}

impl SettingEntry {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn declared_type(&self) -> SettingType {
        self.declared
    }

    pub fn value(&self) -> &SettingValue {
        &self.value
    }

    /// Byte range of the value literal in the original text.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Known-good disabled candidates for a string-list entry. Empty for
    /// every other type.
    pub fn alternatives(&self) -> &[String] {
        &self.alternatives
    }
}
