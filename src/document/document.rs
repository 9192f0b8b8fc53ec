use std::collections::HashMap;

use sha2::{Digest, Sha256};

use super::types::SettingEntry;
use crate::error::{Result, SettingsError};
use crate::scan::{self, RawEntry};
use crate::value::{
    SettingType, SettingValue, commented_strings, detect_quote_style, parse_literal,
    quoted_strings,
};

/// Ordered, typed view of one settings file. All mutation is in-memory;
/// nothing touches disk until the caller writes out `render`'s result.
#[derive(Debug, Clone)]
pub struct SettingsDocument {
    pub(super) entries: Vec<SettingEntry>,
    index: HashMap<String, usize>,
    pub(super) fingerprint: [u8; 32],
}

impl SettingsDocument {
    /// Parses the settings literal out of `text` and builds the document.
    ///
    /// Structural problems (no literal, unterminated nesting, duplicate
    /// keys) fail the whole load. A single value whose literal is malformed
    /// for its apparent shape degrades to a raw entry instead.
    pub fn load(text: &str) -> Result<Self> {
        let outcome = scan::scan(text)?;

        let mut entries = Vec::with_capacity(outcome.entries.len());
        let mut index = HashMap::with_capacity(outcome.entries.len());

        for raw in &outcome.entries {
            let literal = &text[raw.value_span.start..raw.value_span.end];
            let value = match parse_literal(literal) {
                Ok(value) => value,
                Err(SettingsError::Coercion { .. }) => SettingValue::Raw(literal.to_string()),
                Err(other) => return Err(other),
            };
            let declared = value.setting_type();

            let alternatives = if declared == SettingType::StringList {
                alternative_candidates(raw, literal, &value)
            } else {
                Vec::new()
            };

            index.insert(raw.key.clone(), entries.len());
            entries.push(SettingEntry {
                key: raw.key.clone(),
                declared,
                value,
                span: raw.value_span,
                original_literal: literal.to_string(),
                quote_style: detect_quote_style(literal),
                alternatives,
            });
        }

        Ok(Self {
            entries,
            index,
            fingerprint: Sha256::digest(text.as_bytes()).into(),
        })
    }

    /// Keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.key.as_str())
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = &SettingEntry> {
        self.entries.iter()
    }

    pub fn entry(&self, key: &str) -> Option<&SettingEntry> {
        self.index.get(key).map(|&i| &self.entries[i])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Result<&SettingValue> {
        self.entry(key)
            .map(|entry| &entry.value)
            .ok_or_else(|| SettingsError::UnknownKey(key.to_string()))
    }

    /// Replaces an entry's value. The new value's shape must match the
    /// declared type; raw entries cannot be edited. On failure the document
    /// is unchanged.
    pub fn set(&mut self, key: &str, value: SettingValue) -> Result<()> {
        let entry = self.entry_mut(key)?;
        if entry.declared == SettingType::Raw {
            return Err(SettingsError::UnsupportedEdit(key.to_string()));
        }
        let actual = value.setting_type();
        if actual != entry.declared {
            return Err(SettingsError::TypeMismatch {
                key: key.to_string(),
                expected: entry.declared.name(),
                actual: actual.name(),
            });
        }
        entry.value = value;
        Ok(())
    }

    /// Appends `candidate` to a string-list entry, consuming it from the
    /// entry's alternatives if it was one. Adding a value that is already
    /// present is a no-op, so promoting the same alternative twice leaves
    /// the document in the same state as doing it once.
    pub fn add_to_list(&mut self, key: &str, candidate: &str) -> Result<()> {
        let entry = self.string_list_entry_mut(key)?;
        entry.alternatives.retain(|alt| alt != candidate);
        if let SettingValue::StringList(items) = &mut entry.value {
            if !items.iter().any(|item| item == candidate) {
                items.push(candidate.to_string());
            }
        }
        Ok(())
    }

    /// Removes `value` from a string-list entry. Absent values are a no-op;
    /// removed values are not restored to the alternatives.
    pub fn remove_from_list(&mut self, key: &str, value: &str) -> Result<()> {
        let entry = self.string_list_entry_mut(key)?;
        if let SettingValue::StringList(items) = &mut entry.value {
            items.retain(|item| item != value);
        }
        Ok(())
    }

    fn entry_mut(&mut self, key: &str) -> Result<&mut SettingEntry> {
        match self.index.get(key) {
            Some(&i) => Ok(&mut self.entries[i]),
            None => Err(SettingsError::UnknownKey(key.to_string())),
        }
    }

    fn string_list_entry_mut(&mut self, key: &str) -> Result<&mut SettingEntry> {
        let entry = self.entry_mut(key)?;
        match entry.declared {
            SettingType::StringList => Ok(entry),
            SettingType::Raw => Err(SettingsError::UnsupportedEdit(key.to_string())),
            other => Err(SettingsError::TypeMismatch {
                key: key.to_string(),
                expected: SettingType::StringList.name(),
                actual: other.name(),
            }),
        }
    }
}

/// Gathers disabled candidates for a string-list entry: commented-out
/// strings inside the list literal, strings in the entry's same-line
/// trailing comment, and leading comment lines of the `key: ...` shape.
/// Values already live in the list are dropped; discovery order is kept.
fn alternative_candidates(raw: &RawEntry, literal: &str, live: &SettingValue) -> Vec<String> {
    let mut candidates = commented_strings(literal);

    if let Some(comment) = &raw.trailing_comment {
        candidates.extend(quoted_strings(comment));
    }

    for comment in &raw.leading_comments {
        if let Some(rest) = strip_key_prefix(comment, &raw.key) {
            candidates.extend(quoted_strings(rest));
        }
    }

    let live_items: &[String] = match live {
        SettingValue::StringList(items) => items,
        _ => &[],
    };

    let mut seen = Vec::new();
    candidates.retain(|candidate| {
        if live_items.contains(candidate) || seen.contains(candidate) {
            false
        } else {
            seen.push(candidate.clone());
            true
        }
    });
    candidates
}

/// Matches a commented-out declaration of the same key (`key: ...` or
/// `"key": ...`) and returns the text after the colon.
fn strip_key_prefix<'a>(comment: &'a str, key: &str) -> Option<&'a str> {
    let mut rest = comment.trim_start();
    rest = rest
        .strip_prefix('"')
        .or_else(|| rest.strip_prefix('\''))
        .unwrap_or(rest);
    rest = rest.strip_prefix(key)?;
    rest = rest
        .strip_prefix('"')
        .or_else(|| rest.strip_prefix('\''))
        .unwrap_or(rest);
    rest.trim_start().strip_prefix(':')
}
