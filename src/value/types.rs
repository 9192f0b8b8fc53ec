use std::fmt;

use serde_json::{Value as JsonValue, json};

/// Shape of a setting's value, inferred from its literal text at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingType {
    Bool,
    Number,
    String,
    StringList,
    ObjectList,
    /// Not one of the recognized shapes. Preserved verbatim, not editable.
    Raw,
}

impl SettingType {
    pub fn name(self) -> &'static str {
        match self {
            SettingType::Bool => "boolean",
            SettingType::Number => "number",
            SettingType::String => "string",
            SettingType::StringList => "string list",
            SettingType::ObjectList => "object list",
            SettingType::Raw => "raw",
        }
    }
}

impl fmt::Display for SettingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Quote character a string literal was written with. Re-renders keep the
/// original style; newly coerced values default to double quotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteStyle {
    #[default]
    Double,
    Single,
}

impl QuoteStyle {
    pub fn quote_char(self) -> char {
        match self {
            QuoteStyle::Double => '"',
            QuoteStyle::Single => '\'',
        }
    }
}

/// A typed in-memory value for one entry of the settings literal.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingValue {
    Bool(bool),
    Number(f64),
    Str(String),
    StringList(Vec<String>),
    /// Each element is the verbatim source text of one nested object literal,
    /// treated as an opaque unit.
    ObjectList(Vec<String>),
    /// Exact source text of an unrecognized expression.
    Raw(String),
}

impl SettingValue {
    pub fn setting_type(&self) -> SettingType {
        match self {
            SettingValue::Bool(_) => SettingType::Bool,
            SettingValue::Number(_) => SettingType::Number,
            SettingValue::Str(_) => SettingType::String,
            SettingValue::StringList(_) => SettingType::StringList,
            SettingValue::ObjectList(_) => SettingType::ObjectList,
            SettingValue::Raw(_) => SettingType::Raw,
        }
    }

    /// JSON view used by the CLI's `--json` output. Raw and object-list
    /// values surface as their source text.
    pub fn to_json(&self) -> JsonValue {
        match self {
            SettingValue::Bool(b) => json!(b),
            SettingValue::Number(n) => json!(n),
            SettingValue::Str(s) => json!(s),
            SettingValue::StringList(items) => json!(items),
            SettingValue::ObjectList(objects) => json!(objects),
            SettingValue::Raw(text) => json!(text),
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&super::render(self, QuoteStyle::default()))
    }
}
