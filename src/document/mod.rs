//! The in-memory settings model.
//!
//! A `SettingsDocument` is built once per loaded file, edited in memory, and
//! consumed by `render`, which patches only the spans of changed values back
//! into the original text. Everything outside those spans survives
//! byte-for-byte.

mod document;
mod render;
mod types;

pub use document::SettingsDocument;
pub use types::SettingEntry;

#[cfg(test)]
mod tests;
