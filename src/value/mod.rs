//! Typed values and the literal-text conversions in both directions.
//!
//! This module provides:
//! - The recognized value shapes (bool, number, string, string list,
//!   object list) plus the raw pass-through for anything else
//! - `parse_literal` for literal text -> typed value
//! - `render` for typed value -> literal text, preserving the quote style
//!   the entry used in the original file

mod parse;
mod render;
mod types;

pub use parse::{commented_strings, detect_quote_style, parse_literal, quoted_strings};
pub use render::render;
pub use types::{QuoteStyle, SettingType, SettingValue};
