//! Structural scanner for the settings literal.
//!
//! Locates the `settings = { ... }` assignment inside arbitrary JavaScript
//! source and walks its top-level entries without executing or fully parsing
//! the language. Strings (single, double, template) and comments are skipped
//! escape-aware so punctuation inside them never confuses the depth counting.

mod scanner;
mod types;

pub use scanner::scan;
pub use types::{RawEntry, ScanOutcome};
