use sha2::{Digest, Sha256};

use super::document::SettingsDocument;
use crate::error::{Result, SettingsError};
use crate::text::TextModel;
use crate::value::{SettingType, parse_literal, render};

impl SettingsDocument {
    /// Produces the new file content with every edited value patched in
    /// place and every other byte unchanged.
    ///
    /// `original_text` must be the exact text the document was loaded from;
    /// a fingerprint mismatch means the file changed underneath us and the
    /// caller must reload (nothing is written, nothing partial happens).
    /// With no pending edits the output equals the input byte-for-byte.
    pub fn render(&self, original_text: &str) -> Result<String> {
        let fingerprint: [u8; 32] = Sha256::digest(original_text.as_bytes()).into();
        if fingerprint != self.fingerprint {
            return Err(SettingsError::StaleFile);
        }

        let model = TextModel::new(original_text);
        let mut edits = Vec::new();

        for entry in &self.entries {
            if entry.declared == SettingType::Raw {
                continue;
            }
            // An entry is dirty when its current value no longer matches
            // what its original literal decodes to.
            let original_value = parse_literal(&entry.original_literal)?;
            if original_value != entry.value {
                edits.push((entry.span, render(&entry.value, entry.quote_style)));
            }
        }

        model.replace_spans(&edits)
    }
}
