use thiserror::Error;

/// Result alias for the settings core.
pub type Result<T> = std::result::Result<T, SettingsError>;

/// Everything that can go wrong between loading a settings file and writing
/// it back.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings literal could not be located, or its nesting never closes.
    /// Fatal to loading; nothing partial is exposed.
    #[error("settings literal not usable: {0}")]
    Structure(String),

    /// The same key is declared twice inside the literal.
    #[error("duplicate key `{0}` in settings literal")]
    DuplicateKey(String),

    /// A value's literal text does not match the shape it appears to have.
    /// The document layer downgrades the affected entry to raw instead of
    /// failing the load.
    #[error("cannot read `{literal}` as {expected}")]
    Coercion { expected: &'static str, literal: String },

    /// `set` was called with a value whose shape differs from the entry's
    /// declared type.
    #[error("type mismatch for `{key}`: expected {expected}, got {actual}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// The entry holds an expression the editor does not understand
    /// (identifier, function call, env-var fallback). It is preserved
    /// verbatim and cannot be edited.
    #[error("`{0}` holds a raw expression and cannot be edited")]
    UnsupportedEdit(String),

    /// The key does not exist in the loaded literal. Adding new keys is
    /// outside the supported contract.
    #[error("unknown setting `{0}`")]
    UnknownKey(String),

    /// The file content no longer matches what the document was parsed from.
    /// Caller must reload before saving; nothing was written.
    #[error("settings file changed since load; reload before saving")]
    StaleFile,

    /// Two queued replacements touch the same bytes. Indicates a scanner bug
    /// rather than bad input, but surfaced instead of corrupting the file.
    #[error("replacement spans overlap at byte {0}")]
    OverlappingSpans(usize),
}
