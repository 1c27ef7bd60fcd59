//! Error types for the strict string and path APIs

use thiserror::Error;

/// The error type for operations that refuse to fall back to a sentinel value
///
/// The slice, search, split and path algorithms are total and never produce one of
/// these. Only the strict variants (`index`, `rindex`), translation table construction
/// and convention parsing do.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TextError {
    /// `index`/`rindex` found no occurrence inside the requested window
    #[error("Substring not found: {sub:?}")]
    SubstringNotFound { sub: String },

    /// Translation tables map every byte value, so they need exactly 256 entries
    #[error("Translation table must have 256 entries, got {len}")]
    InvalidTranslationTable { len: usize },

    /// Path convention name that is neither posix nor nt
    #[error("Unknown path convention: {name} (expected posix, nt, windows or host)")]
    UnknownConvention { name: String },
}

/// Result type for the strict string and path APIs
pub type Result<T> = std::result::Result<T, TextError>;
