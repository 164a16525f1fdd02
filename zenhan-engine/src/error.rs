//! Error types for table construction

/// Errors raised while building a mapping or variation-sequence table.
///
/// These only ever come from malformed static table data, never from text
/// passed to the conversion functions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("invalid range {start:?}..={end:?}: end must be greater than start")]
    InvalidRange { start: char, end: char },

    #[error("range length mismatch: narrow range has {narrow} chars, wide range has {wide}")]
    RangeLengthMismatch { narrow: usize, wide: usize },

    #[error("duplicate halfwidth key {key:?}")]
    DuplicateKey { key: char },
}

pub type Result<T> = std::result::Result<T, TableError>;
