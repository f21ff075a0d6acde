//! # Error Types

/// Errors from wordloom operations.
#[derive(Debug, thiserror::Error)]
pub enum WordloomError {
    /// A token index has no entry in the vocabulary's reverse mapping.
    #[error("index {index} not found in vocabulary")]
    UnknownIndex {
        /// The index which failed to resolve.
        index: u64,
    },

    /// A model produced a distribution with no entries.
    #[error("model produced an empty distribution")]
    EmptyDistribution,

    /// Token value out of range for the target type.
    #[error("token out of range")]
    TokenOutOfRange,

    /// Vocabulary data is inconsistent.
    #[error("{0}")]
    VocabConflict(String),

    /// An options value is unusable.
    #[error("invalid option: {0}")]
    InvalidOption(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Parse error (base64, integer, etc.)
    #[error("parse error: {0}")]
    Parse(String),
}

/// Result type for wordloom operations.
pub type WLResult<T> = core::result::Result<T, WordloomError>;
