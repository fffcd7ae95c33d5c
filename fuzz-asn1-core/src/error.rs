use thiserror::Error;

/// Main error type for fuzz value generation
#[derive(Error, Debug)]
pub enum FuzzError {
    #[error("Entropy source error: {0}")]
    Entropy(String),

    #[error("Unknown encoding ruleset: {0}")]
    UnknownRuleset(String),

    #[error("Unknown ASN.1 type: {0}")]
    UnknownType(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl FuzzError {
    /// Whether a bulk run may skip the failed sample and carry on.
    ///
    /// Only randomness failures qualify; configuration and I/O errors always
    /// abort the run.
    pub fn is_sample_local(&self) -> bool {
        matches!(self, FuzzError::Entropy(_))
    }
}

/// Result type alias for fuzz value generation
pub type FuzzResult<T> = Result<T, FuzzError>;
