//! Error types shared by the comparison core and its CLI/HTTP boundaries.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for comparison operations.
pub type Result<T> = std::result::Result<T, CompareError>;

/// Failures surfaced by the normalizer, the scorer and their collaborators.
///
/// The core only ever returns these; translating them into exit codes or
/// HTTP statuses is left to the boundary layers.
#[derive(Error, Debug)]
pub enum CompareError {
    /// Required text fields or file arguments were not supplied
    #[error("input missing: {0}")]
    InputMissing(String),

    /// Both documents reduced to zero unique core words
    #[error("similarity is undefined: both documents have no core words")]
    ZeroOverlap,

    /// A text source could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configured similarity algorithm name is not registered
    #[error("unknown similarity algorithm: {0}")]
    UnknownAlgorithm(String),

    /// Configuration could not be loaded or parsed
    #[error("configuration error: {0}")]
    Config(String),
}

impl CompareError {
    /// Returns an HTTP status code appropriate for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            CompareError::InputMissing(_) => 400,
            CompareError::ZeroOverlap => 422,
            CompareError::Io { .. } => 500,
            CompareError::UnknownAlgorithm(_) | CompareError::Config(_) => 500,
        }
    }

    /// Returns the process exit code the CLI driver uses for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CompareError::InputMissing(_) => 2,
            _ => 1,
        }
    }

    /// True when the caller sent something unusable, as opposed to an
    /// operational failure on our side.
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }
}

impl From<::config::ConfigError> for CompareError {
    fn from(err: ::config::ConfigError) -> Self {
        CompareError::Config(err.to_string())
    }
}
