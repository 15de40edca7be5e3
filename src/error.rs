use thiserror::Error;

/// Main error type for scene stream derivation
#[derive(Error, Debug)]
pub enum StreamError {
    /// The upstream scene payload could not be decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A standard I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The scene carries no file records, so there is no resolution to report
    #[error("Scene has no files")]
    NoFiles,

    /// The scene carries no direct-stream path
    #[error("Scene has no direct stream URL")]
    MissingStreamUrl,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, StreamError>;
