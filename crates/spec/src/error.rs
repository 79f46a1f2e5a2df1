//! Error types for network spec operations.

/// Error type for NetworkSpec file operations.
#[derive(Debug, thiserror::Error)]
pub enum NetworkSpecFileError {
    /// IO error reading/writing file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing/serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
