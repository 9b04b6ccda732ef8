use thiserror::Error;

#[derive(Error, Debug)]
pub enum QueueError {
    #[error("Authentication failed")]
    AuthenticationFailed,

    #[error("Path not found: {path}")]
    PathNotFound { path: String },

    #[error("Source unavailable: {path}")]
    SourceUnavailable { path: String },

    #[error("Failed to delete {path}: {cause}")]
    DeletionFailed { path: String, cause: String },

    #[error("Invalid file pattern {pattern}: {cause}")]
    InvalidPattern { pattern: String, cause: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("SSH error: {0}")]
    SshError(#[from] ssh2::Error),
}
