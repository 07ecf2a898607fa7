use thiserror::Error;

pub type Result<T> = std::result::Result<T, PrgError>;

#[derive(Error, Debug)]
pub enum PrgError {
    #[error("Coordinator error: {0}")]
    Coordinator(String),

    #[error("Corrupt state file {path}: {reason}")]
    CorruptState { path: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PrgError {
    pub fn coordinator(msg: impl Into<String>) -> Self {
        Self::Coordinator(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn corrupt_state(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::CorruptState {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
