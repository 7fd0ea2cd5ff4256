use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecvalError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid pattern for field {field}: {source}")]
    Pattern {
        field: String,
        source: regex::Error,
    },
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, RecvalError>;
