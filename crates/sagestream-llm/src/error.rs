use thiserror::Error;

#[derive(Error, Debug)]
pub enum StreamError {
    #[error("Invalid UTF-8 in record line: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("Failed to parse record: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Record is missing field: {0}")]
    MissingField(&'static str),

    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StreamError>;
