//! Error types for txtract

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Malformed record: expected at least 7 lines, found {lines}")]
    MalformedGroup { lines: usize },

    #[error("Unable to parse timestamp: {value}")]
    UnparseableTimestamp { value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, Error>;
