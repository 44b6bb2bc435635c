use thiserror::Error;

#[derive(Error, Debug)]
pub enum CipherError {
    #[error("Input contains no letters")]
    NoLetters,

    #[error("Relative frequency is undefined for zero letters")]
    DivisionUndefined,

    #[error("Insufficient Data: need at least 2 letters, found {observed}")]
    InsufficientData { observed: u64 },

    #[error("Invalid Stream Shape: {0}")]
    InvalidShape(String),

    #[error("Invalid Parameter: {0}")]
    InvalidParameter(String),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CfResult<T> = Result<T, CipherError>;
