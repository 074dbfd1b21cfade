use thiserror::Error;

pub type Result<T> = std::result::Result<T, VectorError>;

#[derive(Error, Debug)]
pub enum VectorError {
    #[error("vectors must have the same dimension: {left} != {right}")]
    DimensionMismatch { left: usize, right: usize },

    #[error("invalid vector length: {0}")]
    InvalidLength(i64),

    #[error("unsupported format version: {0}")]
    UnsupportedVersion(u8),

    #[error("malformed input: {0}")]
    Malformed(String),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    SerdeJson(#[from] serde_json::Error),
}
