use thiserror::Error;

/// Filter errors
#[derive(Error, Debug)]
pub enum FilterError {
    /// Kept for the decoder's error type; lossy decoding means flat queries
    /// do not hit it.
    #[error("Query string error: {0}")]
    Query(#[from] serde_urlencoded::de::Error),
    #[error("Configuration error: {0}")]
    Config(#[from] serde_yaml::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid filter options: {0}")]
    InvalidOptions(String),
}
