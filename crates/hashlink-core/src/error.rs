use thiserror::Error;

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("key not found: {0}")]
    NotFound(String),
    #[error("store backend unavailable: {0}")]
    Unavailable(String),
}

/// Errors raised while configuring core components.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("invalid digest prefix length {len}; expected {min}..={max}")]
    InvalidPrefixLength { len: usize, min: usize, max: usize },
}
