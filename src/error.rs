use thiserror::Error;

pub type ScaleResult<T> = Result<T, ScaleError>;

#[derive(Debug, Error)]
pub enum ScaleError {
    #[error("invalid domain: {0}")]
    InvalidDomain(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid range: {0}")]
    InvalidRange(String),
}
