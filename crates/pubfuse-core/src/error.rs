use thiserror::Error;

#[derive(Debug, Error)]
pub enum PubfuseError {
    #[error("invalid sort field: {0}")]
    InvalidSortField(String),
}

pub type Result<T> = std::result::Result<T, PubfuseError>;
