use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("not found: {0}")]
    NotFound(&'static str),
    #[error("storage error: {0}")]
    Storage(&'static str),
    #[error("unsupported: {0}")]
    Unsupported(&'static str),
}
