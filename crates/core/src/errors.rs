use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Scheduling conflict: {0}")]
    Conflict(String),

    #[error("No equivalent slot: {0}")]
    Equivalence(String),

    #[error("Persistence unavailable: {0}")]
    Unavailable(#[from] eyre::Report),
}

pub type SlotResult<T> = Result<T, SlotError>;
