use thiserror::Error;

pub mod service;
pub mod store;
pub mod task;

pub use service::ListOutcome;
pub use task::{Status, Task};

/// Failures surfaced by the store and service layers.
#[derive(Debug, Error)]
pub enum TaskError {
    /// A required field was empty.
    #[error("{0}")]
    Validation(&'static str),
    /// No task carries the given ID.
    #[error("task with ID {0} not found")]
    NotFound(u32),
    /// The persisted document exists but is malformed.
    #[error("cannot parse task file: {0}")]
    Parse(#[from] serde_json::Error),
    /// Reading or writing the persisted document failed.
    #[error("cannot access task file: {0}")]
    Io(#[from] std::io::Error),
}
