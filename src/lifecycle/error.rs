//! Error types for the restaurant lifecycle.

use thiserror::Error;

use crate::framework::QueueError;

/// Errors that can occur while opening or closing the restaurant.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RestaurantError {
    /// The configuration cannot describe a restaurant that ever finishes.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The queue rejected its creation parameters or was closed before draining.
    #[error(transparent)]
    Queue(#[from] QueueError),

    /// A customer or cook task panicked or was cancelled.
    #[error("Task failed: {0}")]
    TaskFailed(String),

    /// Something still holds a handle to the queue after every task finished.
    #[error("Queue is still shared after all tasks finished")]
    StillShared,
}

impl From<tokio::task::JoinError> for RestaurantError {
    fn from(e: tokio::task::JoinError) -> Self {
        RestaurantError::TaskFailed(e.to_string())
    }
}
