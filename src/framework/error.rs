//! Error types for the order queue.

use thiserror::Error;

/// Contract violations detected by [`BoundedOrderQueue`](crate::framework::BoundedOrderQueue).
///
/// None of these are runtime conditions to retry. They mean the calling
/// program broke a promise it made when it created the queue.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueueError {
    /// The queue was created with a capacity of zero, so no producer could ever enqueue.
    #[error("Queue capacity must be greater than zero")]
    ZeroCapacity,

    /// The queue was closed before every expected order was handed to a consumer.
    #[error("Queue closed with {completed}/{expected} orders completed and {queued} still queued")]
    CloseViolation {
        completed: u64,
        expected: u64,
        queued: usize,
    },
}
