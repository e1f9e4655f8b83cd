use std::sync::Arc;

use crate::framework::{BoundedOrderQueue, QueueState, QueueStats};

/// Shared behaviour of every handle onto a [`BoundedOrderQueue`].
///
/// Customers and cooks each wrap an `Arc` of the same queue. This trait gives
/// both of them the read-only views for free.
pub trait QueueClient<P> {
    /// Access the shared queue.
    fn queue(&self) -> &Arc<BoundedOrderQueue<P>>;

    fn stats(&self) -> QueueStats {
        self.queue().stats()
    }

    fn state(&self) -> QueueState {
        self.queue().state()
    }
}
