use std::sync::Arc;

use tracing::{info, instrument};

use crate::clients::QueueClient;
use crate::framework::BoundedOrderQueue;
use crate::model::{CustomerId, MenuItem, SequenceNumber};

/// A customer placing orders on the queue.
///
/// Every call to [`place_order`](Self::place_order) counts towards the queue's
/// `expected_total`, so whoever hands out customer clients must know up front
/// how many orders they will place in total.
pub struct CustomerClient<P> {
    id: CustomerId,
    queue: Arc<BoundedOrderQueue<P>>,
}

impl<P> Clone for CustomerClient<P> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            queue: Arc::clone(&self.queue),
        }
    }
}

impl<P> CustomerClient<P> {
    pub fn new(id: CustomerId, queue: Arc<BoundedOrderQueue<P>>) -> Self {
        Self { id, queue }
    }

    pub fn id(&self) -> CustomerId {
        self.id
    }

    /// Places one order, blocking while the queue is full.
    pub fn place_order(&self, payload: P) -> SequenceNumber {
        self.queue.enqueue(payload, self.id)
    }
}

impl CustomerClient<MenuItem> {
    /// Places `count` orders for random menu items.
    ///
    /// Returns the sequence numbers in the order they were placed.
    #[instrument(skip(self), fields(customer_id = %self.id))]
    pub fn place_random_orders(&self, count: u32) -> Vec<SequenceNumber> {
        (0..count)
            .map(|_| {
                let item = MenuItem::pick_random();
                let sequence_number = self.place_order(item);
                info!(%sequence_number, %item, "Placed order");
                sequence_number
            })
            .collect()
    }
}

impl<P> QueueClient<P> for CustomerClient<P> {
    fn queue(&self) -> &Arc<BoundedOrderQueue<P>> {
        &self.queue
    }
}
