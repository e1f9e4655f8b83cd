use std::fmt::Display;
use std::sync::Arc;

use serde::Serialize;
use tracing::{info, instrument};

use crate::clients::QueueClient;
use crate::framework::BoundedOrderQueue;
use crate::model::{CookId, Order, SequenceNumber};

/// What one cook did during a shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CookShift {
    pub cook_id: CookId,
    /// Sequence numbers of the orders this cook fulfilled, in the order it took them.
    pub fulfilled: Vec<SequenceNumber>,
}

/// A cook taking orders off the queue.
pub struct CookClient<P> {
    id: CookId,
    queue: Arc<BoundedOrderQueue<P>>,
}

impl<P> Clone for CookClient<P> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            queue: Arc::clone(&self.queue),
        }
    }
}

impl<P> CookClient<P> {
    pub fn new(id: CookId, queue: Arc<BoundedOrderQueue<P>>) -> Self {
        Self { id, queue }
    }

    pub fn id(&self) -> CookId {
        self.id
    }

    /// Takes the next order, or `None` once the restaurant has served everything.
    pub fn next_order(&self) -> Option<Order<P>> {
        self.queue.dequeue()
    }
}

impl<P: Display> CookClient<P> {
    /// Fulfills orders until the queue reports that no more will arrive.
    #[instrument(skip(self), fields(cook_id = %self.id))]
    pub fn work_shift(&self) -> CookShift {
        let mut fulfilled = Vec::new();
        while let Some(order) = self.next_order() {
            info!(
                sequence_number = %order.sequence_number,
                customer_id = %order.customer_id,
                item = %order.payload,
                "Fulfilled order"
            );
            fulfilled.push(order.sequence_number);
        }
        info!(count = fulfilled.len(), "Shift over");
        CookShift {
            cook_id: self.id,
            fulfilled,
        }
    }
}

impl<P> QueueClient<P> for CookClient<P> {
    fn queue(&self) -> &Arc<BoundedOrderQueue<P>> {
        &self.queue
    }
}
