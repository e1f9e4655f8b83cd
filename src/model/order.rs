//! A unit of work travelling from a customer to a cook.
//!
//! # Ownership
//! An `Order` is moved into [`BoundedOrderQueue::enqueue`](crate::framework::BoundedOrderQueue::enqueue)
//! as a bare payload and moved out of
//! [`BoundedOrderQueue::dequeue`](crate::framework::BoundedOrderQueue::dequeue) as a whole value,
//! so exactly one party holds it at any time.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Position of an order in the total admission order. The first order is `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SequenceNumber(pub u64);

impl SequenceNumber {
    /// The number handed to the very first order a queue admits.
    pub const FIRST: SequenceNumber = SequenceNumber(1);

    pub(crate) fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl Display for SequenceNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Type-safe identifier for customers (producers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerId(pub u32);

impl Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "customer_{}", self.0)
    }
}

/// Type-safe identifier for cooks (consumers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CookId(pub u32);

impl Display for CookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cook_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order<P> {
    pub sequence_number: SequenceNumber,
    pub payload: P,
    pub customer_id: CustomerId,
}

impl<P> Order<P> {
    /// Creates a new Order.
    ///
    /// Only the queue assigns sequence numbers, so this stays crate-private.
    pub(crate) fn new(sequence_number: SequenceNumber, payload: P, customer_id: CustomerId) -> Self {
        Self {
            sequence_number,
            payload,
            customer_id,
        }
    }

    /// Consumes the order, returning the payload.
    pub fn into_payload(self) -> P {
        self.payload
    }
}
