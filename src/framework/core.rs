//! # Bounded Order Queue
//!
//! A monitor that sits between many customers (producers) and many cooks
//! (consumers).
//!
//! ## Key Types
//!
//! - [`BoundedOrderQueue`]: The shared queue itself.
//! - [`QueueStats`]: A consistent snapshot of the queue's counters.
//! - [`QueueState`]: Whether more work can still arrive.
//!
//! ## Monitor Layout
//!
//! Every mutable field lives in one [`Mutex`]. Two [`Condvar`]s hang off it:
//!
//! - `space_freed`: customers wait here while the queue is full, cooks signal it.
//! - `order_ready`: cooks wait here while the queue is empty but more orders are
//!   expected. Customers signal it on enqueue. The cook that takes the last
//!   expected order, and any cook that later finds the queue drained, broadcasts
//!   on it so every parked cook re-checks and leaves.
//!
//! ## Termination
//!
//! The queue knows up front how many orders it will ever receive
//! (`expected_total`). A cook that finds the queue empty with
//! `completed == expected_total` knows nothing else is coming and gets `None`
//! back instead of blocking.

use std::collections::VecDeque;
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::framework::QueueError;
use crate::model::{CustomerId, Order, SequenceNumber};

/// Everything guarded by the queue's lock.
struct Ledger<P> {
    items: VecDeque<Order<P>>,
    next_sequence_number: SequenceNumber,
    completed: u64,
}

impl<P> Ledger<P> {
    fn stats(&self, capacity: usize, expected_total: u64) -> QueueStats {
        QueueStats {
            queued: self.items.len(),
            capacity,
            next_sequence_number: self.next_sequence_number,
            completed: self.completed,
            expected_total,
        }
    }

    fn is_drained(&self, expected_total: u64) -> bool {
        self.items.is_empty() && self.completed >= expected_total
    }
}

/// Snapshot of the queue's counters, taken under the lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QueueStats {
    pub queued: usize,
    pub capacity: usize,
    pub next_sequence_number: SequenceNumber,
    pub completed: u64,
    pub expected_total: u64,
}

impl QueueStats {
    /// Number of sequence numbers handed out so far.
    pub fn issued(&self) -> u64 {
        self.next_sequence_number.0 - 1
    }

    /// Every issued sequence number is either still queued or already completed.
    pub fn is_conserved(&self) -> bool {
        self.issued() == self.queued as u64 + self.completed
    }
}

/// Observable phase of a live queue.
///
/// Closing is expressed by consuming the queue, so there is no `Closed` variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum QueueState {
    /// More orders are queued or still expected.
    Active,
    /// Every expected order has been handed to a cook and nothing is queued.
    Drained,
}

/// A bounded, FIFO, multi-producer multi-consumer queue with built-in drain detection.
///
/// # Concurrency Model
/// Share it behind an [`Arc`](std::sync::Arc). `enqueue` blocks while the queue
/// is full, `dequeue` blocks while it is empty and more orders are expected.
/// Both release the lock while they wait and re-check their condition after
/// every wake-up.
///
/// # Example
///
/// ```
/// use order_queue::framework::BoundedOrderQueue;
/// use order_queue::model::{CustomerId, SequenceNumber};
///
/// let queue = BoundedOrderQueue::new(2, 1).unwrap();
/// assert_eq!(queue.enqueue("chilli", CustomerId(1)), SequenceNumber(1));
/// let order = queue.dequeue().unwrap();
/// assert_eq!(order.payload, "chilli");
/// assert!(queue.dequeue().is_none());
/// queue.close();
/// ```
pub struct BoundedOrderQueue<P> {
    ledger: Mutex<Ledger<P>>,
    space_freed: Condvar,
    order_ready: Condvar,
    capacity: usize,
    expected_total: u64,
}

impl<P> BoundedOrderQueue<P> {
    /// Creates an empty queue.
    ///
    /// `expected_total` must be the exact number of `enqueue` calls that will
    /// ever be made. It is the only signal cooks have that the work is over.
    ///
    /// A zero capacity is a caller bug, but it is returned as
    /// [`QueueError::ZeroCapacity`] rather than panicking so construction stays
    /// fallible and propagates with `?`. Nothing is built, so no invariant can
    /// be observed broken.
    pub fn new(capacity: usize, expected_total: u64) -> Result<Self, QueueError> {
        if capacity == 0 {
            return Err(QueueError::ZeroCapacity);
        }
        debug!(capacity, expected_total, "Queue created");
        Ok(Self {
            ledger: Mutex::new(Ledger {
                items: VecDeque::new(),
                next_sequence_number: SequenceNumber::FIRST,
                completed: 0,
            }),
            space_freed: Condvar::new(),
            order_ready: Condvar::new(),
            capacity,
            expected_total,
        })
    }

    // No user code runs while the lock is held, so a poisoned lock still
    // guards consistent state.
    fn lock(&self) -> MutexGuard<'_, Ledger<P>> {
        self.ledger.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Admits an order, blocking while the queue is full.
    ///
    /// Returns the sequence number assigned to the order. Numbers start at 1
    /// and are gap-free across all customers.
    pub fn enqueue(&self, payload: P, customer_id: CustomerId) -> SequenceNumber {
        let mut ledger = self
            .space_freed
            .wait_while(self.lock(), |ledger| ledger.items.len() >= self.capacity)
            .unwrap_or_else(PoisonError::into_inner);

        let sequence_number = ledger.next_sequence_number;
        ledger.next_sequence_number = sequence_number.next();
        ledger.items.push_back(Order::new(sequence_number, payload, customer_id));

        if sequence_number.0 > self.expected_total {
            warn!(%sequence_number, expected_total = self.expected_total, "More orders than expected");
        }
        trace!(%sequence_number, %customer_id, queued = ledger.items.len(), "Enqueued");

        self.order_ready.notify_one();
        sequence_number
    }

    /// Hands the oldest order to a cook.
    ///
    /// Blocks while the queue is empty and more orders are expected. Returns
    /// `None` once every expected order has been handed out; from then on every
    /// call, current or future, returns `None` without blocking.
    pub fn dequeue(&self) -> Option<Order<P>> {
        let mut ledger = self
            .order_ready
            .wait_while(self.lock(), |ledger| {
                ledger.items.is_empty() && ledger.completed < self.expected_total
            })
            .unwrap_or_else(PoisonError::into_inner);

        match ledger.items.pop_front() {
            Some(order) => {
                ledger.completed += 1;
                trace!(sequence_number = %order.sequence_number, completed = ledger.completed, "Dequeued");
                self.space_freed.notify_one();
                if ledger.is_drained(self.expected_total) {
                    // Cooks already parked would otherwise wait for a dequeue that never comes.
                    debug!(completed = ledger.completed, "Last order taken");
                    self.order_ready.notify_all();
                }
                Some(order)
            }
            None => {
                // Every parked cook must see the drain, not just the next one.
                debug!(completed = ledger.completed, "Queue drained");
                self.order_ready.notify_all();
                None
            }
        }
    }

    pub fn stats(&self) -> QueueStats {
        self.lock().stats(self.capacity, self.expected_total)
    }

    pub fn state(&self) -> QueueState {
        if self.lock().is_drained(self.expected_total) {
            QueueState::Drained
        } else {
            QueueState::Active
        }
    }

    /// Tears the queue down, reporting a broken close contract as an error.
    ///
    /// Succeeds only when every expected order was handed to a cook and
    /// nothing is left queued. Use [`close`](Self::close) unless the caller
    /// needs to report the violation before halting.
    pub fn try_close(self) -> Result<QueueStats, QueueError> {
        let ledger = self.ledger.into_inner().unwrap_or_else(PoisonError::into_inner);
        let stats = ledger.stats(self.capacity, self.expected_total);

        if stats.completed != stats.expected_total || stats.queued != 0 {
            return Err(QueueError::CloseViolation {
                completed: stats.completed,
                expected: stats.expected_total,
                queued: stats.queued,
            });
        }
        debug!(completed = stats.completed, "Queue closed");
        Ok(stats)
    }

    /// Tears the queue down.
    ///
    /// # Panics
    /// Panics if the queue has not fully drained. That means the promised
    /// `expected_total` did not match reality, or cooks stopped early.
    pub fn close(self) -> QueueStats {
        match self.try_close() {
            Ok(stats) => stats,
            Err(e) => panic!("{e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_backpressure_then_drain() {
        let queue = Arc::new(BoundedOrderQueue::new(2, 3).unwrap());

        // 1. Fill the queue
        assert_eq!(queue.enqueue("A", CustomerId(1)), SequenceNumber(1));
        assert_eq!(queue.enqueue("B", CustomerId(1)), SequenceNumber(2));

        // 2. A third enqueue must block
        let producer = {
            let queue = Arc::clone(&queue);
            thread::spawn(move || queue.enqueue("C", CustomerId(2)))
        };
        thread::sleep(Duration::from_millis(50));
        assert!(!producer.is_finished(), "Enqueue should block on a full queue");
        assert_eq!(queue.stats().queued, 2);

        // 3. Dequeue frees a slot and unblocks the producer
        let first = queue.dequeue().unwrap();
        assert_eq!(first.sequence_number, SequenceNumber(1));
        assert_eq!(first.payload, "A");
        assert_eq!(producer.join().unwrap(), SequenceNumber(3));

        // 4. Drain in FIFO order
        let second = queue.dequeue().unwrap();
        assert_eq!((second.sequence_number, second.payload), (SequenceNumber(2), "B"));
        let third = queue.dequeue().unwrap();
        assert_eq!((third.sequence_number, third.payload), (SequenceNumber(3), "C"));
        assert_eq!(third.customer_id, CustomerId(2));

        // 5. Done
        assert!(queue.dequeue().is_none());
        assert_eq!(queue.state(), QueueState::Drained);

        let queue = Arc::try_unwrap(queue).ok().unwrap();
        let stats = queue.close();
        assert_eq!(stats.completed, 3);
        assert_eq!(stats.next_sequence_number, SequenceNumber(4));
    }

    #[test]
    fn test_nothing_expected_is_done_immediately() {
        let queue = BoundedOrderQueue::<&str>::new(1, 0).unwrap();
        assert_eq!(queue.state(), QueueState::Drained);
        assert!(queue.dequeue().is_none());
        assert!(queue.dequeue().is_none());
        queue.close();
    }

    #[test]
    fn test_taking_last_order_releases_parked_cooks() {
        let queue = Arc::new(BoundedOrderQueue::new(1, 1).unwrap());
        let (done_tx, done_rx) = std::sync::mpsc::channel();

        // 1. Three cooks each make a single dequeue call and park
        for _ in 0..3 {
            let queue = Arc::clone(&queue);
            let done_tx = done_tx.clone();
            thread::spawn(move || {
                let got_order = queue.dequeue().is_some();
                let _ = done_tx.send(got_order);
            });
        }
        thread::sleep(Duration::from_millis(50));

        // 2. One order arrives; whoever takes it must wake the rest
        queue.enqueue('x', CustomerId(1));

        let mut results: Vec<bool> = (0..3)
            .map(|_| {
                done_rx
                    .recv_timeout(Duration::from_secs(5))
                    .expect("Parked cook never returned")
            })
            .collect();
        results.sort();
        assert_eq!(results, vec![false, false, true]);
    }

    #[test]
    fn test_huge_capacity_allocates_lazily() {
        let queue = BoundedOrderQueue::new(usize::MAX / 2, 2).unwrap();
        assert_eq!(queue.enqueue(1u8, CustomerId(1)), SequenceNumber(1));
        assert_eq!(queue.enqueue(2u8, CustomerId(1)), SequenceNumber(2));
        assert_eq!(queue.stats().capacity, usize::MAX / 2);
        assert_eq!(queue.dequeue().map(Order::into_payload), Some(1));
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        let result = BoundedOrderQueue::<u8>::new(0, 5);
        assert_eq!(result.err(), Some(QueueError::ZeroCapacity));
    }

    #[test]
    fn test_stats_are_conserved() {
        let queue = BoundedOrderQueue::new(4, 4).unwrap();
        for i in 0..3 {
            queue.enqueue(i, CustomerId(i));
        }
        queue.dequeue().unwrap();

        let stats = queue.stats();
        assert_eq!(stats.queued, 2);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.issued(), 3);
        assert!(stats.is_conserved());
        assert_eq!(queue.state(), QueueState::Active);
    }

    #[test]
    fn test_try_close_reports_undrained_queue() {
        let queue = BoundedOrderQueue::new(2, 2).unwrap();
        queue.enqueue('x', CustomerId(1));

        let err = queue.try_close().unwrap_err();
        assert_eq!(
            err,
            QueueError::CloseViolation {
                completed: 0,
                expected: 2,
                queued: 1
            }
        );
    }

    #[test]
    #[should_panic(expected = "Queue closed with 1/2 orders completed")]
    fn test_close_panics_when_orders_are_missing() {
        let queue = BoundedOrderQueue::new(2, 2).unwrap();
        queue.enqueue('x', CustomerId(1));
        queue.dequeue().unwrap();
        queue.close();
    }
}
