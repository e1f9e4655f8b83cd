use std::sync::Arc;

use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::clients::{CookClient, CookShift, CustomerClient};
use crate::framework::{BoundedOrderQueue, QueueStats};
use crate::lifecycle::{RestaurantConfig, RestaurantError};
use crate::model::{CookId, CustomerId, MenuItem, SequenceNumber};

/// Summary of a finished service, produced by [`Restaurant::close`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShiftReport {
    /// Sequence numbers each customer received, indexed by customer.
    pub placed: Vec<(CustomerId, Vec<SequenceNumber>)>,
    pub cook_shifts: Vec<CookShift>,
    /// Queue counters at the moment it was closed.
    pub stats: QueueStats,
}

impl ShiftReport {
    pub fn orders_placed(&self) -> usize {
        self.placed.iter().map(|(_, numbers)| numbers.len()).sum()
    }

    pub fn orders_fulfilled(&self) -> usize {
        self.cook_shifts.iter().map(|shift| shift.fulfilled.len()).sum()
    }
}

/// The lifecycle driver that owns the queue and every customer and cook.
///
/// `Restaurant` is responsible for:
/// - **Sizing**: Deriving the queue's `expected_total` from the config
/// - **Spawning**: Running each customer and cook on the Tokio blocking pool,
///   since the queue blocks OS threads rather than yielding to the runtime
/// - **Closing**: Joining everyone, then closing the queue
///
/// # Example
///
/// ```ignore
/// let restaurant = Restaurant::open(RestaurantConfig::default())?;
/// let report = restaurant.close().await?;
/// assert_eq!(report.orders_fulfilled(), 270);
/// ```
pub struct Restaurant {
    queue: Arc<BoundedOrderQueue<MenuItem>>,
    customers: Vec<JoinHandle<(CustomerId, Vec<SequenceNumber>)>>,
    cooks: Vec<JoinHandle<CookShift>>,
}

impl Restaurant {
    /// Opens the restaurant and starts every customer and cook.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn open(config: RestaurantConfig) -> Result<Self, RestaurantError> {
        config.validate()?;
        let queue = Arc::new(BoundedOrderQueue::new(config.capacity, config.expected_total())?);

        let customers = (1..=config.customers)
            .map(|id| {
                let customer = CustomerClient::new(CustomerId(id), Arc::clone(&queue));
                let count = config.orders_per_customer;
                tokio::task::spawn_blocking(move || (customer.id(), customer.place_random_orders(count)))
            })
            .collect();

        let cooks = (1..=config.cooks)
            .map(|id| {
                let cook = CookClient::new(CookId(id), Arc::clone(&queue));
                tokio::task::spawn_blocking(move || cook.work_shift())
            })
            .collect();

        info!(
            capacity = config.capacity,
            customers = config.customers,
            cooks = config.cooks,
            expected_total = config.expected_total(),
            "Restaurant is open!"
        );

        Ok(Self {
            queue,
            customers,
            cooks,
        })
    }

    /// Current queue counters.
    pub fn stats(&self) -> QueueStats {
        self.queue.stats()
    }

    /// Waits for every customer and cook, then closes the queue.
    ///
    /// # Shutdown Process
    ///
    /// Customers are joined first: once they are all done, every expected order
    /// has been placed. Cooks then find the drained queue and return on their
    /// own. The queue is closed last and must have served exactly the expected
    /// number of orders.
    ///
    /// # Returns
    ///
    /// - `Ok(ShiftReport)` if every task finished and the queue drained
    /// - `Err(RestaurantError)` if a task failed or the close contract was broken
    ///
    /// # Task Failure Is Fatal
    ///
    /// A failed customer leaves `expected_total` unreachable, so cooks stay
    /// parked on the blocking pool forever and the Tokio runtime can never shut
    /// down cleanly. `close` returns the error without joining the cooks; the
    /// caller must end the process rather than drop the runtime.
    pub async fn close(self) -> Result<ShiftReport, RestaurantError> {
        info!("Closing restaurant...");

        let mut placed = Vec::with_capacity(self.customers.len());
        for handle in self.customers {
            match handle.await {
                Ok(result) => placed.push(result),
                Err(e) => {
                    error!("Customer task failed, cooks can no longer finish: {:?}", e);
                    return Err(e.into());
                }
            }
        }

        let mut cook_shifts = Vec::with_capacity(self.cooks.len());
        for handle in self.cooks {
            match handle.await {
                Ok(shift) => {
                    info!(cook_id = %shift.cook_id, fulfilled = shift.fulfilled.len(), "Cook finished");
                    cook_shifts.push(shift);
                }
                Err(e) => {
                    error!("Cook task failed: {:?}", e);
                    return Err(e.into());
                }
            }
        }

        let queue = Arc::try_unwrap(self.queue).map_err(|_| RestaurantError::StillShared)?;
        let stats = queue.try_close().inspect_err(|e| error!(error = %e, "Close contract broken"))?;

        info!(fulfilled = stats.completed, "Restaurant is closed!");
        Ok(ShiftReport {
            placed,
            cook_shifts,
            stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test(flavor = "multi_thread")]
    async fn test_failed_customer_returns_without_waiting_for_cooks() {
        let queue = Arc::new(BoundedOrderQueue::<MenuItem>::new(2, 2).unwrap());

        // 1. One customer dies before placing anything, one cook parks
        let customer = tokio::task::spawn_blocking(|| -> (CustomerId, Vec<SequenceNumber>) {
            panic!("customer walked out")
        });
        let cook = CookClient::new(CookId(1), Arc::clone(&queue));
        let restaurant = Restaurant {
            queue: Arc::clone(&queue),
            customers: vec![customer],
            cooks: vec![tokio::task::spawn_blocking(move || cook.work_shift())],
        };
        assert_eq!(restaurant.stats().expected_total, 2);
        assert_eq!(restaurant.stats().completed, 0);

        // 2. Close reports the failure instead of waiting on the parked cook
        let result = tokio::time::timeout(Duration::from_secs(5), restaurant.close())
            .await
            .expect("close waited on a cook that can never finish");
        assert!(matches!(result, Err(RestaurantError::TaskFailed(_))));

        // 3. Feed the cook so the test runtime can shut down
        queue.enqueue(MenuItem::BensCake, CustomerId(1));
        queue.enqueue(MenuItem::BensShake, CustomerId(1));
    }
}
