//! Customer and cook handles onto a shared [`BoundedOrderQueue`](crate::framework::BoundedOrderQueue).

pub mod cook_client;
pub mod customer_client;
pub mod queue_client;

pub use cook_client::*;
pub use customer_client::*;
pub use queue_client::*;
