//! The bounded order queue and its error type.
//!
//! # Main Components
//!
//! - [`BoundedOrderQueue`] - The shared monitor customers and cooks talk through
//! - [`QueueStats`] / [`QueueState`] - Read-only views of the queue
//! - [`QueueError`] - Contract violations

pub mod core;
pub mod error;

pub use self::core::*;
pub use error::*;
