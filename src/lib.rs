//! # Order Queue
//!
//! > **A bounded, drain-aware order queue for many customers and many cooks.**
//!
//! This crate models a busy restaurant counter. Customers place orders, cooks
//! fulfill them, and the counter only has room for so many tickets at once.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Why a Monitor?
//!
//! Capacity control, sequencing, and termination detection all read and write
//! the same counters. Putting them behind one lock with two condition variables
//! keeps every rule checkable in one place:
//! - **Backpressure**: Customers block while the counter is full.
//! - **Fairness**: Every order gets a gap-free sequence number and is served in that order.
//! - **Termination**: Cooks learn that the day is over from the queue itself, with no
//!   sentinel orders.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Knowing When to Stop
//! The queue is told up front how many orders it will ever see. A cook that finds
//! the queue empty with that many orders already handed out gets `None` and wakes
//! every other waiting cook so they can leave too.
//!
//! ### 2. Fatal Contract Violations
//! Closing a queue that has not fully drained is a bug in the caller, not a runtime
//! condition. [`BoundedOrderQueue::close`](framework::BoundedOrderQueue::close) panics;
//! [`try_close`](framework::BoundedOrderQueue::try_close) returns the violation for
//! callers that want to log it first.
//!
//! ### 3. Observability
//! We use `tracing` everywhere with structured fields. See [`lifecycle::setup_tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! - **Role**: The queue and its invariants.
//! - **Key items**: [`BoundedOrderQueue`](framework::BoundedOrderQueue), [`QueueError`](framework::QueueError).
//!
//! ### 2. The Data ([`model`])
//! - **Key items**: [`Order`](model::Order), [`MenuItem`](model::MenuItem), [`SequenceNumber`](model::SequenceNumber).
//!
//! ### 3. The Interface ([`clients`])
//! - **Role**: Role-specific handles onto the shared queue.
//! - **Key items**: [`CustomerClient`](clients::CustomerClient), [`CookClient`](clients::CookClient).
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! - **Role**: Sizes the queue, spawns customers and cooks, closes the queue.
//! - **Key items**: [`Restaurant`](lifecycle::Restaurant), [`RestaurantConfig`](lifecycle::RestaurantConfig).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run with info logs
//! RUST_LOG=info cargo run
//!
//! # Smaller restaurant
//! BOWL_CUSTOMERS=5 BOWL_COOKS=2 BOWL_CAPACITY=3 RUST_LOG=info cargo run
//! ```

pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod model;
