//! Restaurant lifecycle management.
//!
//! This module contains the pieces that sit around the queue:
//!
//! - **Configuration**: How many customers, cooks, and queue slots there are
//! - **Orchestration**: Spawning customers and cooks, joining them, closing the queue
//! - **Observability setup**: Initializing tracing and logging
//!
//! # Main Components
//!
//! - [`Restaurant`] - Opens the queue, runs the service, closes it
//! - [`RestaurantConfig`] - Sizing, with environment overrides
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod config;
pub mod error;
pub mod restaurant;
pub mod tracing;

pub use config::*;
pub use error::*;
pub use restaurant::*;
pub use self::tracing::*;
