//! Pure data structures travelling through the queue.

pub mod menu;
pub mod order;

pub use menu::*;
pub use order::*;
