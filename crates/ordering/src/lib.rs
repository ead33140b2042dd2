//! Order domain module.
//!
//! Business rules for orders: line-item capture and total pricing, as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod order;

pub use order::{LineItem, Order, OrderStatus};
