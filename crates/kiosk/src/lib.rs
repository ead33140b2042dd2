//! Standalone in-memory kiosk simulation.
//!
//! A cart of beverages with business-hour validation. This crate is a
//! self-contained unit-testing exercise: it shares the domain error model
//! with the rest of the workspace but touches no store.

pub mod beverage;
pub mod kiosk;

pub use beverage::{Americano, Beverage, Latte};
pub use kiosk::{CafeKiosk, KioskOrder};
