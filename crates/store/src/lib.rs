//! Persistence seam for the catalog and order domains.
//!
//! The store traits make **no storage assumptions**: they work with the
//! in-memory implementations here (tests/dev) and leave room for SQL
//! backends behind the same seam. Relational schema design is out of scope;
//! callers treat each store call as one atomic unit of work.

pub mod error;
pub mod in_memory;
pub mod order_store;
pub mod product_store;

pub use error::StoreError;
pub use in_memory::{InMemoryOrderStore, InMemoryProductStore};
pub use order_store::OrderStore;
pub use product_store::ProductStore;
