//! Store operation errors.

use thiserror::Error;

use cafekiosk_catalog::ProductNumber;

/// Infrastructure-level store error, as opposed to domain errors
/// (validation, invariants).
#[derive(Debug, Error)]
pub enum StoreError {
    /// A product with the same number is already stored.
    #[error("duplicate product number: {0}")]
    DuplicateNumber(ProductNumber),

    /// The storage backend failed (e.g. a poisoned lock).
    #[error("storage backend failure: {0}")]
    Backend(String),
}
