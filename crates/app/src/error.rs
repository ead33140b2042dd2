//! Service-level error: domain + store failures under one roof.

use thiserror::Error;

use cafekiosk_catalog::ProductNumber;
use cafekiosk_core::DomainError;
use cafekiosk_store::StoreError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Deterministic domain failure (validation, bad identifier).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Store failure (duplicate number, backend).
    #[error(transparent)]
    Store(#[from] StoreError),

    /// An order requested a product number with no stored product.
    /// The whole order is rejected; nothing is persisted.
    #[error("unknown product number: {0}")]
    UnknownProduct(ProductNumber),
}
