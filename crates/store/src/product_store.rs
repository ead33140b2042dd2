//! Product store trait.

use std::sync::Arc;

use cafekiosk_catalog::{Product, ProductNumber, SellingStatus};

use crate::error::StoreError;

/// Persistent product catalog.
///
/// Implementations must:
/// - reject inserts that reuse an existing product number
/// - answer `latest_number` by **numeric** value, independent of insertion
///   order
/// - return at most one product per distinct number from `find_by_numbers`
pub trait ProductStore: Send + Sync {
    /// Persist a new product. Product numbers are unique.
    fn insert(&self, product: Product) -> Result<(), StoreError>;

    /// The numerically highest stored product number, if any.
    fn latest_number(&self) -> Result<Option<ProductNumber>, StoreError>;

    /// Products whose number appears in `numbers` (distinct matches;
    /// request multiplicity is the caller's concern).
    fn find_by_numbers(&self, numbers: &[ProductNumber]) -> Result<Vec<Product>, StoreError>;

    /// Products whose selling status is one of `statuses`.
    fn find_by_selling_status_in(
        &self,
        statuses: &[SellingStatus],
    ) -> Result<Vec<Product>, StoreError>;

    /// All stored products, in insertion order.
    fn all(&self) -> Result<Vec<Product>, StoreError>;
}

impl<S> ProductStore for Arc<S>
where
    S: ProductStore + ?Sized,
{
    fn insert(&self, product: Product) -> Result<(), StoreError> {
        (**self).insert(product)
    }

    fn latest_number(&self) -> Result<Option<ProductNumber>, StoreError> {
        (**self).latest_number()
    }

    fn find_by_numbers(&self, numbers: &[ProductNumber]) -> Result<Vec<Product>, StoreError> {
        (**self).find_by_numbers(numbers)
    }

    fn find_by_selling_status_in(
        &self,
        statuses: &[SellingStatus],
    ) -> Result<Vec<Product>, StoreError> {
        (**self).find_by_selling_status_in(statuses)
    }

    fn all(&self) -> Result<Vec<Product>, StoreError> {
        (**self).all()
    }
}
