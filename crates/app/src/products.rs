//! Product registration workflow.

use serde::{Deserialize, Serialize};

use cafekiosk_catalog::{Product, ProductNumber, ProductType, SellingStatus};
use cafekiosk_store::ProductStore;

use crate::error::ServiceResult;

/// Request: register a new product. The product number is assigned by the
/// registrar, not the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterProduct {
    pub product_type: ProductType,
    pub selling_status: SellingStatus,
    pub name: String,
    pub price: u64,
}

/// Registers products, assigning sequential product numbers.
///
/// Numbering reads the numerically highest stored number and increments it
/// (single-writer assumption); the store's uniqueness check turns a
/// concurrent duplicate into a hard error rather than a corrupted catalog.
#[derive(Debug)]
pub struct ProductRegistrar<S> {
    store: S,
}

impl<S> ProductRegistrar<S>
where
    S: ProductStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Assign the next product number, persist the product, return it.
    pub fn register(&self, request: RegisterProduct) -> ServiceResult<Product> {
        let number = self.next_number()?;
        let product = Product::new(
            number,
            request.product_type,
            request.selling_status,
            request.name,
            request.price,
        )?;

        self.store.insert(product.clone())?;
        tracing::info!(
            number = %product.number(),
            name = product.name(),
            price = product.price(),
            "product registered"
        );

        Ok(product)
    }

    /// Products currently shown to customers (`Selling` or `Hold`).
    pub fn selling_products(&self) -> ServiceResult<Vec<Product>> {
        Ok(self
            .store
            .find_by_selling_status_in(&SellingStatus::for_display())?)
    }

    fn next_number(&self) -> ServiceResult<ProductNumber> {
        match self.store.latest_number()? {
            Some(latest) => Ok(latest.next()?),
            None => Ok(ProductNumber::first()),
        }
    }
}
