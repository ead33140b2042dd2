use std::collections::HashMap;
use std::sync::RwLock;

use cafekiosk_catalog::{Product, ProductNumber, SellingStatus};
use cafekiosk_core::OrderId;
use cafekiosk_ordering::Order;

use crate::error::StoreError;
use crate::order_store::OrderStore;
use crate::product_store::ProductStore;

fn poisoned() -> StoreError {
    StoreError::Backend("lock poisoned".to_string())
}

/// In-memory product catalog.
///
/// Intended for tests/dev. Rows are kept in insertion order; the uniqueness
/// check and the append happen under one write lock, so an insert is a
/// single atomic unit.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    rows: RwLock<Vec<Product>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProductStore for InMemoryProductStore {
    fn insert(&self, product: Product) -> Result<(), StoreError> {
        let mut rows = self.rows.write().map_err(|_| poisoned())?;
        if rows.iter().any(|p| p.number() == product.number()) {
            return Err(StoreError::DuplicateNumber(product.number().clone()));
        }
        rows.push(product);
        Ok(())
    }

    fn latest_number(&self) -> Result<Option<ProductNumber>, StoreError> {
        let rows = self.rows.read().map_err(|_| poisoned())?;

        let mut latest: Option<(u64, ProductNumber)> = None;
        for product in rows.iter() {
            let value = product
                .number()
                .numeric()
                .map_err(|e| StoreError::Backend(e.to_string()))?;
            if latest.as_ref().is_none_or(|(max, _)| value > *max) {
                latest = Some((value, product.number().clone()));
            }
        }

        Ok(latest.map(|(_, number)| number))
    }

    fn find_by_numbers(&self, numbers: &[ProductNumber]) -> Result<Vec<Product>, StoreError> {
        let rows = self.rows.read().map_err(|_| poisoned())?;
        Ok(rows
            .iter()
            .filter(|p| numbers.contains(p.number()))
            .cloned()
            .collect())
    }

    fn find_by_selling_status_in(
        &self,
        statuses: &[SellingStatus],
    ) -> Result<Vec<Product>, StoreError> {
        let rows = self.rows.read().map_err(|_| poisoned())?;
        Ok(rows
            .iter()
            .filter(|p| statuses.contains(&p.selling_status()))
            .cloned()
            .collect())
    }

    fn all(&self) -> Result<Vec<Product>, StoreError> {
        let rows = self.rows.read().map_err(|_| poisoned())?;
        Ok(rows.clone())
    }
}

/// In-memory order log.
///
/// Intended for tests/dev. An order and its line items are persisted as one
/// unit under the write lock.
#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    rows: RwLock<Vec<Order>>,
    by_id: RwLock<HashMap<OrderId, usize>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OrderStore for InMemoryOrderStore {
    fn insert(&self, order: Order) -> Result<(), StoreError> {
        let mut rows = self.rows.write().map_err(|_| poisoned())?;
        let mut by_id = self.by_id.write().map_err(|_| poisoned())?;
        by_id.insert(order.id_typed(), rows.len());
        rows.push(order);
        Ok(())
    }

    fn get(&self, id: OrderId) -> Result<Option<Order>, StoreError> {
        let rows = self.rows.read().map_err(|_| poisoned())?;
        let by_id = self.by_id.read().map_err(|_| poisoned())?;
        Ok(by_id.get(&id).and_then(|idx| rows.get(*idx)).cloned())
    }

    fn all(&self) -> Result<Vec<Order>, StoreError> {
        let rows = self.rows.read().map_err(|_| poisoned())?;
        Ok(rows.clone())
    }
}
