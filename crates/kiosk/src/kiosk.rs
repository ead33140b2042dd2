use std::sync::Arc;

use chrono::{DateTime, NaiveTime, Utc};

use cafekiosk_core::{DomainError, DomainResult};

use crate::beverage::Beverage;

fn shop_open_time() -> NaiveTime {
    NaiveTime::from_hms_opt(10, 0, 0).expect("hardcoded time is valid")
}

fn shop_close_time() -> NaiveTime {
    NaiveTime::from_hms_opt(22, 0, 0).expect("hardcoded time is valid")
}

/// A kiosk cart. Beverages are shared handles, so adding the same beverage
/// several times puts several entries in the cart.
#[derive(Default)]
pub struct CafeKiosk {
    beverages: Vec<Arc<dyn Beverage>>,
}

impl CafeKiosk {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn beverages(&self) -> &[Arc<dyn Beverage>] {
        &self.beverages
    }

    pub fn add(&mut self, beverage: Arc<dyn Beverage>) {
        self.beverages.push(beverage);
    }

    /// Add `count` entries of the same beverage. Zero is a validation error.
    pub fn add_many(&mut self, beverage: Arc<dyn Beverage>, count: usize) -> DomainResult<()> {
        if count == 0 {
            return Err(DomainError::validation(
                "at least one beverage must be ordered",
            ));
        }

        for _ in 0..count {
            self.beverages.push(Arc::clone(&beverage));
        }
        Ok(())
    }

    /// Remove the first matching cart entry, if present.
    pub fn remove(&mut self, beverage: &Arc<dyn Beverage>) {
        if let Some(pos) = self.beverages.iter().position(|b| Arc::ptr_eq(b, beverage)) {
            self.beverages.remove(pos);
        }
    }

    pub fn clear(&mut self) {
        self.beverages.clear();
    }

    pub fn total_price(&self) -> u64 {
        self.beverages.iter().map(|b| b.price()).sum()
    }

    /// Snapshot the cart into an order.
    ///
    /// Orders are only accepted during business hours, 10:00 to 22:00
    /// inclusive (time of day of `at`).
    pub fn create_order(&self, at: DateTime<Utc>) -> DomainResult<KioskOrder> {
        let time_of_day = at.time();
        if time_of_day < shop_open_time() || time_of_day > shop_close_time() {
            return Err(DomainError::validation(
                "orders are only accepted during business hours",
            ));
        }

        Ok(KioskOrder {
            ordered_at: at,
            beverages: self.beverages.clone(),
        })
    }
}

/// Snapshot of a kiosk cart at order time.
pub struct KioskOrder {
    ordered_at: DateTime<Utc>,
    beverages: Vec<Arc<dyn Beverage>>,
}

impl KioskOrder {
    pub fn ordered_at(&self) -> DateTime<Utc> {
        self.ordered_at
    }

    pub fn beverages(&self) -> &[Arc<dyn Beverage>] {
        &self.beverages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::beverage::{Americano, Latte};
    use chrono::TimeZone;

    fn americano() -> Arc<dyn Beverage> {
        Arc::new(Americano)
    }

    fn latte() -> Arc<dyn Beverage> {
        Arc::new(Latte)
    }

    fn at(hour: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 5, hour, min, 0).unwrap()
    }

    #[test]
    fn add_puts_a_beverage_in_the_cart() {
        let mut kiosk = CafeKiosk::new();
        kiosk.add(americano());

        assert_eq!(kiosk.beverages().len(), 1);
        assert_eq!(kiosk.beverages()[0].name(), "americano");
    }

    #[test]
    fn add_many_repeats_the_same_beverage() {
        let mut kiosk = CafeKiosk::new();
        kiosk.add_many(americano(), 2).unwrap();

        assert_eq!(kiosk.beverages().len(), 2);
        assert_eq!(kiosk.total_price(), 8000);
    }

    #[test]
    fn add_many_rejects_zero() {
        let mut kiosk = CafeKiosk::new();
        let err = kiosk.add_many(americano(), 0).unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert!(kiosk.beverages().is_empty());
    }

    #[test]
    fn remove_takes_out_one_entry() {
        let mut kiosk = CafeKiosk::new();
        let drink = americano();
        kiosk.add(Arc::clone(&drink));

        kiosk.remove(&drink);
        assert!(kiosk.beverages().is_empty());
    }

    #[test]
    fn clear_empties_the_cart() {
        let mut kiosk = CafeKiosk::new();
        kiosk.add(americano());
        kiosk.add(latte());

        kiosk.clear();
        assert!(kiosk.beverages().is_empty());
    }

    #[test]
    fn total_price_sums_the_cart() {
        let mut kiosk = CafeKiosk::new();
        kiosk.add(americano());
        kiosk.add(latte());

        assert_eq!(kiosk.total_price(), 8500);
    }

    #[test]
    fn create_order_during_business_hours() {
        let mut kiosk = CafeKiosk::new();
        kiosk.add(americano());

        let order = kiosk.create_order(at(14, 0)).unwrap();

        assert_eq!(order.beverages().len(), 1);
        assert_eq!(order.ordered_at(), at(14, 0));
    }

    #[test]
    fn create_order_accepts_the_exact_boundaries() {
        let kiosk = CafeKiosk::new();
        assert!(kiosk.create_order(at(10, 0)).is_ok());
        assert!(kiosk.create_order(at(22, 0)).is_ok());
    }

    #[test]
    fn create_order_rejects_outside_business_hours() {
        let mut kiosk = CafeKiosk::new();
        kiosk.add(americano());

        assert!(matches!(
            kiosk.create_order(at(9, 59)),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            kiosk.create_order(at(22, 1)),
            Err(DomainError::Validation(_))
        ));
    }
}
