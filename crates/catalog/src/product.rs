use core::str::FromStr;

use serde::{Deserialize, Serialize};

use cafekiosk_core::{DomainError, DomainResult, Entity, ValueObject};

/// Minimum display width of a product number ("001", "002", ...).
const NUMBER_WIDTH: usize = 3;

/// Sequential product number, zero-padded to at least three digits.
///
/// Numbers are assigned at registration time: the first product gets `"001"`
/// and each subsequent one increments the numerically highest existing
/// number. Past `"999"` the width simply grows (`"1000"`), so the sequence
/// never wraps. Equality is exact-string: a requested number must match the
/// stored number verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductNumber(String);

impl ProductNumber {
    /// The number assigned when no products exist yet.
    pub fn first() -> Self {
        Self(format!("{:0width$}", 1, width = NUMBER_WIDTH))
    }

    /// The number following this one in the registration sequence.
    pub fn next(&self) -> DomainResult<Self> {
        let n = self.numeric()?;
        Ok(Self(format!("{:0width$}", n + 1, width = NUMBER_WIDTH)))
    }

    /// Numeric value of this number, for ordering.
    pub fn numeric(&self) -> DomainResult<u64> {
        self.0
            .parse::<u64>()
            .map_err(|e| DomainError::invalid_id(format!("product number '{}': {e}", self.0)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for ProductNumber {}

impl core::fmt::Display for ProductNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProductNumber {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::invalid_id(format!(
                "product number '{s}' must be a non-empty decimal string"
            )));
        }
        Ok(Self(s.to_string()))
    }
}

/// Product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Handmade,
    Bottle,
    Bakery,
}

/// Selling status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SellingStatus {
    Selling,
    Hold,
    StopSelling,
}

impl SellingStatus {
    /// Statuses shown to customers (orderable or temporarily held).
    pub fn for_display() -> [SellingStatus; 2] {
        [SellingStatus::Selling, SellingStatus::Hold]
    }

    pub fn is_displayed(&self) -> bool {
        Self::for_display().contains(self)
    }
}

/// A catalog product. Immutable after registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    number: ProductNumber,
    product_type: ProductType,
    selling_status: SellingStatus,
    name: String,
    /// Price in the smallest currency unit.
    price: u64,
}

impl Product {
    pub fn new(
        number: ProductNumber,
        product_type: ProductType,
        selling_status: SellingStatus,
        name: impl Into<String>,
        price: u64,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }

        Ok(Self {
            number,
            product_type,
            selling_status,
            name,
            price,
        })
    }

    pub fn number(&self) -> &ProductNumber {
        &self.number
    }

    pub fn product_type(&self) -> ProductType {
        self.product_type
    }

    pub fn selling_status(&self) -> SellingStatus {
        self.selling_status
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> u64 {
        self.price
    }
}

impl Entity for Product {
    type Id = ProductNumber;

    fn id(&self) -> &Self::Id {
        &self.number
    }
}
