//! Products

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    /// Wrap a raw product id.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Raw product id.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Category identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(u64);

impl CategoryId {
    /// Wrap a raw category id.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Raw category id.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for CategoryId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category id
    pub id: CategoryId,

    /// Display name
    pub name: String,

    /// URL slug, unique across categories
    pub slug: String,
}

/// Product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product id
    pub id: ProductId,

    /// Product name
    pub name: String,

    /// Brand name
    pub brand: String,

    /// Long-form description
    pub description: String,

    /// URL slug, unique across products
    pub slug: String,

    /// Current catalog price
    pub price: Decimal,

    /// Product-level discount, whole percent in `0..=33`
    pub discount_percent: u8,

    /// Owning category, if any
    pub category: Option<CategoryId>,
}

impl Product {
    /// Product discount as a fraction of the price.
    #[must_use]
    pub fn discount_fraction(&self) -> Decimal {
        Decimal::from(self.discount_percent) / Decimal::ONE_HUNDRED
    }

    /// Price after the product-level discount.
    #[must_use]
    pub fn discount_price(&self) -> Decimal {
        self.price - self.price * Decimal::from(self.discount_percent) / Decimal::ONE_HUNDRED
    }
}

/// Look up products by id.
pub trait ProductLookup {
    /// Returns the product with the given id, if it exists.
    fn product(&self, id: ProductId) -> Option<Product>;
}

impl ProductLookup for [Product] {
    fn product(&self, id: ProductId) -> Option<Product> {
        self.iter().find(|product| product.id == id).cloned()
    }
}

impl ProductLookup for Vec<Product> {
    fn product(&self, id: ProductId) -> Option<Product> {
        self.as_slice().product(id)
    }
}
