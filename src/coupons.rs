//! Coupons

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by a coupon lookup backend.
#[derive(Debug, Error)]
pub enum CouponLookupError {
    /// The backing store could not be queried.
    #[error("coupon store unavailable: {0}")]
    Unavailable(String),
}

/// A named, cart-wide percentage discount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coupon {
    /// Coupon code, matched exactly
    pub name: String,

    /// Discount percentage in `0..=33`
    pub discount_percent: Decimal,

    /// Whether the coupon is marked active. Not consulted on lookup.
    pub is_active: bool,
}

impl fmt::Display for Coupon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self
            .discount_percent
            .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven);

        write!(f, "{} - {rounded}% off", self.name)
    }
}

/// Look up coupons by exact name.
pub trait CouponLookup {
    /// Returns the coupon named `name`, or `None` if there is no such coupon.
    ///
    /// # Errors
    ///
    /// Returns a [`CouponLookupError`] if the backing store cannot be queried.
    fn coupon(&self, name: &str) -> Result<Option<Coupon>, CouponLookupError>;
}

/// In-memory coupon book keyed by coupon name.
#[derive(Debug, Clone, Default)]
pub struct CouponBook {
    coupons: FxHashMap<String, Coupon>,
}

impl CouponBook {
    /// Create an empty coupon book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a coupon by name.
    pub fn insert(&mut self, coupon: Coupon) -> Option<Coupon> {
        self.coupons.insert(coupon.name.clone(), coupon)
    }

    /// Check if a coupon with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.coupons.contains_key(name)
    }

    /// Number of coupons.
    pub fn len(&self) -> usize {
        self.coupons.len()
    }

    /// Check if the book is empty.
    pub fn is_empty(&self) -> bool {
        self.coupons.is_empty()
    }
}

impl CouponLookup for CouponBook {
    fn coupon(&self, name: &str) -> Result<Option<Coupon>, CouponLookupError> {
        Ok(self.coupons.get(name).cloned())
    }
}
