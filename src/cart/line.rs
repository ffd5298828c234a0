//! Cart Lines

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::products::Product;

/// One product's entry in a cart.
///
/// Price and discount are copied from the product when the line is created and
/// are not refreshed afterwards, so later catalog price changes do not reach an
/// existing line until it is removed and added again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Unit price at the time the line was created
    pub unit_price: Decimal,

    /// Product discount percentage at the time the line was created
    pub discount_percent: Decimal,

    /// Quantity requested
    pub quantity: u32,
}

impl CartLine {
    /// Snapshot a product into a new line.
    pub fn snapshot(product: &Product, quantity: u32) -> Self {
        Self {
            unit_price: product.price,
            discount_percent: Decimal::from(product.discount_percent),
            quantity,
        }
    }

    /// `unit_price × quantity`
    pub fn gross(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }

    /// Savings on this line.
    ///
    /// A line carrying its own discount never receives the cart coupon as well.
    pub fn savings(&self, coupon_percent: Option<Decimal>) -> Decimal {
        let quantity = Decimal::from(self.quantity);

        if self.discount_percent > Decimal::ZERO {
            return self.unit_price * self.discount_percent * quantity / Decimal::ONE_HUNDRED;
        }

        match coupon_percent {
            Some(percent) if !percent.is_zero() => {
                self.unit_price * (percent / Decimal::ONE_HUNDRED) * quantity
            }
            _ => Decimal::ZERO,
        }
    }
}
