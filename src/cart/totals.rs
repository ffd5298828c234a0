//! Cart Totals

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cart::line::CartLine;

/// Pricing totals for a cart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartTotals {
    /// Gross total, ignoring every discount
    pub total: Decimal,

    /// Sum of product discounts and coupon discounts
    pub savings: Decimal,

    /// `total - savings`
    pub discount_total: Decimal,
}

impl CartTotals {
    /// Price a set of lines with an optional cart-wide coupon percentage.
    pub fn compute<'a>(
        lines: impl IntoIterator<Item = &'a CartLine>,
        coupon_percent: Option<Decimal>,
    ) -> Self {
        let (total, savings) = lines
            .into_iter()
            .fold((Decimal::ZERO, Decimal::ZERO), |(total, savings), line| {
                (total + line.gross(), savings + line.savings(coupon_percent))
            });

        Self {
            total,
            savings,
            discount_total: total - savings,
        }
    }
}
