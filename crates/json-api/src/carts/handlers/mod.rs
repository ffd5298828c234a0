//! Cart Handlers

pub(crate) mod apply_coupon;
pub(crate) mod delete;
pub(crate) mod items;
pub(crate) mod update;

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use trolley_app::domain::carts::models::CartSummary;

use crate::extensions::*;

/// Cart Mutation Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// Total quantity across all lines
    pub cart_qty: u64,

    /// Cart total after product discounts and coupon
    pub product_qty: f64,
}

impl From<CartSummary> for CartResponse {
    fn from(summary: CartSummary) -> Self {
        CartResponse {
            cart_qty: summary.count,
            product_qty: summary.totals.discount_total.to_float(),
        }
    }
}
