//! Orders

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    cart::{CartEntry, CartTotals},
    products::ProductId,
};

/// Order identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(u64);

impl OrderId {
    /// Wrap a raw order id.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Raw order id.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Shipping details captured at checkout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingDetails {
    /// First name
    pub first_name: String,

    /// Surname
    pub surname: String,

    /// Contact email
    pub email: String,

    /// Address line 1
    pub address1: String,

    /// Address line 2
    pub address2: Option<String>,

    /// City
    pub city: String,

    /// State or region
    pub state: String,

    /// Country
    pub country: String,

    /// Postal code
    pub zipcode: String,
}

impl ShippingDetails {
    /// `"{first_name} {surname}"`
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.surname)
    }

    /// Non-empty address parts, one per line.
    pub fn shipping_address(&self) -> String {
        [
            Some(self.address1.as_str()),
            self.address2.as_deref(),
            Some(self.city.as_str()),
            Some(self.state.as_str()),
            Some(self.country.as_str()),
            Some(self.zipcode.as_str()),
        ]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
    }
}

/// A purchased cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Purchased product
    pub product_id: ProductId,

    /// Quantity purchased
    pub quantity: u32,

    /// Unit price charged, from the cart snapshot
    pub price: Decimal,
}

/// Order placed from a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Order id
    pub id: OrderId,

    /// Customer's full name
    pub full_name: String,

    /// Contact email
    pub email: String,

    /// Multi-line shipping address
    pub shipping_address: String,

    /// Amount charged, after discounts and coupon
    pub amount_paid: Decimal,

    /// When the order was placed
    pub placed_at: Timestamp,

    /// Purchased lines
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Build an order from shipping details and a priced cart.
    ///
    /// Entries whose product has left the catalog are not turned into items.
    pub fn place(
        id: OrderId,
        shipping: &ShippingDetails,
        entries: impl IntoIterator<Item = CartEntry>,
        totals: &CartTotals,
        placed_at: Timestamp,
    ) -> Self {
        let items = entries
            .into_iter()
            .filter(|entry| entry.product.is_some())
            .map(|entry| OrderItem {
                product_id: entry.product_id,
                quantity: entry.quantity,
                price: entry.unit_price,
            })
            .collect();

        Self {
            id,
            full_name: shipping.full_name(),
            email: shipping.email.clone(),
            shipping_address: shipping.shipping_address(),
            amount_paid: totals.discount_total,
            placed_at,
            items,
        }
    }

    /// Title used in listings.
    pub fn title(&self) -> String {
        format!("Order - #{}", self.id.get())
    }
}
