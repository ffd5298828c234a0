//! Cart Models

use trolley::{
    cart::{Cart, CartEntry, CartTotals},
    products::ProductLookup,
};

/// Item count and totals after a cart mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartSummary {
    pub count: u64,
    pub totals: CartTotals,
}

impl From<&Cart> for CartSummary {
    fn from(cart: &Cart) -> Self {
        Self {
            count: cart.count(),
            totals: cart.totals(),
        }
    }
}

/// Cart contents enriched with live catalog data.
#[derive(Debug, Clone, PartialEq)]
pub struct CartListing {
    pub items: Vec<CartEntry>,
    pub count: u64,
    pub totals: CartTotals,
}

impl CartListing {
    pub fn from_cart<P: ProductLookup + ?Sized>(cart: &Cart, products: &P) -> Self {
        Self {
            items: cart.entries(products).collect(),
            count: cart.count(),
            totals: cart.totals(),
        }
    }
}
