//! Cart
//!
//! The cart has no identity of its own: it is read out of a [`Session`], mutated,
//! and written back with [`Cart::save`], which flags the session for persistence.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::{
    coupons::CouponLookup,
    products::{Product, ProductId, ProductLookup},
    session::{Session, SessionError},
};

pub mod entry;
pub mod line;
pub mod totals;

pub use entry::CartEntry;
pub use line::CartLine;
pub use totals::CartTotals;

/// Session key holding the cart lines.
pub const CART_SESSION_KEY: &str = "cart";

/// Session key holding the active coupon percentage.
pub const COUPON_SESSION_KEY: &str = "coupon";

/// Session-scoped shopping cart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: BTreeMap<ProductId, CartLine>,
    coupon_percent: Option<Decimal>,
    dirty: bool,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the cart stored in a session, or an empty cart if there is none.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] if the stored cart or coupon is malformed.
    pub fn load(session: &Session) -> Result<Self, SessionError> {
        Ok(Self {
            lines: session.get(CART_SESSION_KEY)?.unwrap_or_default(),
            coupon_percent: session.get(COUPON_SESSION_KEY)?,
            dirty: false,
        })
    }

    /// Write the cart back into the session and mark the session modified.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] if the cart cannot be encoded.
    pub fn save(&mut self, session: &mut Session) -> Result<(), SessionError> {
        session.insert(CART_SESSION_KEY, &self.lines)?;
        session.insert(COUPON_SESSION_KEY, &self.coupon_percent)?;

        self.dirty = false;

        Ok(())
    }

    /// Add a product, or replace the quantity if it is already in the cart.
    ///
    /// An existing line keeps its original price and discount snapshot.
    pub fn add_or_set(&mut self, product: &Product, quantity: u32) {
        self.lines
            .entry(product.id)
            .and_modify(|line| line.quantity = quantity)
            .or_insert_with(|| CartLine::snapshot(product, quantity));

        self.dirty = true;
    }

    /// Replace the quantity of an existing line. Unknown products are ignored.
    pub fn update(&mut self, product_id: ProductId, quantity: u32) {
        if let Some(line) = self.lines.get_mut(&product_id) {
            line.quantity = quantity;
        }

        self.dirty = true;
    }

    /// Remove a line. Unknown products are ignored.
    pub fn delete(&mut self, product_id: ProductId) {
        self.lines.remove(&product_id);

        self.dirty = true;
    }

    /// Apply a coupon by exact name.
    ///
    /// Unknown codes, negative discounts and lookup failures all clear the
    /// active coupon instead of failing. Returns whether a coupon is now active.
    pub fn apply_coupon<C: CouponLookup + ?Sized>(&mut self, coupons: &C, code: &str) -> bool {
        self.coupon_percent = match coupons.coupon(code) {
            Ok(Some(coupon)) if coupon.discount_percent >= Decimal::ZERO => {
                Some(coupon.discount_percent)
            }
            Ok(_) | Err(_) => None,
        };

        self.dirty = true;

        self.has_coupon()
    }

    /// Whether a non-zero coupon is active.
    pub fn has_coupon(&self) -> bool {
        self.coupon_percent.is_some_and(|percent| !percent.is_zero())
    }

    /// Active coupon percentage, if any.
    pub fn coupon_percent(&self) -> Option<Decimal> {
        self.coupon_percent
    }

    /// Iterate over the lines, enriched with live catalog data.
    ///
    /// Each call walks the current cart state again.
    pub fn entries<'a, P: ProductLookup + ?Sized>(
        &'a self,
        products: &'a P,
    ) -> impl Iterator<Item = CartEntry> + 'a {
        self.lines
            .iter()
            .map(move |(id, line)| CartEntry::enrich(*id, line, products))
    }

    /// Raw lines keyed by product id.
    pub fn lines(&self) -> &BTreeMap<ProductId, CartLine> {
        &self.lines
    }

    /// Line for a single product.
    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.get(&product_id)
    }

    /// Total quantity across all lines.
    pub fn count(&self) -> u64 {
        self.lines.values().map(|line| u64::from(line.quantity)).sum()
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Price the cart.
    pub fn totals(&self) -> CartTotals {
        CartTotals::compute(self.lines.values(), self.coupon_percent)
    }

    /// Whether the cart has changes not yet saved to the session.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}
