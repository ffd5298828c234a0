//! Trolley prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{CART_SESSION_KEY, COUPON_SESSION_KEY, Cart, CartEntry, CartLine, CartTotals},
    catalog::Catalog,
    coupons::{Coupon, CouponBook, CouponLookup, CouponLookupError},
    fixtures::{Fixture, FixtureError},
    orders::{Order, OrderId, OrderItem, ShippingDetails},
    products::{Category, CategoryId, Product, ProductId, ProductLookup},
    receipt::{Receipt, ReceiptError},
    session::{Session, SessionError},
};
