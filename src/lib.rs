//! Trolley
//!
//! Trolley is a session-backed shopping cart and pricing engine. Carts live in
//! a per-visitor [`session::Session`], snapshot product prices when lines are
//! added, and price themselves with product discounts and an optional coupon.

pub mod cart;
pub mod catalog;
pub mod coupons;
pub mod fixtures;
pub mod orders;
pub mod prelude;
pub mod products;
pub mod receipt;
pub mod session;
pub mod utils;
