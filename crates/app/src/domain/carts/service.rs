//! Carts service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;
use trolley::{
    cart::Cart,
    coupons::CouponLookup,
    products::{ProductId, ProductLookup},
    session::Session,
};

use crate::domain::carts::{
    errors::CartsServiceError,
    models::{CartListing, CartSummary},
};

/// Carts stored in the caller's session, priced against a product and coupon lookup.
#[derive(Clone)]
pub struct SessionCartsService {
    products: Arc<dyn ProductLookup + Send + Sync>,
    coupons: Arc<dyn CouponLookup + Send + Sync>,
}

impl SessionCartsService {
    #[must_use]
    pub fn new(
        products: Arc<dyn ProductLookup + Send + Sync>,
        coupons: Arc<dyn CouponLookup + Send + Sync>,
    ) -> Self {
        Self { products, coupons }
    }
}

#[async_trait]
impl CartsService for SessionCartsService {
    #[tracing::instrument(name = "carts.service.set_quantity", skip(self, session), err)]
    async fn set_quantity(
        &self,
        session: &mut Session,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<CartSummary, CartsServiceError> {
        let product = self
            .products
            .product(product_id)
            .ok_or(CartsServiceError::ProductNotFound(product_id))?;

        let mut cart = Cart::load(session)?;

        cart.add_or_set(&product, quantity);
        cart.save(session)?;

        debug!(%product_id, quantity, "cart line set");

        Ok(CartSummary::from(&cart))
    }

    #[tracing::instrument(name = "carts.service.remove", skip(self, session), err)]
    async fn remove(
        &self,
        session: &mut Session,
        product_id: ProductId,
    ) -> Result<CartSummary, CartsServiceError> {
        let mut cart = Cart::load(session)?;

        cart.delete(product_id);
        cart.save(session)?;

        debug!(%product_id, "cart line removed");

        Ok(CartSummary::from(&cart))
    }

    #[tracing::instrument(name = "carts.service.apply_coupon", skip(self, session, code), err)]
    async fn apply_coupon(
        &self,
        session: &mut Session,
        code: &str,
    ) -> Result<bool, CartsServiceError> {
        let mut cart = Cart::load(session)?;

        let applied = cart.apply_coupon(&*self.coupons, code);

        cart.save(session)?;

        debug!(applied, "coupon submitted");

        Ok(applied)
    }

    #[tracing::instrument(name = "carts.service.list", skip(self, session), err)]
    async fn list(&self, session: &Session) -> Result<CartListing, CartsServiceError> {
        let cart = Cart::load(session)?;

        Ok(CartListing::from_cart(&cart, &*self.products))
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Add a product to the cart, or replace its quantity if already present.
    async fn set_quantity(
        &self,
        session: &mut Session,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<CartSummary, CartsServiceError>;

    /// Remove a product from the cart. Absent products are ignored.
    async fn remove(
        &self,
        session: &mut Session,
        product_id: ProductId,
    ) -> Result<CartSummary, CartsServiceError>;

    /// Apply a coupon code, returning whether a coupon is now active.
    async fn apply_coupon(
        &self,
        session: &mut Session,
        code: &str,
    ) -> Result<bool, CartsServiceError>;

    /// List cart lines with live product data.
    async fn list(&self, session: &Session) -> Result<CartListing, CartsServiceError>;
}
