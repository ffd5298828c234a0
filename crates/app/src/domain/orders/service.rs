//! Orders service.

use std::{collections::BTreeMap, sync::Arc};

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tokio::sync::RwLock;
use tracing::{Span, info};
use trolley::{
    cart::Cart,
    orders::{Order, OrderId, ShippingDetails},
    products::ProductLookup,
    session::Session,
};

use crate::domain::{carts::models::CartListing, orders::errors::OrdersServiceError};

/// Orders kept in process memory, numbered from 1.
pub struct MemoryOrdersService {
    products: Arc<dyn ProductLookup + Send + Sync>,
    orders: RwLock<BTreeMap<OrderId, Order>>,
}

impl MemoryOrdersService {
    #[must_use]
    pub fn new(products: Arc<dyn ProductLookup + Send + Sync>) -> Self {
        Self {
            products,
            orders: RwLock::new(BTreeMap::new()),
        }
    }
}

#[async_trait]
impl OrdersService for MemoryOrdersService {
    async fn checkout(&self, session: &Session) -> Result<CartListing, OrdersServiceError> {
        let cart = Cart::load(session)?;

        Ok(CartListing::from_cart(&cart, &*self.products))
    }

    #[tracing::instrument(
        name = "orders.service.complete_order",
        skip(self, session, shipping),
        fields(order_id = tracing::field::Empty, item_count = tracing::field::Empty),
        err
    )]
    async fn complete_order(
        &self,
        session: &Session,
        shipping: ShippingDetails,
    ) -> Result<Order, OrdersServiceError> {
        let cart = Cart::load(session)?;
        let totals = cart.totals();

        let mut orders = self.orders.write().await;

        let next = orders.keys().next_back().map_or(1, |id| id.get() + 1);

        let order = Order::place(
            OrderId::new(next),
            &shipping,
            cart.entries(&*self.products),
            &totals,
            Timestamp::now(),
        );

        orders.insert(order.id, order.clone());

        let span = Span::current();

        span.record("order_id", next);
        span.record("item_count", order.items.len());

        info!(amount_paid = %order.amount_paid, "order placed");

        Ok(order)
    }

    async fn get_order(&self, order_id: OrderId) -> Result<Order, OrdersServiceError> {
        self.orders
            .read()
            .await
            .get(&order_id)
            .cloned()
            .ok_or(OrdersServiceError::NotFound(order_id))
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Price the session's cart for the checkout page.
    async fn checkout(&self, session: &Session) -> Result<CartListing, OrdersServiceError>;

    /// Turn the session's cart into a stored order. The cart is left as is.
    async fn complete_order(
        &self,
        session: &Session,
        shipping: ShippingDetails,
    ) -> Result<Order, OrdersServiceError>;

    /// Retrieve a placed order.
    async fn get_order(&self, order_id: OrderId) -> Result<Order, OrdersServiceError>;
}
