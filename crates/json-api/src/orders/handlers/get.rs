//! Get Order Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use trolley::orders::{Order, OrderId, OrderItem};

use crate::{extensions::*, orders::errors::into_status_error, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderItemResponse {
    pub product_id: u64,
    pub quantity: u32,

    /// Unit price charged
    pub price: f64,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(item: OrderItem) -> Self {
        OrderItemResponse {
            product_id: item.product_id.get(),
            quantity: item.quantity,
            price: item.price.to_float(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderResponse {
    pub id: u64,
    pub title: String,
    pub full_name: String,
    pub email: String,
    pub shipping_address: String,
    pub amount_paid: f64,

    /// RFC 3339 timestamp
    pub placed_at: String,

    pub items: Vec<OrderItemResponse>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        OrderResponse {
            id: order.id.get(),
            title: order.title(),
            full_name: order.full_name,
            email: order.email,
            shipping_address: order.shipping_address,
            amount_paid: order.amount_paid.to_float(),
            placed_at: order.placed_at.to_string(),
            items: order.items.into_iter().map(Into::into).collect(),
        }
    }
}

/// Get Order Handler
///
/// Returns a placed order.
#[endpoint(
    tags("payments"),
    summary = "Get Order",
    responses(
        (status_code = StatusCode::OK, description = "Order"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<u64>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let order = state
        .app
        .orders
        .get_order(OrderId::new(id.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(Json(order.into()))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use trolley::products::ProductId;
    use trolley_app::domain::orders::{MockOrdersService, OrdersServiceError};

    use crate::test_helpers::{service, state_with_orders};

    use super::*;

    fn make_service(orders: MockOrdersService) -> Service {
        service(
            state_with_orders(orders),
            Router::with_path("payments/orders/{id}").get(handler),
        )
    }

    #[tokio::test]
    async fn test_get_order_returns_200() -> TestResult {
        let order = Order {
            id: OrderId::new(7),
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            shipping_address: "London".to_string(),
            amount_paid: Decimal::from_str_exact("18.00")?,
            placed_at: Timestamp::UNIX_EPOCH,
            items: vec![OrderItem {
                product_id: ProductId::new(3),
                quantity: 2,
                price: Decimal::from(10),
            }],
        };

        let mut orders = MockOrdersService::new();

        orders
            .expect_get_order()
            .once()
            .withf(|id| *id == OrderId::new(7))
            .return_once(move |_| Ok(order));

        orders.expect_checkout().never();
        orders.expect_complete_order().never();

        let mut res = TestClient::get("http://example.com/payments/orders/7")
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: OrderResponse = res.take_json().await?;

        assert_eq!(body.title, "Order - #7");
        assert_eq!(body.items.len(), 1);
        assert!((body.amount_paid - 18.0).abs() < f64::EPSILON);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_order_returns_404() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_get_order()
            .once()
            .return_once(|id| Err(OrdersServiceError::NotFound(id)));

        orders.expect_checkout().never();
        orders.expect_complete_order().never();

        let res = TestClient::get("http://example.com/payments/orders/3")
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
