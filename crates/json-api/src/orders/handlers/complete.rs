//! Complete Order Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use trolley::orders::ShippingDetails;

use crate::{extensions::*, state::State};

/// Complete Order Request
///
/// Field names are the abbreviated ones the storefront form posts.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CompleteOrderRequest {
    #[serde(rename = "fn")]
    pub first_name: String,

    #[serde(rename = "sn")]
    pub surname: String,

    #[serde(rename = "em")]
    pub email: String,

    #[serde(rename = "ad1")]
    pub address1: String,

    #[serde(rename = "ad2", default)]
    pub address2: Option<String>,

    #[serde(rename = "ct")]
    pub city: String,

    #[serde(rename = "st")]
    pub state: String,

    #[serde(rename = "cntry")]
    pub country: String,

    pub zip: String,
}

impl From<CompleteOrderRequest> for ShippingDetails {
    fn from(request: CompleteOrderRequest) -> Self {
        ShippingDetails {
            first_name: request.first_name,
            surname: request.surname,
            email: request.email,
            address1: request.address1,
            address2: request.address2,
            city: request.city,
            state: request.state,
            country: request.country,
            zipcode: request.zip,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct MessageResponse {
    pub detail: String,
}

impl MessageResponse {
    fn new(detail: &str) -> Self {
        MessageResponse {
            detail: detail.to_string(),
        }
    }
}

/// Complete Order Handler
///
/// Turns the session's cart into an order. Failures are reported with a 500
/// and a `detail` message rather than an empty error body.
#[endpoint(
    tags("payments"),
    summary = "Complete Order",
    responses(
        (status_code = StatusCode::OK, description = "Order created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Order creation failed"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CompleteOrderRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<MessageResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?.clone();
    let session = depot.session_or_500()?;

    match state
        .app
        .orders
        .complete_order(session, json.into_inner().into())
        .await
    {
        Ok(order) => {
            info!(order = order.id.get(), "order created");

            Ok(Json(MessageResponse::new("Order created successfully")))
        }
        Err(source) => {
            error!("failed to create order: {source}");

            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);

            Ok(Json(MessageResponse::new("Order creation failed")))
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use trolley::{
        orders::{Order, OrderId},
        session::SessionError,
    };
    use trolley_app::domain::orders::{MockOrdersService, OrdersServiceError};

    use crate::test_helpers::{service, session_cookie, state_with_orders};

    use super::*;

    fn make_service(orders: MockOrdersService) -> Service {
        service(
            state_with_orders(orders),
            Router::with_path("payments/complete-order").post(handler),
        )
    }

    fn form() -> Value {
        json!({
            "fn": "Ada",
            "sn": "Lovelace",
            "em": "ada@example.com",
            "ad1": "12 St James's Square",
            "ct": "London",
            "st": "",
            "cntry": "GB",
            "zip": "SW1Y 4JH",
        })
    }

    #[tokio::test]
    async fn test_complete_order_returns_200() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_complete_order()
            .once()
            .withf(|_, shipping| {
                shipping.full_name() == "Ada Lovelace"
                    && shipping.address2.is_none()
                    && shipping.zipcode == "SW1Y 4JH"
            })
            .return_once(|_, shipping| {
                Ok(Order {
                    id: OrderId::new(1),
                    full_name: shipping.full_name(),
                    email: shipping.email.clone(),
                    shipping_address: shipping.shipping_address(),
                    amount_paid: Decimal::ZERO,
                    placed_at: Timestamp::UNIX_EPOCH,
                    items: vec![],
                })
            });

        orders.expect_checkout().never();
        orders.expect_get_order().never();

        let mut res = TestClient::post("http://example.com/payments/complete-order")
            .json(&form())
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(session_cookie(&res).is_none());

        let body: MessageResponse = res.take_json().await?;

        assert_eq!(body.detail, "Order created successfully");

        Ok(())
    }

    #[tokio::test]
    async fn test_complete_order_failure_returns_500_with_detail() -> TestResult {
        let source = serde_json::from_str::<u32>("[]")
            .err()
            .ok_or("Expected decode error")?;

        let error = OrdersServiceError::Session(SessionError::Decode {
            key: "cart".to_string(),
            source,
        });

        let mut orders = MockOrdersService::new();

        orders
            .expect_complete_order()
            .once()
            .return_once(move |_, _| Err(error));

        orders.expect_checkout().never();
        orders.expect_get_order().never();

        let mut res = TestClient::post("http://example.com/payments/complete-order")
            .json(&form())
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        let body: MessageResponse = res.take_json().await?;

        assert_eq!(body.detail, "Order creation failed");

        Ok(())
    }

    #[tokio::test]
    async fn test_complete_order_missing_field_returns_400() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders.expect_complete_order().never();
        orders.expect_checkout().never();
        orders.expect_get_order().never();

        let res = TestClient::post("http://example.com/payments/complete-order")
            .json(&json!({ "fn": "Ada" }))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
