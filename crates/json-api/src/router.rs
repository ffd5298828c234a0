//! API Router

use salvo::Router;

use crate::{carts, orders, products, sessions};

/// Routes under `/api`, all behind the session middleware.
pub(crate) fn api_router() -> Router {
    Router::with_path("api")
        .hoop(sessions::middleware::handler)
        .push(
            Router::with_path("cart")
                .push(Router::with_path("update").post(carts::update::handler))
                .push(Router::with_path("delete").post(carts::delete::handler))
                .push(Router::with_path("apply-coupon").post(carts::apply_coupon::handler))
                .push(Router::with_path("items").get(carts::items::handler)),
        )
        .push(
            Router::with_path("store")
                .push(
                    Router::with_path("products")
                        .get(products::index::handler)
                        .push(Router::with_path("{id}").get(products::get::handler)),
                )
                .push(Router::with_path("categories").get(products::categories::handler)),
        )
        .push(
            Router::with_path("payments")
                .push(Router::with_path("checkout").get(orders::checkout::handler))
                .push(Router::with_path("complete-order").post(orders::complete::handler))
                .push(Router::with_path("orders/{id}").get(orders::get::handler)),
        )
}

#[cfg(test)]
mod tests {
    use salvo::{
        affix_state::inject,
        http::header::COOKIE,
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use serde_json::{Value, json};
    use testresult::TestResult;

    use crate::test_helpers::{fixture_state, session_cookie};

    use super::*;

    fn make_service() -> TestResult<Service> {
        let router = Router::new()
            .hoop(inject(fixture_state()?))
            .push(api_router());

        Ok(Service::new(router))
    }

    fn number(body: &Value, field: &str) -> TestResult<f64> {
        let value = body
            .get(field)
            .and_then(Value::as_f64)
            .ok_or(format!("missing {field}"))?;

        Ok(value)
    }

    #[tokio::test]
    async fn test_cart_survives_across_requests() -> TestResult {
        let service = make_service()?;

        let mut res = TestClient::post("http://example.com/api/cart/update")
            .json(&json!({ "product_id": 3, "product_qty": 2, "action": "post" }))
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let cookie = session_cookie(&res).ok_or("Expected session cookie")?;
        let body: Value = res.take_json().await?;

        assert_eq!(body.get("cart_qty"), Some(&json!(2)));
        assert!((number(&body, "product_qty")? - 20.0).abs() < f64::EPSILON);

        let mut res = TestClient::post("http://example.com/api/cart/apply-coupon")
            .add_header(COOKIE, &cookie, true)
            .json(&json!({ "coupon_code": "DISCOUNT10" }))
            .send(&service)
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(body.get("success"), Some(&json!(true)));

        let mut res = TestClient::get("http://example.com/api/cart/items")
            .add_header(COOKIE, &cookie, true)
            .send(&service)
            .await;

        let body: Value = res.take_json().await?;
        let items = body
            .get("items")
            .and_then(Value::as_array)
            .ok_or("Expected items")?;

        assert_eq!(items.len(), 1);
        assert_eq!(body.get("cart_qty"), Some(&json!(2)));
        assert!((number(&body, "total")? - 18.0).abs() < f64::EPSILON);

        let mut res = TestClient::get("http://example.com/api/payments/checkout")
            .add_header(COOKIE, &cookie, true)
            .send(&service)
            .await;

        let body: Value = res.take_json().await?;

        assert!((number(&body, "total")? - 20.0).abs() < f64::EPSILON);
        assert!((number(&body, "savings")? - 2.0).abs() < f64::EPSILON);
        assert!((number(&body, "discount_total")? - 18.0).abs() < f64::EPSILON);

        let res = TestClient::post("http://example.com/api/payments/complete-order")
            .add_header(COOKIE, &cookie, true)
            .json(&json!({
                "fn": "Ada",
                "sn": "Lovelace",
                "em": "ada@example.com",
                "ad1": "12 St James's Square",
                "ct": "London",
                "st": "",
                "cntry": "GB",
                "zip": "SW1Y 4JH",
            }))
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let mut res = TestClient::get("http://example.com/api/payments/orders/1")
            .send(&service)
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(body.get("full_name"), Some(&json!("Ada Lovelace")));
        assert!((number(&body, "amount_paid")? - 18.0).abs() < f64::EPSILON);

        Ok(())
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() -> TestResult {
        let service = make_service()?;

        let res = TestClient::post("http://example.com/api/cart/update")
            .json(&json!({ "product_id": 1, "product_qty": 1 }))
            .send(&service)
            .await;

        assert!(session_cookie(&res).is_some());

        let mut res = TestClient::get("http://example.com/api/cart/items")
            .send(&service)
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(body.get("items"), Some(&json!([])));
        assert_eq!(body.get("cart_qty"), Some(&json!(0)));

        Ok(())
    }

    #[tokio::test]
    async fn test_store_routes_serve_fixture_catalog() -> TestResult {
        let service = make_service()?;

        let mut res = TestClient::get("http://example.com/api/store/products")
            .send(&service)
            .await;

        let products: Vec<Value> = res.take_json().await?;

        assert_eq!(products.len(), 6);

        let mut res = TestClient::get("http://example.com/api/store/products/4")
            .send(&service)
            .await;

        let product: Value = res.take_json().await?;

        assert_eq!(product.get("discount"), Some(&json!(33)));

        let mut res = TestClient::get("http://example.com/api/store/categories")
            .send(&service)
            .await;

        let categories: Vec<Value> = res.take_json().await?;
        let names: Vec<&str> = categories
            .iter()
            .filter_map(|category| category.get("name").and_then(Value::as_str))
            .collect();

        assert_eq!(names, vec!["Accessories", "Brewing", "Coffee"]);

        let res = TestClient::get("http://example.com/api/store/products/404")
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
