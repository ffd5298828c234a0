//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};
use trolley_app::{
    context::{AppContext, AppInitError},
    domain::{
        carts::MockCartsService, orders::MockOrdersService, products::MockProductsService,
    },
    sessions::{DEFAULT_SESSION_TTL, MemorySessionStore, MockSessionStore},
};

use crate::{config::sessions::SessionConfig, sessions, state::State};

pub(crate) fn session_config() -> SessionConfig {
    SessionConfig {
        cookie_name: "sessionid".to_string(),
        ttl_seconds: 1_209_600,
        cookie_secure: false,
        purge_interval_seconds: 3_600,
    }
}

fn strict_carts_mock() -> MockCartsService {
    let mut carts = MockCartsService::new();

    carts.expect_set_quantity().never();
    carts.expect_remove().never();
    carts.expect_apply_coupon().never();
    carts.expect_list().never();

    carts
}

fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_get_product().never();
    products.expect_list_categories().never();

    products
}

fn strict_orders_mock() -> MockOrdersService {
    let mut orders = MockOrdersService::new();

    orders.expect_checkout().never();
    orders.expect_complete_order().never();
    orders.expect_get_order().never();

    orders
}

fn strict_context() -> AppContext {
    AppContext {
        carts: Arc::new(strict_carts_mock()),
        products: Arc::new(strict_products_mock()),
        orders: Arc::new(strict_orders_mock()),
        sessions: Arc::new(MemorySessionStore::new(DEFAULT_SESSION_TTL)),
    }
}

pub(crate) fn state_with_sessions(store: MockSessionStore) -> Arc<State> {
    let app = AppContext {
        sessions: Arc::new(store),
        ..strict_context()
    };

    State::from_app_context(app, session_config())
}

pub(crate) fn state_with_carts(carts: MockCartsService) -> Arc<State> {
    let app = AppContext {
        carts: Arc::new(carts),
        ..strict_context()
    };

    State::from_app_context(app, session_config())
}

pub(crate) fn state_with_products(products: MockProductsService) -> Arc<State> {
    let app = AppContext {
        products: Arc::new(products),
        ..strict_context()
    };

    State::from_app_context(app, session_config())
}

pub(crate) fn state_with_orders(orders: MockOrdersService) -> Arc<State> {
    let app = AppContext {
        orders: Arc::new(orders),
        ..strict_context()
    };

    State::from_app_context(app, session_config())
}

/// State backed by the default fixture set and an in-memory session store.
pub(crate) fn fixture_state() -> Result<Arc<State>, AppInitError> {
    let app = AppContext::from_fixture_set("../../fixtures", "default", DEFAULT_SESSION_TTL)?;

    Ok(State::from_app_context(app, session_config()))
}

/// Serve `route` behind the state and session middleware.
pub(crate) fn service(state: Arc<State>, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state))
            .hoop(sessions::middleware::handler)
            .push(route),
    )
}

/// The response's session cookie as a `name=value` request header value.
pub(crate) fn session_cookie(res: &Response) -> Option<String> {
    res.cookie("sessionid")
        .map(|cookie| format!("{}={}", cookie.name(), cookie.value()))
}
