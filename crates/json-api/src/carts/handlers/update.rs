//! Update Cart Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use trolley::products::ProductId;

use crate::{
    carts::{errors::into_status_error, handlers::CartResponse},
    extensions::*,
    state::State,
};

/// Update Cart Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartUpdateRequest {
    /// Product to add or update
    pub product_id: u64,

    /// New quantity for the line
    pub product_qty: u32,

    /// Client-side action label, accepted and ignored
    #[serde(default)]
    pub action: Option<String>,
}

/// Update Cart Handler
///
/// Adds the product to the cart, or replaces its quantity if it is already there.
#[endpoint(
    tags("cart"),
    summary = "Add or Update Cart Line",
    responses(
        (status_code = StatusCode::OK, description = "Cart updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CartUpdateRequest>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?.clone();
    let request = json.into_inner();
    let session = depot.session_mut_or_500()?;

    let summary = state
        .app
        .carts
        .set_quantity(session, ProductId::new(request.product_id), request.product_qty)
        .await
        .map_err(into_status_error)?;

    Ok(Json(summary.into()))
}
