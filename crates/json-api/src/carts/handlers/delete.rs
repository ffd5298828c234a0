//! Delete Cart Line Handler

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

/// Delete Cart Line Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartDeleteRequest {
    /// Product to remove
    pub product_id: u64,

    /// Client-side action label, accepted and ignored
    #[serde(default)]
    pub action: Option<String>,
}

/// Delete Cart Line Handler
///
/// Removes a product from the cart. Products not in the cart are ignored.
#[endpoint(
    tags("cart"),
    summary = "Remove Cart Line",
    responses(
        (status_code = StatusCode::OK, description = "Cart updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CartDeleteRequest>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?.clone();
    let request = json.into_inner();
    let session = depot.session_mut_or_500()?;

    let summary = state
        .app
        .carts
        .remove(session, ProductId::new(request.product_id))
        .await
        .map_err(into_status_error)?;

    Ok(Json(summary.into()))
}
