//! Apply Coupon Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{carts::errors::into_status_error, extensions::*, state::State};

/// Apply Coupon Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CouponApplyRequest {
    /// Coupon code, matched exactly
    pub coupon_code: String,
}

/// Apply Coupon Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CouponApplyResponse {
    /// Whether a non-zero coupon is now active
    pub success: bool,
}

/// Apply Coupon Handler
///
/// Unknown codes clear any active coupon and report `success: false`.
#[endpoint(
    tags("cart"),
    summary = "Apply Coupon",
    responses(
        (status_code = StatusCode::OK, description = "Coupon submitted"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CouponApplyRequest>,
    depot: &mut Depot,
) -> Result<Json<CouponApplyResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?.clone();
    let request = json.into_inner();
    let session = depot.session_mut_or_500()?;

    let success = state
        .app
        .carts
        .apply_coupon(session, &request.coupon_code)
        .await
        .map_err(into_status_error)?;

    Ok(Json(CouponApplyResponse { success }))
}
