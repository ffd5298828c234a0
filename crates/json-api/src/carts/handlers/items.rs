//! Cart Items Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use trolley::cart::CartEntry;
use trolley_app::domain::carts::models::CartListing;

use crate::{carts::errors::into_status_error, extensions::*, state::State};

/// Cart Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartItemResponse {
    pub product_id: u64,
    pub name: String,
    pub qty: u32,

    /// Unit price captured when the product was added
    pub price: f64,

    pub slug: String,
}

impl CartItemResponse {
    /// Lines whose product has left the catalog have no name or slug to show.
    fn from_entry(entry: CartEntry) -> Option<Self> {
        let product = entry.product?;

        Some(CartItemResponse {
            product_id: entry.product_id.get(),
            name: product.name,
            qty: entry.quantity,
            price: entry.unit_price.to_float(),
            slug: product.slug,
        })
    }
}

/// Cart List Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartListResponse {
    pub items: Vec<CartItemResponse>,

    /// Total quantity across all lines
    pub cart_qty: u64,

    /// Cart total after product discounts and coupon
    pub total: f64,
}

impl From<CartListing> for CartListResponse {
    fn from(listing: CartListing) -> Self {
        CartListResponse {
            items: listing
                .items
                .into_iter()
                .filter_map(CartItemResponse::from_entry)
                .collect(),
            cart_qty: listing.count,
            total: listing.totals.discount_total.to_float(),
        }
    }
}

/// Cart Items Handler
#[endpoint(
    tags("cart"),
    summary = "List Cart Items",
    responses(
        (status_code = StatusCode::OK, description = "Cart contents"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CartListResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?.clone();
    let session = depot.session_or_500()?;

    let listing = state
        .app
        .carts
        .list(session)
        .await
        .map_err(into_status_error)?;

    Ok(Json(listing.into()))
}
