//! Checkout Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use trolley::cart::CartEntry;
use trolley_app::domain::carts::models::CartListing;

use crate::{
    extensions::*,
    orders::{countries::COUNTRIES, errors::into_status_error},
    state::State,
};

/// Checkout Line Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckoutLineResponse {
    pub product_id: u64,

    /// Product name, absent if the product has left the catalog
    pub name: Option<String>,

    pub slug: Option<String>,
    pub qty: u32,

    /// Unit price captured when the product was added
    pub price: f64,

    /// Current product discount, in percent
    pub discount: f64,

    pub line_total: f64,
}

impl From<CartEntry> for CheckoutLineResponse {
    fn from(entry: CartEntry) -> Self {
        let (name, slug) = entry
            .product
            .map(|product| (product.name, product.slug))
            .unzip();

        CheckoutLineResponse {
            product_id: entry.product_id.get(),
            name,
            slug,
            qty: entry.quantity,
            price: entry.unit_price.to_float(),
            discount: entry.discount_percent.to_float(),
            line_total: entry.line_total.to_float(),
        }
    }
}

/// Checkout Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckoutResponse {
    /// Shipping destinations as `[code, name]` pairs
    pub countries: Vec<[String; 2]>,

    pub cart: Vec<CheckoutLineResponse>,

    /// Sum of line totals before discounts
    pub total: f64,

    pub savings: f64,

    /// Amount payable
    pub discount_total: f64,
}

impl From<CartListing> for CheckoutResponse {
    fn from(listing: CartListing) -> Self {
        CheckoutResponse {
            countries: COUNTRIES
                .iter()
                .map(|(code, name)| [(*code).to_string(), (*name).to_string()])
                .collect(),
            cart: listing.items.into_iter().map(Into::into).collect(),
            total: listing.totals.total.to_float(),
            savings: listing.totals.savings.to_float(),
            discount_total: listing.totals.discount_total.to_float(),
        }
    }
}

/// Checkout Handler
///
/// Prices the session's cart for the checkout page.
#[endpoint(
    tags("payments"),
    summary = "Checkout",
    responses(
        (status_code = StatusCode::OK, description = "Priced cart"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CheckoutResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?.clone();
    let session = depot.session_or_500()?;

    let listing = state
        .app
        .orders
        .checkout(session)
        .await
        .map_err(into_status_error)?;

    Ok(Json(listing.into()))
}
