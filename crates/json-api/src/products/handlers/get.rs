//! Get Product Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use trolley::products::{CategoryId, Product, ProductId};

use crate::{extensions::*, products::errors::into_status_error, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    pub id: u64,
    pub name: String,
    pub brand: String,
    pub description: String,
    pub slug: String,

    /// Category id, if the product is categorised
    pub category: Option<u64>,

    /// List price
    pub price: f64,

    /// Product discount, in whole percent
    pub discount: u8,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        ProductResponse {
            id: product.id.get(),
            name: product.name,
            brand: product.brand,
            description: product.description,
            slug: product.slug,
            category: product.category.map(CategoryId::get),
            price: product.price.to_float(),
            discount: product.discount_percent,
        }
    }
}

/// Get Product Handler
///
/// Returns a product.
#[endpoint(
    tags("store"),
    summary = "Get Product",
    responses(
        (status_code = StatusCode::OK, description = "Product"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<u64>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state
        .app
        .products
        .get_product(ProductId::new(id.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}
