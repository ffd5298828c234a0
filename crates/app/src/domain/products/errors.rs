//! Products service errors.

use thiserror::Error;
use trolley::products::ProductId;

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error("product {0} not found")]
    NotFound(ProductId),
}
