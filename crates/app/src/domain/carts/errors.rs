//! Carts service errors.

use thiserror::Error;
use trolley::{products::ProductId, session::SessionError};

#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error("product {0} not found")]
    ProductNotFound(ProductId),

    #[error("session data error")]
    Session(#[from] SessionError),
}
