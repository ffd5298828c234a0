//! Errors

use salvo::http::StatusError;
use tracing::error;

use trolley_app::domain::carts::CartsServiceError;

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::ProductNotFound(_) => {
            StatusError::not_found().brief("Product not found")
        }
        CartsServiceError::Session(source) => {
            error!("failed to read cart from session: {source}");

            StatusError::internal_server_error()
        }
    }
}
