//! Payment Errors

use salvo::http::StatusError;
use tracing::error;

use trolley_app::domain::orders::OrdersServiceError;

pub(crate) fn into_status_error(error: OrdersServiceError) -> StatusError {
    match error {
        OrdersServiceError::NotFound(_) => StatusError::not_found().brief("Order not found"),
        OrdersServiceError::Session(source) => {
            error!("failed to read cart from session: {source}");

            StatusError::internal_server_error()
        }
    }
}
