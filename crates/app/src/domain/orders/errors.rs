//! Orders service errors.

use thiserror::Error;
use trolley::{orders::OrderId, session::SessionError};

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    #[error("order {} not found", .0.get())]
    NotFound(OrderId),

    #[error("session data error")]
    Session(#[from] SessionError),
}
