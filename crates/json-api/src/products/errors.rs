//! Store Errors

use salvo::http::StatusError;

use trolley_app::domain::products::ProductsServiceError;

pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::NotFound(_) => StatusError::not_found().brief("Product not found"),
    }
}
