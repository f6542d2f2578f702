//! Cart Errors
//!
//! Each cart route folds the service failures into its own client-facing
//! message. Storage failures are always a 500.

use tracing::debug;

use storefront_app::domain::carts::CartsServiceError;

use crate::errors::ApiError;

pub(crate) const CART_NOT_FOUND: &str = "cart not found";
pub(crate) const CART_NOT_CREATED: &str = "could not create the cart, please try again later";
pub(crate) const CART_EMPTY: &str = "cart has no products";
pub(crate) const INVALID_REFERENCES: &str = "the cart id or the product id may be invalid";
pub(crate) const NOT_REMOVED: &str = "could not remove the product from the cart";

/// Route the failure to a 500 for storage errors, otherwise to `rejection`.
fn rejected_or_500(error: CartsServiceError, rejection: ApiError) -> ApiError {
    match error {
        CartsServiceError::Sql(source) => ApiError::internal("cart store failure", source),
        rejected => {
            debug!("cart request rejected: {rejected}");

            rejection
        }
    }
}

pub(crate) fn into_create_error(error: CartsServiceError) -> ApiError {
    rejected_or_500(error, ApiError::bad_request(CART_NOT_CREATED))
}

pub(crate) fn into_delete_error(error: CartsServiceError) -> ApiError {
    rejected_or_500(error, ApiError::not_found(CART_NOT_FOUND))
}

pub(crate) fn into_add_error(error: CartsServiceError) -> ApiError {
    rejected_or_500(error, ApiError::bad_request(INVALID_REFERENCES))
}

pub(crate) fn into_remove_error(error: CartsServiceError) -> ApiError {
    rejected_or_500(error, ApiError::bad_request(NOT_REMOVED))
}

pub(crate) fn into_list_error(error: CartsServiceError) -> ApiError {
    rejected_or_500(error, ApiError::not_found(CART_NOT_FOUND))
}
