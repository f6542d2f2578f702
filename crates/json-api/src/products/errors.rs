//! Product Errors

use tracing::debug;

use storefront_app::domain::products::ProductsServiceError;

use crate::errors::ApiError;

pub(crate) const PRODUCT_NOT_FOUND: &str = "product not found";
pub(crate) const INVALID_PRODUCT: &str = "some keys may be incorrect, please check the request body";
pub(crate) const UPDATE_REJECTED: &str = "product not found or invalid request body";

pub(crate) fn into_api_error(error: ProductsServiceError) -> ApiError {
    match error {
        ProductsServiceError::NotFound => ApiError::not_found(PRODUCT_NOT_FOUND),
        ProductsServiceError::AlreadyExists => {
            ApiError::bad_request("a product with this code already exists")
        }
        ProductsServiceError::Validation(source) => {
            ApiError::bad_request(format!("{INVALID_PRODUCT}: {source}"))
        }
        ProductsServiceError::MissingRequiredData | ProductsServiceError::InvalidData => {
            ApiError::bad_request(INVALID_PRODUCT)
        }
        ProductsServiceError::Sql(source) => ApiError::internal("product store failure", source),
    }
}

/// Updates answer 404 both for unknown products and rejected payloads.
pub(crate) fn into_update_error(error: ProductsServiceError) -> ApiError {
    match error {
        ProductsServiceError::Sql(source) => ApiError::internal("product store failure", source),
        rejected => {
            debug!("product update rejected: {rejected}");

            ApiError::not_found(UPDATE_REJECTED)
        }
    }
}
