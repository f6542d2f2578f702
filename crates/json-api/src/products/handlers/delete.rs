//! Delete Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    errors::ApiError,
    extensions::*,
    products::errors::{PRODUCT_NOT_FOUND, into_api_error},
    responses::SuccessResponse,
    state::State,
};

/// Delete Product Handler
#[endpoint(
    tags("productos"),
    summary = "Delete Product",
    security(("api_token" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Product deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing or wrong token"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.delete",
    skip(id, depot),
    fields(product_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<SuccessResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = id.into_typed_uuid(ApiError::not_found(PRODUCT_NOT_FOUND))?;

    tracing::Span::current().record("product_uuid", tracing::field::display(product));

    state
        .app
        .products
        .delete_product(product)
        .await
        .map_err(into_api_error)?;

    Ok(Json(SuccessResponse::new("product successfully removed")))
}
