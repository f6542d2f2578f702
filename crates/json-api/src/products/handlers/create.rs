//! Create Product Handler

use std::sync::Arc;

use salvo::prelude::*;
use tracing::{field, info};

use crate::{
    errors::ApiError,
    extensions::*,
    products::{
        errors::{INVALID_PRODUCT, into_api_error},
        models::CreateProductRequest,
    },
    responses::SuccessResponse,
    state::State,
};

/// Create Product Handler
#[endpoint(
    tags("productos"),
    summary = "Create Product",
    security(("api_token" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Product created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid body or duplicate code"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing or wrong token"),
    ),
)]
#[tracing::instrument(
    name = "products.create",
    skip(req, depot),
    fields(product_uuid = field::Empty, code = field::Empty),
    err
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<SuccessResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let request: CreateProductRequest = req
        .parse_json()
        .await
        .map_err(|error| ApiError::bad_request(format!("{INVALID_PRODUCT}: {error}")))?;

    let span = tracing::Span::current();

    span.record("code", field::display(&request.code));

    let product = state
        .app
        .products
        .create_product(request.into())
        .await
        .map_err(into_api_error)?;

    span.record("product_uuid", field::display(product.uuid));

    info!(product_uuid = %product.uuid, "created product");

    Ok(Json(SuccessResponse::created(
        "product added with ID",
        product.uuid.into_uuid(),
    )))
}
