//! Create Cart Handler

use std::sync::Arc;

use salvo::prelude::*;
use tracing::info;

use crate::{
    carts::errors::into_create_error, errors::ApiError, extensions::*,
    responses::SuccessResponse, state::State,
};

/// Create Cart Handler
///
/// Creates an empty cart. Takes no body.
#[endpoint(
    tags("carrito"),
    summary = "Create Cart",
    responses(
        (status_code = StatusCode::OK, description = "Cart created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Cart could not be created"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "carts.create", skip(depot), err)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<SuccessResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let cart = state
        .app
        .carts
        .create_cart()
        .await
        .map_err(into_create_error)?;

    info!(cart_uuid = %cart.uuid, "created cart");

    Ok(Json(SuccessResponse::created(
        "cart added with ID",
        cart.uuid.into_uuid(),
    )))
}
