//! Delete Cart Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    carts::errors::{CART_NOT_FOUND, into_delete_error},
    errors::ApiError,
    extensions::*,
    responses::SuccessResponse,
    state::State,
};

/// Delete Cart Handler
#[endpoint(
    tags("carrito"),
    summary = "Delete Cart",
    responses(
        (status_code = StatusCode::OK, description = "Cart deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "carts.delete",
    skip(id, depot),
    fields(cart_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<SuccessResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let cart = id.into_typed_uuid(ApiError::not_found(CART_NOT_FOUND))?;

    tracing::Span::current().record("cart_uuid", tracing::field::display(cart));

    state
        .app
        .carts
        .delete_cart(cart)
        .await
        .map_err(into_delete_error)?;

    Ok(Json(SuccessResponse::new("cart successfully removed")))
}
