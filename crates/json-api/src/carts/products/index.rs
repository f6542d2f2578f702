//! List Cart Products Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    carts::errors::{CART_EMPTY, CART_NOT_FOUND, into_list_error},
    errors::ApiError,
    extensions::*,
    products::models::ProductResponse,
    state::State,
};

/// List Cart Products Handler
///
/// Returns the cart's products in insertion order, repeating duplicates.
/// An empty cart is reported as 404.
#[endpoint(
    tags("carrito"),
    summary = "List Cart Products",
    responses(
        (status_code = StatusCode::OK, description = "Products in the cart"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found or empty"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let cart = id.into_typed_uuid(ApiError::not_found(CART_NOT_FOUND))?;

    let products = state
        .app
        .cart_products
        .list_products(cart)
        .await
        .map_err(into_list_error)?;

    if products.is_empty() {
        return Err(ApiError::not_found(CART_EMPTY));
    }

    Ok(Json(products.into_iter().map(Into::into).collect()))
}
