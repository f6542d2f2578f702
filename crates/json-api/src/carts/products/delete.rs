//! Remove Product From Cart Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use storefront_app::domain::{carts::records::CartUuid, products::records::ProductUuid};

use crate::{
    carts::errors::{NOT_REMOVED, into_remove_error},
    errors::ApiError,
    extensions::*,
    responses::SuccessResponse,
    state::State,
};

/// Remove Product From Cart Handler
///
/// Removes the first reference to the product. Other copies stay in the cart.
#[endpoint(
    tags("carrito"),
    summary = "Remove Product From Cart",
    responses(
        (status_code = StatusCode::OK, description = "Product removed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Product could not be removed"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "carts.products.delete",
    skip(id, id_prod, depot),
    fields(cart_uuid = tracing::field::Empty, product_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    id_prod: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<SuccessResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let cart: CartUuid = id.into_typed_uuid(ApiError::bad_request(NOT_REMOVED))?;
    let product: ProductUuid = id_prod.into_typed_uuid(ApiError::bad_request(NOT_REMOVED))?;

    let span = tracing::Span::current();

    span.record("cart_uuid", tracing::field::display(cart));
    span.record("product_uuid", tracing::field::display(product));

    state
        .app
        .cart_products
        .remove_product(cart, product)
        .await
        .map_err(into_remove_error)?;

    Ok(Json(SuccessResponse::new("product removed from the cart")))
}
