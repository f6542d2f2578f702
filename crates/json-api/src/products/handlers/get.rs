//! Get Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    errors::ApiError,
    extensions::*,
    products::{errors::into_api_error, models::ProductResponse},
    state::State,
};

/// Get Product Handler
///
/// Returns a product. A malformed id is a bad request, not a missing product.
#[endpoint(tags("productos"), summary = "Get Product")]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = id.into_typed_uuid(ApiError::bad_request("malformed product id"))?;

    let product = state
        .app
        .products
        .get_product(product)
        .await
        .map_err(into_api_error)?;

    Ok(Json(product.into()))
}
