//! Add Product To Cart Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use storefront_app::domain::products::records::ProductUuid;

use crate::{
    carts::errors::{INVALID_REFERENCES, into_add_error},
    errors::ApiError,
    extensions::*,
    responses::SuccessResponse,
    state::State,
};

const MISSING_KEY: &str = "the key MUST be 'productId', please verify.";

/// Add Product Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddProductRequest {
    /// Identity of the product to add
    #[serde(rename = "productId")]
    #[salvo(schema(value_type = Option<String>))]
    pub product_id: Option<Value>,
}

impl AddProductRequest {
    /// Only the presence of the key is checked here; the value is validated
    /// as an identity afterwards.
    fn into_product_uuid(self) -> Result<ProductUuid, ApiError> {
        match self.product_id.ok_or_else(|| ApiError::bad_request(MISSING_KEY))? {
            Value::String(raw) => raw.parse().map_err(|source| {
                debug!("rejected product id: {source}");

                ApiError::bad_request(INVALID_REFERENCES)
            }),
            _ => Err(ApiError::bad_request(INVALID_REFERENCES)),
        }
    }
}

/// Add Product To Cart Handler
///
/// Appends a product reference. Adding the same product twice keeps both.
#[endpoint(
    tags("carrito"),
    summary = "Add Product To Cart",
    responses(
        (status_code = StatusCode::OK, description = "Product added"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing key or invalid ids"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "carts.products.create",
    skip(id, req, depot),
    fields(cart_uuid = tracing::field::Empty, product_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<SuccessResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    // Non-JSON bodies count as a missing key.
    let request = req
        .parse_json::<AddProductRequest>()
        .await
        .unwrap_or_default();

    let product = request.into_product_uuid()?;
    let cart = id.into_typed_uuid(ApiError::bad_request(INVALID_REFERENCES))?;

    let span = tracing::Span::current();

    span.record("cart_uuid", tracing::field::display(cart));
    span.record("product_uuid", tracing::field::display(product));

    state
        .app
        .cart_products
        .add_product(cart, product)
        .await
        .map_err(into_add_error)?;

    Ok(Json(SuccessResponse::new("Product added correctly to the Cart")))
}
