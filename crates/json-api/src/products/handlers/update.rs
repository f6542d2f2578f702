//! Update Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use tracing::debug;

use crate::{
    errors::ApiError,
    extensions::*,
    products::{
        errors::{UPDATE_REJECTED, into_update_error},
        models::UpdateProductRequest,
    },
    responses::SuccessResponse,
    state::State,
};

/// Update Product Handler
///
/// Applies the fields present in the body. Unknown products, malformed ids and
/// rejected bodies all answer 404.
#[endpoint(
    tags("productos"),
    summary = "Update Product",
    security(("api_token" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found or invalid body"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing or wrong token"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.update",
    skip(id, req, depot),
    fields(product_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<SuccessResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = id.into_typed_uuid(ApiError::not_found(UPDATE_REJECTED))?;

    tracing::Span::current().record("product_uuid", tracing::field::display(product));

    let request: UpdateProductRequest = req
        .parse_json()
        .await
        .map_err(|source| {
            debug!("rejected product update body: {source}");

            ApiError::not_found(UPDATE_REJECTED)
        })?;

    state
        .app
        .products
        .update_product(product, request.into())
        .await
        .map_err(into_update_error)?;

    Ok(Json(SuccessResponse::new("product updated")))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use storefront_app::domain::products::{
        MockProductsService, ProductsServiceError, data::ProductUpdate, records::ProductUuid,
        validation::ValidationError,
    };

    use crate::test_helpers::{make_product, products_service, store_failure};

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        products_service(products, Router::with_path("api/productos/{id}").put(handler))
    }

    #[tokio::test]
    async fn applies_only_supplied_fields() -> TestResult {
        let uuid = ProductUuid::new();
        let product = make_product(uuid);

        let mut products = MockProductsService::new();

        products
            .expect_update_product()
            .once()
            .withf(move |u, update| {
                *u == uuid
                    && *update
                        == ProductUpdate {
                            stock: Some(5),
                            ..ProductUpdate::default()
                        }
            })
            .return_once(move |_, _| Ok(product));

        let mut res = TestClient::put(format!("http://example.com/api/productos/{uuid}"))
            .json(&json!({ "stock": 5 }))
            .send(&make_service(products))
            .await;

        let body: SuccessResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.success, "product updated");
        assert_eq!(body.id, None);

        Ok(())
    }

    #[tokio::test]
    async fn null_image_is_forwarded_as_removal() -> TestResult {
        let uuid = ProductUuid::new();
        let product = make_product(uuid);

        let mut products = MockProductsService::new();

        products
            .expect_update_product()
            .once()
            .withf(|_, update| update.image == Some(None))
            .return_once(move |_, _| Ok(product));

        let res = TestClient::put(format!("http://example.com/api/productos/{uuid}"))
            .json(&json!({ "image": null }))
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn unknown_product_returns_404() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_update_product()
            .once()
            .return_once(|_, _| Err(ProductsServiceError::NotFound));

        let mut res = TestClient::put(format!(
            "http://example.com/api/productos/{}",
            ProductUuid::new()
        ))
        .json(&json!({ "stock": 5 }))
        .send(&make_service(products))
        .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body["error"], UPDATE_REJECTED);

        Ok(())
    }

    #[tokio::test]
    async fn rejected_payload_returns_404() -> TestResult {
        let mut products = MockProductsService::new();

        products.expect_update_product().once().return_once(|_, _| {
            Err(ProductsServiceError::Validation(ValidationError::Required {
                field: "title",
            }))
        });

        let res = TestClient::put(format!(
            "http://example.com/api/productos/{}",
            ProductUuid::new()
        ))
        .json(&json!({ "title": "" }))
        .send(&make_service(products))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn malformed_body_returns_404_without_store_call() -> TestResult {
        let mut products = MockProductsService::new();

        products.expect_update_product().never();

        let res = TestClient::put(format!(
            "http://example.com/api/productos/{}",
            ProductUuid::new()
        ))
        .json(&json!({ "stock": "plenty" }))
        .send(&make_service(products))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn malformed_id_returns_404() -> TestResult {
        let mut products = MockProductsService::new();

        products.expect_update_product().never();

        let res = TestClient::put("http://example.com/api/productos/42")
            .json(&json!({ "stock": 5 }))
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn store_failure_returns_500() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_update_product()
            .once()
            .return_once(|_, _| Err(ProductsServiceError::Sql(store_failure())));

        let res = TestClient::put(format!(
            "http://example.com/api/productos/{}",
            ProductUuid::new()
        ))
        .json(&json!({ "stock": 5 }))
        .send(&make_service(products))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
