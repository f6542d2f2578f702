//! Product Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{errors::ApiError, extensions::*, products::models::ProductResponse, state::State};

/// Product Index Handler
///
/// Returns every product.
#[endpoint(tags("productos"), summary = "List Products")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state
        .app
        .products
        .list_products()
        .await
        .or_500("failed to fetch products")?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::Value;
    use testresult::TestResult;

    use storefront_app::domain::products::{
        MockProductsService, ProductsServiceError, records::ProductUuid,
    };

    use crate::test_helpers::{make_product, products_service, store_failure};

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        products_service(products, Router::with_path("api/productos").get(handler))
    }

    #[tokio::test]
    async fn lists_all_products() -> TestResult {
        let a = make_product(ProductUuid::new());
        let b = make_product(ProductUuid::new());
        let expected = vec![a.uuid.to_string(), b.uuid.to_string()];

        let mut products = MockProductsService::new();

        products
            .expect_list_products()
            .once()
            .return_once(move || Ok(vec![a, b]));

        let mut res = TestClient::get("http://example.com/api/productos")
            .send(&make_service(products))
            .await;

        let body: Vec<ProductResponse> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(
            body.iter().map(|p| p.id.to_string()).collect::<Vec<_>>(),
            expected
        );

        Ok(())
    }

    #[tokio::test]
    async fn empty_store_returns_empty_list() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_list_products()
            .once()
            .return_once(|| Ok(Vec::new()));

        let mut res = TestClient::get("http://example.com/api/productos")
            .send(&make_service(products))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body, serde_json::json!([]));

        Ok(())
    }

    #[tokio::test]
    async fn store_failure_returns_generic_500() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_list_products()
            .once()
            .return_once(|| Err(ProductsServiceError::Sql(store_failure())));

        let mut res = TestClient::get("http://example.com/api/productos")
            .send(&make_service(products))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(body["error"], "internal server error");

        Ok(())
    }
}
