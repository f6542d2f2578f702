//! Auth middleware.
//!
//! Compares the raw `Authorization` header value against the shared secret.

use std::sync::Arc;

use salvo::{http::header::AUTHORIZATION, prelude::*};
use tracing::warn;

use crate::{errors::ApiError, extensions::*, state::State};

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let Some(token) = extract_token(req) else {
        res.render(ApiError::unauthorized());
        ctrl.skip_rest();

        return;
    };

    let state = match depot.obtain_or_500::<Arc<State>>() {
        Ok(state) => state,
        Err(error) => {
            res.render(error);
            ctrl.skip_rest();

            return;
        }
    };

    if let Err(error) = state.app.auth.authenticate(token) {
        warn!(path = %req.uri().path(), "rejected request: {error}");

        res.render(ApiError::unauthorized());
        ctrl.skip_rest();

        return;
    }

    ctrl.call_next(req, depot, res).await;
}

fn extract_token(req: &Request) -> Option<&str> {
    req.headers().get(AUTHORIZATION)?.to_str().ok()
}

#[cfg(test)]
mod tests {
    use salvo::{
        affix_state::inject,
        test::{ResponseExt, TestClient},
    };
    use serde_json::Value;
    use testresult::TestResult;

    use storefront_app::auth::{AuthServiceError, MockAuthService};

    use crate::test_helpers::state_with_auth;

    use super::*;

    #[salvo::handler]
    async fn protected(res: &mut Response) {
        res.render("reached");
    }

    fn make_service(auth: MockAuthService) -> Service {
        let router = Router::new()
            .hoop(inject(state_with_auth(auth)))
            .hoop(handler)
            .push(Router::new().post(protected));

        Service::new(router)
    }

    #[tokio::test]
    async fn missing_authorization_header_returns_401() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate().never();

        let mut res = TestClient::post("http://example.com")
            .send(&make_service(auth))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));
        assert_eq!(body["error"], "unauthorized");

        Ok(())
    }

    #[tokio::test]
    async fn wrong_token_returns_401() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate()
            .once()
            .withf(|token| token == "wrong")
            .return_once(|_| Err(AuthServiceError::InvalidToken));

        let mut res = TestClient::post("http://example.com")
            .add_header(AUTHORIZATION, "wrong", true)
            .send(&make_service(auth))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));
        assert_eq!(body["error"], "unauthorized");

        Ok(())
    }

    #[tokio::test]
    async fn raw_header_value_is_compared() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate()
            .once()
            .withf(|token| token == "Bearer s3cret")
            .return_once(|_| Err(AuthServiceError::InvalidToken));

        let res = TestClient::post("http://example.com")
            .add_header(AUTHORIZATION, "Bearer s3cret", true)
            .send(&make_service(auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn matching_token_reaches_handler() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate()
            .once()
            .withf(|token| token == "s3cret")
            .return_once(|_| Ok(()));

        let mut res = TestClient::post("http://example.com")
            .add_header(AUTHORIZATION, "s3cret", true)
            .send(&make_service(auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(res.take_string().await?, "reached");

        Ok(())
    }
}
