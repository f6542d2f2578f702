//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use storefront_app::{
    auth::MockAuthService,
    context::AppContext,
    domain::{
        cart_products::MockCartProductsService,
        carts::{
            MockCartsService,
            records::{CartRecord, CartUuid},
        },
        products::{
            MockProductsService,
            records::{ProductRecord, ProductUuid},
        },
    },
};

use crate::state::State;

pub(crate) const TEST_TOKEN: &str = "s3cret";

pub(crate) fn make_product(uuid: ProductUuid) -> ProductRecord {
    ProductRecord {
        uuid,
        title: "Pen".to_string(),
        description: "Blue pen".to_string(),
        price: 1.5,
        code: "PEN001".to_string(),
        image: None,
        stock: 100,
        timestamp: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_cart(uuid: CartUuid, products: Vec<ProductUuid>) -> CartRecord {
    CartRecord {
        uuid,
        products,
        created_at: Timestamp::UNIX_EPOCH,
    }
}

/// A database failure the services would surface as `Sql`.
pub(crate) fn store_failure() -> sqlx::Error {
    sqlx::Error::PoolClosed
}

fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_get_product().never();
    products.expect_create_product().never();
    products.expect_update_product().never();
    products.expect_delete_product().never();

    products
}

fn strict_carts_mock() -> MockCartsService {
    let mut carts = MockCartsService::new();

    carts.expect_create_cart().never();
    carts.expect_get_cart().never();
    carts.expect_delete_cart().never();

    carts
}

fn strict_cart_products_mock() -> MockCartProductsService {
    let mut cart_products = MockCartProductsService::new();

    cart_products.expect_add_product().never();
    cart_products.expect_remove_product().never();
    cart_products.expect_list_products().never();

    cart_products
}

/// Accepts exactly [`TEST_TOKEN`].
fn token_auth_mock() -> MockAuthService {
    let mut auth = MockAuthService::new();

    auth.expect_authenticate().returning(|token| {
        if token == TEST_TOKEN {
            Ok(())
        } else {
            Err(storefront_app::auth::AuthServiceError::InvalidToken)
        }
    });

    auth
}

fn state(
    products: MockProductsService,
    carts: MockCartsService,
    cart_products: MockCartProductsService,
    auth: MockAuthService,
) -> Arc<State> {
    State::new(AppContext {
        products: Arc::new(products),
        carts: Arc::new(carts),
        cart_products: Arc::new(cart_products),
        auth: Arc::new(auth),
    })
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    state(
        strict_products_mock(),
        strict_carts_mock(),
        strict_cart_products_mock(),
        auth,
    )
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state(
                products,
                strict_carts_mock(),
                strict_cart_products_mock(),
                token_auth_mock(),
            )))
            .push(route),
    )
}

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state(
                strict_products_mock(),
                carts,
                strict_cart_products_mock(),
                token_auth_mock(),
            )))
            .push(route),
    )
}

pub(crate) fn cart_products_service(
    cart_products: MockCartProductsService,
    route: Router,
) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state(
                strict_products_mock(),
                strict_carts_mock(),
                cart_products,
                token_auth_mock(),
            )))
            .push(route),
    )
}

/// The full `/api` router backed by the given products mock.
pub(crate) fn api_service(products: MockProductsService) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state(
                products,
                strict_carts_mock(),
                strict_cart_products_mock(),
                token_auth_mock(),
            )))
            .push(crate::router::api_router()),
    )
}
