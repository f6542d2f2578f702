//! Test context for service-level integration tests.

use crate::{
    database::Db,
    domain::{
        cart_products::PgCartProductsService, carts::PgCartsService, products::PgProductsService,
    },
};

use super::db::TestDb;

pub struct TestContext {
    _db: TestDb,
    pub products: PgProductsService,
    pub carts: PgCartsService,
    pub cart_products: PgCartProductsService,
}

impl TestContext {
    pub async fn new() -> Self {
        let test_db = TestDb::new().await;
        let db = Db::new(test_db.pool().clone());

        Self {
            products: PgProductsService::new(db.clone()),
            carts: PgCartsService::new(db.clone()),
            cart_products: PgCartProductsService::new(db),
            _db: test_db,
        }
    }
}
