//! App Context

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::{
    auth::{AuthService, AuthServiceError, SharedSecretAuthService},
    database::{self, Db},
    domain::{
        cart_products::{CartProductsService, PgCartProductsService},
        carts::{CartsService, PgCartsService},
        products::{PgProductsService, ProductsService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply migrations")]
    Migrations(#[source] sqlx::migrate::MigrateError),

    #[error("invalid shared secret")]
    Auth(#[source] AuthServiceError),
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub carts: Arc<dyn CartsService>,
    pub cart_products: Arc<dyn CartProductsService>,
    pub auth: Arc<dyn AuthService>,
}

impl AppContext {
    /// Build application context from a database URL and the shared API secret.
    ///
    /// # Errors
    ///
    /// Returns an error when the secret is empty, the database is unreachable, or
    /// migrations fail to apply.
    pub async fn from_database_url(
        url: &str,
        secret: &str,
        run_migrations: bool,
    ) -> Result<Self, AppInitError> {
        let auth = SharedSecretAuthService::new(secret).map_err(AppInitError::Auth)?;

        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        if run_migrations {
            database::migrate(&pool)
                .await
                .map_err(AppInitError::Migrations)?;

            info!("database migrations applied");
        }

        let db = Db::new(pool);

        Ok(Self {
            products: Arc::new(PgProductsService::new(db.clone())),
            carts: Arc::new(PgCartsService::new(db.clone())),
            cart_products: Arc::new(PgCartProductsService::new(db)),
            auth: Arc::new(auth),
        })
    }
}
