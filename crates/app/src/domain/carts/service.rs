//! Carts service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::carts::{
        errors::CartsServiceError,
        records::{CartRecord, CartUuid},
        repository::PgCartsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgCartsService {
    db: Db,
    repository: PgCartsRepository,
}

impl PgCartsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCartsRepository::new(),
        }
    }
}

#[async_trait]
impl CartsService for PgCartsService {
    async fn create_cart(&self) -> Result<CartRecord, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let cart = self.repository.create_cart(&mut tx, CartUuid::new()).await?;

        tx.commit().await?;

        Ok(cart)
    }

    async fn get_cart(&self, cart: CartUuid) -> Result<CartRecord, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let cart = self.repository.get_cart(&mut tx, cart).await?;

        tx.commit().await?;

        Ok(cart)
    }

    async fn delete_cart(&self, cart: CartUuid) -> Result<(), CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_cart(&mut tx, cart).await?;

        if rows_affected == 0 {
            return Err(CartsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Create an empty cart under a freshly assigned UUID.
    async fn create_cart(&self) -> Result<CartRecord, CartsServiceError>;

    /// Retrieve a cart.
    async fn get_cart(&self, cart: CartUuid) -> Result<CartRecord, CartsServiceError>;

    /// Delete a cart.
    async fn delete_cart(&self, cart: CartUuid) -> Result<(), CartsServiceError>;
}
