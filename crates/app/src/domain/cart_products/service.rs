//! Cart products service.

use async_trait::async_trait;
use mockall::automock;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{
    database::Db,
    domain::{
        carts::{
            errors::CartsServiceError,
            records::{CartRecord, CartUuid},
            repository::PgCartsRepository,
        },
        products::{
            records::{ProductRecord, ProductUuid},
            repository::PgProductsRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgCartProductsService {
    db: Db,
    carts: PgCartsRepository,
    products: PgProductsRepository,
}

impl PgCartProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            carts: PgCartsRepository::new(),
            products: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl CartProductsService for PgCartProductsService {
    async fn add_product(
        &self,
        cart: CartUuid,
        product: ProductUuid,
    ) -> Result<CartRecord, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let mut record = self.carts.lock_cart(&mut tx, cart).await?;

        if !self.products.product_exists(&mut tx, product).await? {
            return Err(CartsServiceError::ProductNotFound);
        }

        record.products.push(product);

        let updated = self
            .carts
            .update_products(&mut tx, cart, &record.products)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn remove_product(
        &self,
        cart: CartUuid,
        product: ProductUuid,
    ) -> Result<CartRecord, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let mut record = self.carts.lock_cart(&mut tx, cart).await?;

        let Some(index) = record.products.iter().position(|uuid| *uuid == product) else {
            return Err(CartsServiceError::ProductNotInCart);
        };

        record.products.remove(index);

        let updated = self
            .carts
            .update_products(&mut tx, cart, &record.products)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn list_products(&self, cart: CartUuid) -> Result<Vec<ProductRecord>, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let record = self.carts.get_cart(&mut tx, cart).await?;

        let found: FxHashMap<ProductUuid, ProductRecord> = self
            .products
            .find_products(&mut tx, &record.products)
            .await?
            .into_iter()
            .map(|product| (product.uuid, product))
            .collect();

        tx.commit().await?;

        let products: Vec<ProductRecord> = record
            .products
            .iter()
            .filter_map(|uuid| found.get(uuid).cloned())
            .collect();

        if products.len() < record.products.len() {
            debug!(
                cart = %cart,
                dangling = record.products.len() - products.len(),
                "skipped dangling product references"
            );
        }

        Ok(products)
    }
}

#[automock]
#[async_trait]
pub trait CartProductsService: Send + Sync {
    /// Append a product reference to the end of the cart.
    async fn add_product(
        &self,
        cart: CartUuid,
        product: ProductUuid,
    ) -> Result<CartRecord, CartsServiceError>;

    /// Remove the first reference to the product from the cart.
    async fn remove_product(
        &self,
        cart: CartUuid,
        product: ProductUuid,
    ) -> Result<CartRecord, CartsServiceError>;

    /// Resolve the cart's references to current product records.
    ///
    /// Order and duplicates follow the cart. References to products that no
    /// longer exist are skipped.
    async fn list_products(&self, cart: CartUuid) -> Result<Vec<ProductRecord>, CartsServiceError>;
}
