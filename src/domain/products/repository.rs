//! Products Repository

use std::sync::RwLock;

use async_trait::async_trait;
use mockall::automock;

use crate::{
    domain::products::models::{Product, ProductUuid},
    storage::StorageError,
};

/// Catalog store boundary.
#[automock]
#[async_trait]
pub trait ProductsRepository: Send + Sync {
    /// All products, newest first.
    async fn list(&self) -> Result<Vec<Product>, StorageError>;

    /// Active products only, newest first.
    async fn list_active(&self) -> Result<Vec<Product>, StorageError>;

    async fn get(&self, product: ProductUuid) -> Result<Option<Product>, StorageError>;

    async fn create(&self, product: Product) -> Result<(), StorageError>;

    async fn save(&self, product: Product) -> Result<(), StorageError>;

    /// Unconditional delete; returns the number of documents removed.
    async fn delete(&self, product: ProductUuid) -> Result<u64, StorageError>;
}

/// In-memory catalog store used by tests and the demo CLI.
#[derive(Debug, Default)]
pub struct InMemoryProductsRepository {
    products: RwLock<Vec<Product>>,
}

impl InMemoryProductsRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductsRepository for InMemoryProductsRepository {
    async fn list(&self) -> Result<Vec<Product>, StorageError> {
        let products = self.products.read().map_err(|_| StorageError::poisoned())?;

        let mut products = products.clone();
        products.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(products)
    }

    async fn list_active(&self) -> Result<Vec<Product>, StorageError> {
        let mut products = self.list().await?;
        products.retain(|p| p.is_active);

        Ok(products)
    }

    async fn get(&self, product: ProductUuid) -> Result<Option<Product>, StorageError> {
        let products = self.products.read().map_err(|_| StorageError::poisoned())?;

        Ok(products.iter().find(|p| p.uuid == product).cloned())
    }

    async fn create(&self, product: Product) -> Result<(), StorageError> {
        let mut products = self.products.write().map_err(|_| StorageError::poisoned())?;

        products.push(product);

        Ok(())
    }

    async fn save(&self, product: Product) -> Result<(), StorageError> {
        let mut products = self.products.write().map_err(|_| StorageError::poisoned())?;

        match products.iter_mut().find(|p| p.uuid == product.uuid) {
            Some(stored) => *stored = product,
            None => products.push(product),
        }

        Ok(())
    }

    async fn delete(&self, product: ProductUuid) -> Result<u64, StorageError> {
        let mut products = self.products.write().map_err(|_| StorageError::poisoned())?;

        let before = products.len();
        products.retain(|p| p.uuid != product);

        Ok((before - products.len()) as u64)
    }
}
