//! Orders Repository

use std::sync::RwLock;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;

use crate::{
    domain::orders::models::{Order, OrderStatus, OrderUuid},
    storage::StorageError,
};

/// Order store boundary.
#[automock]
#[async_trait]
pub trait OrdersRepository: Send + Sync {
    async fn create(&self, order: Order) -> Result<(), StorageError>;

    async fn get(&self, order: OrderUuid) -> Result<Option<Order>, StorageError>;

    /// All orders, newest first.
    async fn list(&self) -> Result<Vec<Order>, StorageError>;

    /// Set the status of a single order; returns the number of documents
    /// updated.
    async fn update_status(
        &self,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<u64, StorageError>;
}

/// In-memory order store used by tests and the demo CLI.
#[derive(Debug, Default)]
pub struct InMemoryOrdersRepository {
    orders: RwLock<Vec<Order>>,
}

impl InMemoryOrdersRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrdersRepository for InMemoryOrdersRepository {
    async fn create(&self, order: Order) -> Result<(), StorageError> {
        let mut orders = self.orders.write().map_err(|_| StorageError::poisoned())?;

        orders.push(order);

        Ok(())
    }

    async fn get(&self, order: OrderUuid) -> Result<Option<Order>, StorageError> {
        let orders = self.orders.read().map_err(|_| StorageError::poisoned())?;

        Ok(orders.iter().find(|o| o.uuid == order).cloned())
    }

    async fn list(&self) -> Result<Vec<Order>, StorageError> {
        let orders = self.orders.read().map_err(|_| StorageError::poisoned())?;

        let mut orders = orders.clone();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(orders)
    }

    async fn update_status(
        &self,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<u64, StorageError> {
        let mut orders = self.orders.write().map_err(|_| StorageError::poisoned())?;

        match orders.iter_mut().find(|o| o.uuid == order) {
            Some(stored) => {
                stored.status = status;
                stored.updated_at = Timestamp::now();
                Ok(1)
            }
            None => Ok(0),
        }
    }
}
