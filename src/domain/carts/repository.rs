//! Carts Repository

use std::{collections::HashMap, sync::RwLock};

use async_trait::async_trait;
use mockall::automock;

use crate::{
    domain::carts::models::{Cart, SessionUuid},
    storage::StorageError,
};

/// Session store boundary for carts.
///
/// Concurrent writes from the same session are last-write-wins; the session
/// mechanism offers no locking and the cart is user-correctable state.
#[automock]
#[async_trait]
pub trait CartsRepository: Send + Sync {
    async fn load(&self, session: SessionUuid) -> Result<Option<Cart>, StorageError>;

    async fn save(&self, session: SessionUuid, cart: Cart) -> Result<(), StorageError>;
}

/// In-memory session cart store used by tests and the demo CLI.
#[derive(Debug, Default)]
pub struct InMemoryCartsRepository {
    carts: RwLock<HashMap<SessionUuid, Cart>>,
}

impl InMemoryCartsRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CartsRepository for InMemoryCartsRepository {
    async fn load(&self, session: SessionUuid) -> Result<Option<Cart>, StorageError> {
        let carts = self.carts.read().map_err(|_| StorageError::poisoned())?;

        Ok(carts.get(&session).cloned())
    }

    async fn save(&self, session: SessionUuid, cart: Cart) -> Result<(), StorageError> {
        let mut carts = self.carts.write().map_err(|_| StorageError::poisoned())?;

        carts.insert(session, cart);

        Ok(())
    }
}
