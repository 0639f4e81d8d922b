//! Carts service errors.

use thiserror::Error;

use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error("storage error")]
    Storage(#[from] StorageError),
}
