//! Dashboard service errors.

use thiserror::Error;

use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum DashboardServiceError {
    #[error("storage error")]
    Storage(#[from] StorageError),
}
