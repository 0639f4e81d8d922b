//! Company service errors.

use thiserror::Error;

use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum CompanyServiceError {
    #[error("storage error")]
    Storage(#[from] StorageError),
}
