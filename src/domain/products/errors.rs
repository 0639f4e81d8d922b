//! Products service errors.

use thiserror::Error;

use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    /// User-correctable form problem; the message re-renders with the form.
    #[error("{0}")]
    Validation(String),

    #[error("product not found")]
    NotFound,

    #[error("storage error")]
    Storage(#[from] StorageError),
}
