//! Orders service errors.

use thiserror::Error;

use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    /// Nothing to check out; the caller returns to the cart view.
    #[error("cart is empty")]
    EmptyCart,

    /// User-correctable form problem; the message re-renders with the cart.
    #[error("{0}")]
    Validation(String),

    /// A required business setting is absent.
    #[error("{0}")]
    Configuration(String),

    /// Status value outside the five-element enumeration; no mutation.
    #[error("unknown order status: {0}")]
    UnknownStatus(String),

    #[error("order not found")]
    NotFound,

    #[error("storage error")]
    Storage(#[from] StorageError),
}
