//! Storage boundary error type.
//!
//! Persistence lives behind per-domain repository traits; this is the one
//! error those traits surface. Services wrap it in their own error enums so
//! callers see a generic failure message rather than backend details.

use thiserror::Error;

/// Error produced by a backing store.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("storage error: {0}")]
pub struct StorageError(String);

impl StorageError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    /// A lock guarding in-memory state was poisoned by a panicking writer.
    #[must_use]
    pub fn poisoned() -> Self {
        Self::new("lock poisoned")
    }
}
