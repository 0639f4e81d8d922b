//! Company Info Repository

use std::sync::RwLock;

use async_trait::async_trait;
use mockall::automock;

use crate::{domain::company::models::CompanyInfo, storage::StorageError};

#[automock]
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// The singleton record, if one has been saved.
    async fn get(&self) -> Result<Option<CompanyInfo>, StorageError>;

    /// Replace the singleton record.
    async fn save(&self, info: CompanyInfo) -> Result<(), StorageError>;
}

#[derive(Debug, Default)]
pub struct InMemoryCompanyRepository {
    info: RwLock<Option<CompanyInfo>>,
}

#[async_trait]
impl CompanyRepository for InMemoryCompanyRepository {
    async fn get(&self) -> Result<Option<CompanyInfo>, StorageError> {
        let info = self.info.read().map_err(|_| StorageError::poisoned())?;

        Ok(info.clone())
    }

    async fn save(&self, info: CompanyInfo) -> Result<(), StorageError> {
        let mut slot = self.info.write().map_err(|_| StorageError::poisoned())?;

        *slot = Some(info);

        Ok(())
    }
}
