//! Company Info Service

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;

use crate::domain::company::{
    errors::CompanyServiceError,
    models::{CompanyInfo, CompanyUpdate},
    repository::CompanyRepository,
};

#[derive(Clone)]
pub struct ShopCompanyService {
    repository: Arc<dyn CompanyRepository>,
}

impl ShopCompanyService {
    #[must_use]
    pub fn new(repository: Arc<dyn CompanyRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CompanyService for ShopCompanyService {
    async fn company_info(&self) -> Result<CompanyInfo, CompanyServiceError> {
        let info = self.repository.get().await?.unwrap_or_default();

        Ok(info)
    }

    async fn update_company(
        &self,
        update: CompanyUpdate,
    ) -> Result<CompanyInfo, CompanyServiceError> {
        let now = Timestamp::now();

        let mut info = self.repository.get().await?.unwrap_or_else(|| CompanyInfo {
            created_at: now,
            ..CompanyInfo::default()
        });

        info.mission = update.mission.trim().to_string();
        info.vision = update.vision.trim().to_string();
        info.slogan = update.slogan.trim().to_string();
        info.updated_at = now;

        self.repository.save(info.clone()).await?;

        tracing::info!("updated company info");

        Ok(info)
    }
}

#[automock]
#[async_trait]
pub trait CompanyService: Send + Sync {
    /// The saved company record, or the built-in defaults when none exists.
    async fn company_info(&self) -> Result<CompanyInfo, CompanyServiceError>;

    /// Upsert the editable fields, trimming surrounding whitespace.
    async fn update_company(
        &self,
        update: CompanyUpdate,
    ) -> Result<CompanyInfo, CompanyServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::TestContext;

    use super::*;

    #[tokio::test]
    async fn company_info_falls_back_to_defaults() -> TestResult {
        let ctx = TestContext::new();

        let info = ctx.company.company_info().await?;

        assert_eq!(info.name, "CalentanaCo");
        assert_eq!(
            info.slogan,
            "El sabor que te abraza, la frescura que te inspira."
        );
        assert!(info.mission.starts_with("Llevar a cada persona"));
        assert!(info.vision.starts_with("Convertirnos en la marca líder"));

        Ok(())
    }

    #[tokio::test]
    async fn update_company_trims_and_persists() -> TestResult {
        let ctx = TestContext::new();

        let updated = ctx
            .company
            .update_company(CompanyUpdate {
                mission: "  Vender aguas frescas.  ".to_string(),
                vision: "Ser la tienda del barrio.".to_string(),
                slogan: " Frescura diaria. ".to_string(),
            })
            .await?;

        assert_eq!(updated.mission, "Vender aguas frescas.");
        assert_eq!(updated.slogan, "Frescura diaria.");

        let reread = ctx.company.company_info().await?;
        assert_eq!(reread, updated);

        Ok(())
    }

    #[tokio::test]
    async fn update_company_keeps_the_name() -> TestResult {
        let ctx = TestContext::new();

        let updated = ctx
            .company
            .update_company(CompanyUpdate {
                mission: "m".to_string(),
                vision: "v".to_string(),
                slogan: "s".to_string(),
            })
            .await?;

        assert_eq!(updated.name, "CalentanaCo");

        Ok(())
    }

    #[tokio::test]
    async fn second_update_overwrites_the_first() -> TestResult {
        let ctx = TestContext::new();

        ctx.company
            .update_company(CompanyUpdate {
                mission: "primera".to_string(),
                ..CompanyUpdate::default()
            })
            .await?;

        let updated = ctx
            .company
            .update_company(CompanyUpdate {
                mission: "segunda".to_string(),
                ..CompanyUpdate::default()
            })
            .await?;

        assert_eq!(updated.mission, "segunda");
        assert_eq!(ctx.company.company_info().await?.mission, "segunda");

        Ok(())
    }
}
