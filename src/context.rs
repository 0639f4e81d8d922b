//! App Context

use std::sync::Arc;

use jiff::tz::TimeZone;
use thiserror::Error;

use crate::{
    config::AppConfig,
    domain::{
        carts::{CartsService, ShopCartsService, repository::InMemoryCartsRepository},
        company::{CompanyService, ShopCompanyService, repository::InMemoryCompanyRepository},
        dashboard::{DashboardService, ShopDashboardService},
        orders::{OrdersService, ShopOrdersService, repository::InMemoryOrdersRepository},
        products::{ProductsService, ShopProductsService, repository::InMemoryProductsRepository},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("unknown time zone: {0}")]
    TimeZone(String),
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub carts: Arc<dyn CartsService>,
    pub orders: Arc<dyn OrdersService>,
    pub dashboard: Arc<dyn DashboardService>,
    pub company: Arc<dyn CompanyService>,
    pub time_zone: TimeZone,
}

impl AppContext {
    /// Build application context backed by the in-memory stores.
    ///
    /// # Errors
    ///
    /// Returns an error when the configured time zone is not a known IANA
    /// identifier.
    pub fn in_memory(config: &AppConfig) -> Result<Self, AppInitError> {
        let time_zone = TimeZone::get(&config.time_zone)
            .map_err(|_| AppInitError::TimeZone(config.time_zone.clone()))?;

        let products_repo = Arc::new(InMemoryProductsRepository::new());
        let carts_repo = Arc::new(InMemoryCartsRepository::new());
        let orders_repo = Arc::new(InMemoryOrdersRepository::new());
        let company_repo = Arc::new(InMemoryCompanyRepository::default());

        Ok(Self {
            products: Arc::new(ShopProductsService::new(products_repo.clone())),
            carts: Arc::new(ShopCartsService::new(
                carts_repo.clone(),
                products_repo.clone(),
            )),
            orders: Arc::new(ShopOrdersService::new(
                orders_repo.clone(),
                carts_repo,
                config.whatsapp_phone(),
            )),
            dashboard: Arc::new(ShopDashboardService::new(orders_repo, products_repo)),
            company: Arc::new(ShopCompanyService::new(company_repo)),
            time_zone,
        })
    }
}
