//! Dashboard service.
//!
//! Derived read-only views over the order store, recomputed on each request.
//! Methods take an explicit `point_in_time` so calendar-day and period math
//! is deterministic under test and pinned to the shop's time zone.

use std::{collections::BTreeMap, sync::Arc};

use async_trait::async_trait;
use jiff::Zoned;
use mockall::automock;
use rust_decimal::Decimal;

use crate::domain::{
    dashboard::{
        errors::DashboardServiceError,
        models::{
            DashboardCards, DashboardSummary, SalesBucket, SalesGranularity, SalesReport,
            StatusCount, TopProduct,
        },
    },
    orders::{
        models::{Order, OrderStatus},
        repository::OrdersRepository,
    },
    products::repository::ProductsRepository,
};

/// Statuses that count towards revenue reporting; unconfirmed and cancelled
/// orders are excluded.
const REVENUE_STATUSES: [OrderStatus; 3] = [
    OrderStatus::EnProceso,
    OrderStatus::Listo,
    OrderStatus::Entregado,
];

const MONTH_LABELS: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

#[derive(Clone)]
pub struct ShopDashboardService {
    orders: Arc<dyn OrdersRepository>,
    products: Arc<dyn ProductsRepository>,
}

impl ShopDashboardService {
    #[must_use]
    pub fn new(orders: Arc<dyn OrdersRepository>, products: Arc<dyn ProductsRepository>) -> Self {
        Self { orders, products }
    }

    fn created_zoned(order: &Order, point_in_time: &Zoned) -> Zoned {
        order
            .created_at
            .to_zoned(point_in_time.time_zone().clone())
    }

    async fn top_products(
        &self,
        orders: &[Order],
    ) -> Result<Vec<TopProduct>, DashboardServiceError> {
        let mut ranked: Vec<TopProduct> = Vec::new();

        for item in orders.iter().flat_map(|o| o.items.iter()) {
            match ranked
                .iter_mut()
                .find(|p| p.product_uuid == item.product_uuid)
            {
                Some(entry) => {
                    entry.qty_sold += u64::from(item.qty);
                    entry.revenue += item.subtotal();
                }
                None => ranked.push(TopProduct {
                    product_uuid: item.product_uuid,
                    name: item.name.clone(),
                    qty_sold: u64::from(item.qty),
                    revenue: item.subtotal(),
                    image: item.image_url.clone(),
                }),
            }
        }

        ranked.sort_by(|a, b| b.qty_sold.cmp(&a.qty_sold));
        ranked.truncate(5);

        // Prefer the live catalog image; a deleted product degrades to the
        // snapshot already stored on the entry.
        for entry in &mut ranked {
            if let Some(product) = self.products.get(entry.product_uuid).await? {
                let image = product.display_image();
                if !image.is_empty() {
                    entry.image = image;
                }
            }
        }

        Ok(ranked)
    }
}

#[async_trait]
impl DashboardService for ShopDashboardService {
    async fn summary(&self, point_in_time: Zoned) -> Result<DashboardSummary, DashboardServiceError> {
        let orders = self.orders.list().await?;

        let orders_by_status: Vec<StatusCount> = OrderStatus::ALL
            .into_iter()
            .map(|status| StatusCount {
                status,
                count: orders.iter().filter(|o| o.status == status).count() as u64,
            })
            .collect();

        let total_orders = orders_by_status.iter().map(|s| s.count).sum();
        let new_orders_count = orders_by_status
            .iter()
            .find(|s| s.status == OrderStatus::Nuevo)
            .map_or(0, |s| s.count);

        let today = point_in_time.date();
        let today_orders: Vec<&Order> = orders
            .iter()
            .filter(|o| Self::created_zoned(o, &point_in_time).date() == today)
            .collect();

        let today_sales = today_orders.iter().map(|o| o.total).sum();

        let cards = DashboardCards {
            new_orders_count,
            today_orders_count: today_orders.len() as u64,
            today_sales,
            total_orders,
        };

        let top_products = self.top_products(&orders).await?;

        Ok(DashboardSummary {
            cards,
            orders_by_status,
            top_products,
        })
    }

    async fn sales(
        &self,
        granularity: SalesGranularity,
        point_in_time: Zoned,
    ) -> Result<SalesReport, DashboardServiceError> {
        let orders = self.orders.list().await?;

        let period_start = match granularity {
            SalesGranularity::Day => point_in_time.date(),
            SalesGranularity::Month => point_in_time.date().first_of_month(),
            SalesGranularity::Year => point_in_time.date().first_of_year(),
        };

        let mut buckets: BTreeMap<i8, (Decimal, u64)> = BTreeMap::new();

        for order in &orders {
            if !REVENUE_STATUSES.contains(&order.status) {
                continue;
            }

            let created = Self::created_zoned(order, &point_in_time);
            if created.date() < period_start {
                continue;
            }

            let key = match granularity {
                SalesGranularity::Day => created.hour(),
                SalesGranularity::Month => created.day(),
                SalesGranularity::Year => created.month(),
            };

            let entry = buckets.entry(key).or_insert((Decimal::ZERO, 0));
            entry.0 += order.total;
            entry.1 += 1;
        }

        let buckets = buckets
            .into_iter()
            .map(|(key, (total, count))| SalesBucket {
                label: bucket_label(granularity, key),
                total,
                orders: count,
            })
            .collect();

        Ok(SalesReport {
            granularity,
            buckets,
        })
    }

    async fn count_new(&self) -> Result<u64, DashboardServiceError> {
        let orders = self.orders.list().await?;

        Ok(orders
            .iter()
            .filter(|o| o.status == OrderStatus::Nuevo)
            .count() as u64)
    }
}

fn bucket_label(granularity: SalesGranularity, key: i8) -> String {
    match granularity {
        SalesGranularity::Day => format!("{key:02}:00"),
        SalesGranularity::Month => key.to_string(),
        SalesGranularity::Year => MONTH_LABELS
            .get(key.saturating_sub(1) as usize)
            .copied()
            .unwrap_or_default()
            .to_string(),
    }
}

#[automock]
#[async_trait]
pub trait DashboardService: Send + Sync {
    /// Status counts, today's figures and top products.
    async fn summary(&self, point_in_time: Zoned)
    -> Result<DashboardSummary, DashboardServiceError>;

    /// Period-bucketed sales over confirmed orders.
    async fn sales(
        &self,
        granularity: SalesGranularity,
        point_in_time: Zoned,
    ) -> Result<SalesReport, DashboardServiceError>;

    /// Count of orders still in `nuevo`, for the admin badge.
    async fn count_new(&self) -> Result<u64, DashboardServiceError>;
}
