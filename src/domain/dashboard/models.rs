//! Dashboard Models

use rust_decimal::Decimal;

use crate::domain::{orders::models::OrderStatus, products::models::ProductUuid};

/// Orders tallied for one status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusCount {
    pub status: OrderStatus,
    pub count: u64,
}

/// Headline figures for the dashboard cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardCards {
    pub new_orders_count: u64,
    pub today_orders_count: u64,
    pub today_sales: Decimal,
    pub total_orders: u64,
}

/// A product ranked by quantity sold across all orders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopProduct {
    pub product_uuid: ProductUuid,
    pub name: String,
    pub qty_sold: u64,
    pub revenue: Decimal,
    /// Live catalog image when the product still exists, otherwise the
    /// snapshot stored on the order item.
    pub image: String,
}

/// Full dashboard read model, recomputed on every request.
#[derive(Debug, Clone)]
pub struct DashboardSummary {
    pub cards: DashboardCards,
    /// Counts per status, in [`OrderStatus::ALL`] order.
    pub orders_by_status: Vec<StatusCount>,
    /// Top five products by quantity sold.
    pub top_products: Vec<TopProduct>,
}

/// Granularity of the sales report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SalesGranularity {
    /// Hourly buckets for the current day.
    Day,
    /// Day-of-month buckets for the current month.
    #[default]
    Month,
    /// Calendar-month buckets for the current year.
    Year,
}

impl SalesGranularity {
    /// Parse the report group parameter; anything unrecognised falls back to
    /// the monthly view.
    #[must_use]
    pub fn parse_lossy(value: &str) -> Self {
        match value.trim() {
            "day" => Self::Day,
            "year" => Self::Year,
            _ => Self::Month,
        }
    }
}

/// One bucket of the sales report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesBucket {
    pub label: String,
    pub total: Decimal,
    pub orders: u64,
}

/// Period-bucketed sales over confirmed orders.
#[derive(Debug, Clone)]
pub struct SalesReport {
    pub granularity: SalesGranularity,
    /// Buckets in ascending period order; empty periods are omitted.
    pub buckets: Vec<SalesBucket>,
}
