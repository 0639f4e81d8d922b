//! Dashboard

pub mod errors;
pub mod models;
pub mod service;

pub use errors::DashboardServiceError;
pub use service::*;
