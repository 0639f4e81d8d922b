//! Orders

pub mod errors;
pub mod message;
pub mod models;
pub mod repository;
pub mod service;

pub use errors::OrdersServiceError;
pub use repository::{InMemoryOrdersRepository, OrdersRepository};
pub use service::*;
