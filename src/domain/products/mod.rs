//! Products

pub mod errors;
pub mod models;
pub mod repository;
pub mod service;
pub mod sizes;

pub use errors::ProductsServiceError;
pub use repository::{InMemoryProductsRepository, ProductsRepository};
pub use service::*;
