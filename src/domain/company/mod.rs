//! Company Info

pub mod errors;
pub mod models;
pub mod repository;
pub mod service;

pub use errors::CompanyServiceError;
pub use repository::{CompanyRepository, InMemoryCompanyRepository};
pub use service::*;
