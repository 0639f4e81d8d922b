//! Storefront Domain Concerns

pub mod carts;
pub mod company;
pub mod dashboard;
pub mod orders;
pub mod products;
