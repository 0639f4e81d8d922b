//! Storefront domain and in-memory persistence modules.

pub mod config;
pub mod context;
pub mod domain;
pub mod money;
pub mod storage;
pub mod uuids;

#[cfg(test)]
mod test;
