//! Myth Cloth collection catalog: bulk-import normalization, derived
//! presentation fields (display name, status, tax-inclusive price), restock
//! grouping, and the storage/HTTP plumbing around them.

pub mod api;
pub mod error;
pub mod model;
pub mod normalization;
pub mod presentation;
pub mod service;
pub mod store;
pub mod tracing;

pub mod util {
    pub mod db;
    pub mod env;
}

pub use error::{MappingError, ServiceError, ServiceResult};
