//! Catalog domain types.

pub mod catalog;
pub mod figurine;
pub mod reference;
pub mod source;

pub use catalog::{Anniversary, CatalogKeyDescription, Category, Describable, LineUp, Series};
pub use figurine::{BasicFigurine, Distribution, Figurine, IdentityKey, Restock, Status};
pub use reference::{DistributionChannel, Distributor};
pub use source::SourceFigurine;
