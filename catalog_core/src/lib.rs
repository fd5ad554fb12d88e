pub mod catalog;
pub mod data;
pub mod filter;

pub use catalog::{Catalog, CatalogEntry, CatalogError};
pub use filter::{CategorySelection, FilterState};
