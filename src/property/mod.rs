//! Listing data structures, catalog lookup and CSV loading

mod data;
mod catalog;
pub mod loader;

pub use data::{Property, PropertyFinancials};
pub use catalog::{InMemoryCatalog, PropertyFilter, PropertyRepository};
pub use loader::{load_properties, load_properties_from_reader, load_catalog};
