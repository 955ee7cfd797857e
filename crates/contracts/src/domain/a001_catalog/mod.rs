//! Catalog items (vinos) grouped by bodega.

pub mod aggregate;
pub mod error;
pub mod index;
pub mod loader;
pub mod source;

// Re-exports
pub use aggregate::{CatalogItem, FeaturedItem};
pub use error::CatalogError;
pub use index::{group_by_category, CatalogIndex};
pub use loader::{load, LoadedCatalog};
pub use source::SourceShape;
