//! Capsule-bed product catalogue.
//!
//! This crate holds the static, hand-authored data the storefront renders:
//!
//! - **Products**: individual pod models with images, features and specifications
//! - **Series**: families of models sharing construction style and options
//! - **Gallery**: categorised showcase images
//! - **Search**: text and series filtering over the catalogue
//!
//! # Example
//!
//! ```rust
//! use pods_catalog::prelude::*;
//!
//! let catalog = Catalog::bundled().unwrap();
//! let query = CatalogQuery::new()
//!     .with_text("gaming")
//!     .with_series(SeriesId::new("esports"));
//!
//! let hits = query.apply(&catalog);
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].id.as_str(), "esports-single");
//! ```

pub mod error;
pub mod ids;

pub mod catalog;
pub mod gallery;
pub mod product;
pub mod search;
pub mod series;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use ids::*;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::catalog::Catalog;
    pub use crate::error::CatalogError;
    pub use crate::ids::*;

    pub use crate::gallery::{GalleryFilter, GalleryImage};
    pub use crate::product::{Product, Specifications};
    pub use crate::search::{CatalogQuery, Filter};
    pub use crate::series::{ProductSeries, SizeVariant};
}
