//! Catalogue error types.

use thiserror::Error;

/// Errors raised while loading or querying the catalogue.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Series not found.
    #[error("Series not found: {0}")]
    SeriesNotFound(String),

    /// Two products share an identifier.
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(String),

    /// Two series share an identifier.
    #[error("Duplicate series id: {0}")]
    DuplicateSeries(String),

    /// A product references a series that does not exist.
    #[error("Product {product_id} references unknown series {series_id}")]
    DanglingSeries {
        product_id: String,
        series_id: String,
    },

    /// The bundled or supplied data could not be parsed.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::SerializationError(e.to_string())
    }
}
