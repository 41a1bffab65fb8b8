//! The validated, in-memory catalogue.

use std::collections::HashSet;

use serde::Deserialize;

use crate::error::CatalogError;
use crate::gallery::GalleryImage;
use crate::ids::SeriesId;
use crate::product::Product;
use crate::series::ProductSeries;

/// Catalogue shipped with the site.
const BUNDLED_CATALOG: &str = include_str!("../data/catalog.json");

/// Raw document shape of a catalogue file.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    products: Vec<Product>,
    series: Vec<ProductSeries>,
    #[serde(default)]
    gallery: Vec<GalleryImage>,
}

/// Products, series and gallery images, checked for referential integrity.
///
/// Construction fails if product or series ids repeat, or if any product
/// names a series that does not exist. Once built, the catalogue is
/// read-only.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    series: Vec<ProductSeries>,
    gallery: Vec<GalleryImage>,
}

impl Catalog {
    /// Build a catalogue from products and series.
    pub fn new(products: Vec<Product>, series: Vec<ProductSeries>) -> Result<Self, CatalogError> {
        let mut series_ids = HashSet::new();
        for s in &series {
            if !series_ids.insert(s.id.as_str()) {
                return Err(CatalogError::DuplicateSeries(s.id.to_string()));
            }
        }

        let mut product_ids = HashSet::new();
        for p in &products {
            if !product_ids.insert(p.id.as_str()) {
                return Err(CatalogError::DuplicateProduct(p.id.to_string()));
            }
            if !series_ids.contains(p.series_id.as_str()) {
                return Err(CatalogError::DanglingSeries {
                    product_id: p.id.to_string(),
                    series_id: p.series_id.to_string(),
                });
            }
        }

        Ok(Self {
            products,
            series,
            gallery: Vec::new(),
        })
    }

    /// Attach gallery images.
    pub fn with_gallery(mut self, gallery: Vec<GalleryImage>) -> Self {
        self.gallery = gallery;
        self
    }

    /// Parse and validate a JSON catalogue document.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDocument = serde_json::from_str(json)?;
        Ok(Self::new(doc.products, doc.series)?.with_gallery(doc.gallery))
    }

    /// The catalogue compiled into the binary.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn series(&self) -> &[ProductSeries] {
        &self.series
    }

    pub fn gallery(&self) -> &[GalleryImage] {
        &self.gallery
    }

    /// Look up a product by id.
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id.as_str() == id)
    }

    /// Look up a product by id, failing if absent.
    pub fn require_product(&self, id: &str) -> Result<&Product, CatalogError> {
        self.product(id)
            .ok_or_else(|| CatalogError::ProductNotFound(id.to_string()))
    }

    /// Look up a series by id.
    pub fn find_series(&self, id: &str) -> Option<&ProductSeries> {
        self.series.iter().find(|s| s.id.as_str() == id)
    }

    /// Look up a series by id, failing if absent.
    pub fn require_series(&self, id: &str) -> Result<&ProductSeries, CatalogError> {
        self.find_series(id)
            .ok_or_else(|| CatalogError::SeriesNotFound(id.to_string()))
    }

    /// The series a product belongs to. Always present for a validated catalogue.
    pub fn series_of(&self, product: &Product) -> Option<&ProductSeries> {
        self.find_series(product.series_id.as_str())
    }

    /// Products belonging to `series`, in catalogue order.
    pub fn products_in_series<'a>(&'a self, series: &'a SeriesId) -> impl Iterator<Item = &'a Product> + 'a {
        self.products.iter().filter(move |p| p.series_id == *series)
    }

    /// Series owning at least one product, in series order.
    pub fn series_with_products(&self) -> Vec<&ProductSeries> {
        self.series
            .iter()
            .filter(|s| self.products.iter().any(|p| p.series_id == s.id))
            .collect()
    }

    /// The first series, used as the order form default.
    pub fn default_series(&self) -> Option<&ProductSeries> {
        self.series.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;
    use crate::product::Specifications;

    fn product(id: &str, series: &str) -> Product {
        Product {
            id: ProductId::new(id),
            series_id: SeriesId::new(series),
            name: id.to_string(),
            description: String::new(),
            price_label: "Contact for Quote".to_string(),
            images: vec![],
            features: vec![],
            specifications: Specifications::default(),
        }
    }

    fn series(id: &str) -> ProductSeries {
        ProductSeries {
            id: SeriesId::new(id),
            name: id.to_uppercase(),
            description: String::new(),
            models: vec![],
            sizes: vec![],
            colors: vec![],
            materials: vec![],
            applications: vec![],
        }
    }

    #[test]
    fn test_bundled_catalog_loads() {
        let catalog = Catalog::bundled().unwrap();
        assert_eq!(catalog.products().len(), 5);
        assert_eq!(catalog.series().len(), 8);
        assert_eq!(catalog.gallery().len(), 19);
    }

    #[test]
    fn test_duplicate_product_rejected() {
        let err = Catalog::new(
            vec![product("a", "s"), product("a", "s")],
            vec![series("s")],
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateProduct(id) if id == "a"));
    }

    #[test]
    fn test_duplicate_series_rejected() {
        let err = Catalog::new(vec![], vec![series("s"), series("s")]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateSeries(_)));
    }

    #[test]
    fn test_dangling_series_rejected() {
        let err = Catalog::new(vec![product("a", "missing")], vec![series("s")]).unwrap_err();
        match err {
            CatalogError::DanglingSeries {
                product_id,
                series_id,
            } => {
                assert_eq!(product_id, "a");
                assert_eq!(series_id, "missing");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_series_with_products() {
        let catalog = Catalog::new(
            vec![product("a", "s1")],
            vec![series("s1"), series("s2")],
        )
        .unwrap();
        let with = catalog.series_with_products();
        assert_eq!(with.len(), 1);
        assert_eq!(with[0].id.as_str(), "s1");
    }

    #[test]
    fn test_lookups() {
        let catalog = Catalog::bundled().unwrap();
        assert!(catalog.product("cosmos-vertical").is_some());
        assert!(catalog.require_product("nope").is_err());
        assert_eq!(catalog.default_series().unwrap().id.as_str(), "galaxy");

        let p = catalog.product("wooden-single").unwrap();
        assert_eq!(catalog.series_of(p).unwrap().name, "Wooden Series");
    }

    #[test]
    fn test_from_json_reports_parse_errors() {
        let err = Catalog::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::SerializationError(_)));
    }
}
