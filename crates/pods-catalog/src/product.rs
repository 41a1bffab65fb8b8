//! Product records.

use crate::ids::{ProductId, SeriesId};
use serde::{Deserialize, Serialize};

/// Fixed-shape technical specification of a pod model.
///
/// Every field is free-form display text, not a parsed quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Specifications {
    pub dimensions: String,
    pub materials: String,
    pub colors: String,
    pub rated_voltage: String,
    pub lighting_power: String,
    pub typical_consumption: String,
    pub fresh_air_ventilation: String,
}

impl Specifications {
    /// Labelled rows in display order.
    pub fn rows(&self) -> [(&'static str, &str); 7] {
        [
            ("Dimensions", &self.dimensions),
            ("Materials", &self.materials),
            ("Colors", &self.colors),
            ("Rated Voltage", &self.rated_voltage),
            ("Lighting Power", &self.lighting_power),
            ("Typical Consumption", &self.typical_consumption),
            ("Fresh Air Ventilation", &self.fresh_air_ventilation),
        ]
    }
}

/// A pod model in the catalogue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// The series this model belongs to.
    pub series_id: SeriesId,
    /// Display name.
    pub name: String,
    /// Marketing description.
    pub description: String,
    /// Price label, e.g. "Contact for Quote". Not a transactional price.
    pub price_label: String,
    /// Ordered image URLs. May contain empty or broken entries.
    #[serde(default)]
    pub images: Vec<String>,
    /// Ordered feature bullet points.
    #[serde(default)]
    pub features: Vec<String>,
    pub specifications: Specifications,
}

impl Product {
    /// First image, used for cards and list rows.
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Case-insensitive match of `needle` against name and description.
    ///
    /// `needle` must already be lowercased.
    pub fn matches_text(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }

    /// Path of the product detail page.
    pub fn href(&self) -> String {
        format!("/products/{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product {
            id: ProductId::new("galaxy-single"),
            series_id: SeriesId::new("galaxy"),
            name: "GALAXY Series - Horizontal Single".to_string(),
            description: "Standard ABS shell with metal frame".to_string(),
            price_label: "Contact for Quote".to_string(),
            images: vec!["a.png".to_string(), "b.png".to_string()],
            features: vec![],
            specifications: Specifications::default(),
        }
    }

    #[test]
    fn test_cover_image() {
        assert_eq!(sample().cover_image(), Some("a.png"));

        let mut empty = sample();
        empty.images.clear();
        assert_eq!(empty.cover_image(), None);
    }

    #[test]
    fn test_matches_text_name_and_description() {
        let p = sample();
        assert!(p.matches_text("galaxy"));
        assert!(p.matches_text("metal frame"));
        assert!(p.matches_text(""));
        assert!(!p.matches_text("wooden"));
    }

    #[test]
    fn test_specification_rows_order() {
        let spec = Specifications {
            dimensions: "2060 mm".to_string(),
            ..Default::default()
        };
        let rows = spec.rows();
        assert_eq!(rows[0], ("Dimensions", "2060 mm"));
        assert_eq!(rows[6].0, "Fresh Air Ventilation");
    }

    #[test]
    fn test_href() {
        assert_eq!(sample().href(), "/products/galaxy-single");
    }
}
