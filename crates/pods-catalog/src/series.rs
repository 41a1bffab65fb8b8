//! Product series records.

use crate::ids::SeriesId;
use serde::{Deserialize, Serialize};

/// Material offered when a series does not list any.
pub const DEFAULT_MATERIAL: &str = "ABS";

/// A size option within a series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SizeVariant {
    /// Variant label, e.g. "Horizontal Double".
    pub label: String,
    /// Dimension text, e.g. "2060 × 1580 × 2400 mm".
    pub dimensions: String,
}

/// A family of related pod models.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductSeries {
    pub id: SeriesId,
    pub name: String,
    pub description: String,
    /// Model code groups, e.g. "TWS-801/802/803".
    #[serde(default)]
    pub models: Vec<String>,
    #[serde(default)]
    pub sizes: Vec<SizeVariant>,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub materials: Vec<String>,
    /// Use-case tags, e.g. "Hotels".
    #[serde(default)]
    pub applications: Vec<String>,
}

impl ProductSeries {
    /// Materials offered for this series, never empty.
    pub fn available_materials(&self) -> Vec<&str> {
        if self.materials.is_empty() {
            vec![DEFAULT_MATERIAL]
        } else {
            self.materials.iter().map(String::as_str).collect()
        }
    }

    /// Whether `material` is offered for this series.
    pub fn offers_material(&self, material: &str) -> bool {
        self.available_materials().contains(&material)
    }

    /// Human label for a material option.
    pub fn material_label(material: &str) -> String {
        match material {
            "Wood" => "Wood (eco multi-layer board)".to_string(),
            other => other.to_string(),
        }
    }

    /// Path of the order page with this series preselected.
    pub fn order_href(&self) -> String {
        format!("/order?series={}", self.id)
    }
}
