//! Catalogue search and filtering.

use crate::catalog::Catalog;
use crate::ids::SeriesId;
use crate::product::Product;

/// Value of the series dropdown that disables series filtering.
pub const ALL_SERIES: &str = "all";

/// A single catalogue filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Products belonging to the series.
    Series(SeriesId),
    /// Case-insensitive substring match on name or description.
    Text(String),
}

impl Filter {
    /// Whether `product` passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Filter::Series(id) => product.series_id == *id,
            Filter::Text(query) => product.matches_text(&query.to_lowercase()),
        }
    }
}

/// A conjunction of filters over the catalogue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    filters: Vec<Filter>,
}

impl CatalogQuery {
    /// Create an empty query, matching every product.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a query from the catalogue page controls.
    ///
    /// `series` of `"all"` or empty disables the series filter, and a blank
    /// search term disables the text filter. Series keys are matched
    /// case-insensitively.
    pub fn from_controls(series: &str, search: &str) -> Self {
        let mut query = Self::new();
        let series = series.trim().to_ascii_lowercase();
        if !series.is_empty() && series != ALL_SERIES {
            query = query.with_series(SeriesId::new(series));
        }
        query.with_text(search)
    }

    /// Add a text filter. Blank terms are ignored.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        if !text.trim().is_empty() {
            self.filters.push(Filter::Text(text));
        }
        self
    }

    /// Add a series filter.
    pub fn with_series(mut self, id: SeriesId) -> Self {
        self.filters.push(Filter::Series(id));
        self
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    /// Whether `product` passes every filter.
    pub fn matches(&self, product: &Product) -> bool {
        self.filters.iter().all(|f| f.matches(product))
    }

    /// Matching products in catalogue order.
    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        catalog
            .products()
            .iter()
            .filter(|p| self.matches(p))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_controls_all_series() {
        let q = CatalogQuery::from_controls("all", "");
        assert!(q.filters().is_empty());
    }

    #[test]
    fn test_from_controls_series_and_text() {
        let q = CatalogQuery::from_controls("galaxy", "double");
        assert_eq!(
            q.filters(),
            &[
                Filter::Series(SeriesId::new("galaxy")),
                Filter::Text("double".to_string())
            ]
        );
    }

    #[test]
    fn test_from_controls_series_ignores_case() {
        let catalog = Catalog::bundled().unwrap();
        let hits = CatalogQuery::from_controls("Galaxy", "").apply(&catalog);
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|p| p.series_id.as_str() == "galaxy"));

        let all = CatalogQuery::from_controls("ALL", "");
        assert!(all.filters().is_empty());
    }

    #[test]
    fn test_blank_text_is_ignored() {
        let q = CatalogQuery::new().with_text("   ");
        assert!(q.filters().is_empty());
    }

    #[test]
    fn test_text_filter_is_case_insensitive() {
        let catalog = Catalog::bundled().unwrap();
        let hits = CatalogQuery::new().with_text("GALAXY").apply(&catalog);
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_text_filter_matches_description() {
        let catalog = Catalog::bundled().unwrap();
        let hits = CatalogQuery::new()
            .with_text("Multi-Layer Board")
            .apply(&catalog);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_str(), "wooden-single");
    }

    #[test]
    fn test_series_filter_is_strict() {
        let catalog = Catalog::bundled().unwrap();
        let hits = CatalogQuery::new()
            .with_series(SeriesId::new("galaxy"))
            .apply(&catalog);
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|p| p.series_id.as_str() == "galaxy"));

        let none = CatalogQuery::new()
            .with_series(SeriesId::new("gal"))
            .apply(&catalog);
        assert!(none.is_empty());
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let catalog = Catalog::bundled().unwrap();
        let hits = CatalogQuery::from_controls("galaxy", "gaming").apply(&catalog);
        assert!(hits.is_empty());
    }
}
