//! Checks over the catalogue shipped with the site.

use pods_catalog::gallery::{image_urls, GALLERY_CATEGORIES};
use pods_catalog::prelude::*;

#[test]
fn series_key_agrees_with_id_prefix_convention() {
    let catalog = Catalog::bundled().unwrap();

    for series in catalog.series() {
        let by_key: Vec<_> = CatalogQuery::new()
            .with_series(series.id.clone())
            .apply(&catalog)
            .into_iter()
            .map(|p| p.id.clone())
            .collect();

        let by_substring: Vec<_> = catalog
            .products()
            .iter()
            .filter(|p| {
                p.id.as_str()
                    .to_lowercase()
                    .contains(&series.id.as_str().to_lowercase())
            })
            .map(|p| p.id.clone())
            .collect();

        assert_eq!(by_key, by_substring, "series {}", series.id);
    }
}

#[test]
fn dropdown_lists_only_populated_series() {
    let catalog = Catalog::bundled().unwrap();
    let ids: Vec<_> = catalog
        .series_with_products()
        .iter()
        .map(|s| s.id.as_str())
        .collect();
    assert_eq!(ids, vec!["galaxy", "cosmos", "esports", "wooden"]);
}

#[test]
fn every_product_has_images_and_features() {
    let catalog = Catalog::bundled().unwrap();
    for product in catalog.products() {
        assert!(!product.images.is_empty(), "{} has no images", product.id);
        assert!(!product.features.is_empty(), "{} has no features", product.id);
        assert!(!product.specifications.dimensions.is_empty());
    }
}

#[test]
fn search_and_series_combine() {
    let catalog = Catalog::bundled().unwrap();

    let all = CatalogQuery::from_controls("all", "").apply(&catalog);
    assert_eq!(all.len(), catalog.products().len());

    let doubles = CatalogQuery::from_controls("galaxy", "double").apply(&catalog);
    assert_eq!(doubles.len(), 1);
    assert_eq!(doubles[0].id.as_str(), "galaxy-double");
}

#[test]
fn gallery_categories_cover_bundled_images() {
    let catalog = Catalog::bundled().unwrap();
    for image in catalog.gallery() {
        assert!(
            GALLERY_CATEGORIES.contains(&image.category.as_str()),
            "unknown category {}",
            image.category
        );
    }

    let commercial = GalleryFilter::from_label("Commercial").apply(catalog.gallery());
    assert_eq!(commercial.len(), 4);
    assert_eq!(
        image_urls(&commercial)[0],
        "https://github.com/worldbestservices/capsule-bed-assets/raw/main/9.jpg"
    );
}

#[test]
fn materials_follow_series() {
    let catalog = Catalog::bundled().unwrap();
    let wooden = catalog.require_series("wooden").unwrap();
    assert_eq!(wooden.available_materials(), vec!["Wood"]);

    let esports = catalog.require_series("esports").unwrap();
    assert!(esports.offers_material("ABS"));
    assert!(esports.offers_material("Wood"));
}
