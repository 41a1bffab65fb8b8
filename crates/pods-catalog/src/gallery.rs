//! Showcase gallery images and category filtering.

use serde::{Deserialize, Serialize};

/// Category buttons shown above the gallery, in display order.
pub const GALLERY_CATEGORIES: &[&str] = &[
    "All",
    "Product Design",
    "Interior Design",
    "Commercial",
    "Technology",
    "Installation",
    "Premium Materials",
    "Gaming",
    "Safety",
    "Design",
    "Manufacturing",
    "Service",
];

/// A gallery image with a title and a category tag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GalleryImage {
    pub url: String,
    pub title: String,
    pub category: String,
}

/// Gallery category selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GalleryFilter {
    #[default]
    All,
    Category(String),
}

impl GalleryFilter {
    /// Parse a category button label. "All" (any case) selects everything.
    pub fn from_label(label: &str) -> Self {
        if label.eq_ignore_ascii_case("all") || label.is_empty() {
            GalleryFilter::All
        } else {
            GalleryFilter::Category(label.to_string())
        }
    }

    /// Label of the active button.
    pub fn label(&self) -> &str {
        match self {
            GalleryFilter::All => "All",
            GalleryFilter::Category(c) => c,
        }
    }

    /// Whether an image passes this filter. Category match is exact.
    pub fn matches(&self, image: &GalleryImage) -> bool {
        match self {
            GalleryFilter::All => true,
            GalleryFilter::Category(c) => image.category == *c,
        }
    }

    /// Filter a slice of images, preserving order.
    pub fn apply<'a>(&self, images: &'a [GalleryImage]) -> Vec<&'a GalleryImage> {
        images.iter().filter(|img| self.matches(img)).collect()
    }
}

/// URLs of the given images, in order. This is the sequence handed to the lightbox.
pub fn image_urls(images: &[&GalleryImage]) -> Vec<String> {
    images.iter().map(|img| img.url.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images() -> Vec<GalleryImage> {
        vec![
            GalleryImage {
                url: "a.png".to_string(),
                title: "A".to_string(),
                category: "Commercial".to_string(),
            },
            GalleryImage {
                url: "b.png".to_string(),
                title: "B".to_string(),
                category: "Technology".to_string(),
            },
            GalleryImage {
                url: "c.png".to_string(),
                title: "C".to_string(),
                category: "Commercial".to_string(),
            },
        ]
    }

    #[test]
    fn test_all_keeps_everything() {
        let imgs = images();
        assert_eq!(GalleryFilter::All.apply(&imgs).len(), 3);
    }

    #[test]
    fn test_category_filter_preserves_order() {
        let imgs = images();
        let filtered = GalleryFilter::from_label("Commercial").apply(&imgs);
        assert_eq!(image_urls(&filtered), vec!["a.png", "c.png"]);
    }

    #[test]
    fn test_from_label() {
        assert_eq!(GalleryFilter::from_label("All"), GalleryFilter::All);
        assert_eq!(GalleryFilter::from_label("all"), GalleryFilter::All);
        assert_eq!(
            GalleryFilter::from_label("Safety").label(),
            "Safety"
        );
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let imgs = images();
        assert!(GalleryFilter::from_label("Gaming").apply(&imgs).is_empty());
    }
}
