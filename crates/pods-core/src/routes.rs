//! Client route table.

use std::fmt;

/// A page on the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Products,
    /// Product detail by id.
    Product(String),
    Catalogue,
    Gallery,
    About,
    Contact,
    /// Order form, optionally preselecting a series.
    Order { series: Option<String> },
}

/// Path pattern and page name for every route, in router order.
pub const ROUTE_PATTERNS: &[(&str, &str)] = &[
    ("/", "HomePage"),
    ("/products", "ProductsPage"),
    ("/products/:id", "ProductDetailPage"),
    ("/catalogue", "CataloguePage"),
    ("/gallery", "GalleryPage"),
    ("/about", "AboutPage"),
    ("/contact", "ContactPage"),
    ("/order", "OrderPage"),
];

/// Header navigation links.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("Home", "/"),
    ("Products", "/products"),
    ("Catalogue", "/catalogue"),
    ("Gallery", "/gallery"),
    ("About", "/about"),
    ("Contact", "/contact"),
    ("Order Now", "/order"),
];

impl Route {
    /// Link target for this route.
    pub fn href(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Products => "/products".to_string(),
            Route::Product(id) => format!("/products/{}", urlencoding::encode(id)),
            Route::Catalogue => "/catalogue".to_string(),
            Route::Gallery => "/gallery".to_string(),
            Route::About => "/about".to_string(),
            Route::Contact => "/contact".to_string(),
            Route::Order { series: None } => "/order".to_string(),
            Route::Order { series: Some(id) } => {
                format!("/order?series={}", urlencoding::encode(id))
            }
        }
    }

    /// Resolve a path with optional query string. Unknown paths give `None`.
    ///
    /// ```
    /// use pods_core::Route;
    /// assert_eq!(
    ///     Route::parse("/order?series=cosmos"),
    ///     Some(Route::Order { series: Some("cosmos".to_string()) })
    /// );
    /// assert_eq!(Route::parse("/products/galaxy-single/"), Some(Route::Product("galaxy-single".to_string())));
    /// assert_eq!(Route::parse("/cart"), None);
    /// ```
    pub fn parse(url: &str) -> Option<Route> {
        let (path, query) = match url.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (url, None),
        };
        let path = path.split('#').next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Some(Route::Home),
            ["products"] => Some(Route::Products),
            ["products", id] => Some(Route::Product(decode(id))),
            ["catalogue"] => Some(Route::Catalogue),
            ["gallery"] => Some(Route::Gallery),
            ["about"] => Some(Route::About),
            ["contact"] => Some(Route::Contact),
            ["order"] => Some(Route::Order {
                series: query.and_then(|q| query_param(q, "series")),
            }),
            _ => None,
        }
    }

    /// Router pattern and page component this route resolves to.
    pub fn pattern(&self) -> (&'static str, &'static str) {
        let index = match self {
            Route::Home => 0,
            Route::Products => 1,
            Route::Product(_) => 2,
            Route::Catalogue => 3,
            Route::Gallery => 4,
            Route::About => 5,
            Route::Contact => 6,
            Route::Order { .. } => 7,
        };
        ROUTE_PATTERNS[index]
    }

    /// Page heading used in the document title.
    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Products | Route::Product(_) => "Products",
            Route::Catalogue => "Catalogue",
            Route::Gallery => "Gallery",
            Route::About => "About",
            Route::Contact => "Contact",
            Route::Order { .. } => "Order Now",
        }
    }

    /// Document title, e.g. "Gallery | BIDUA Pods".
    pub fn title(&self, site_name: &str) -> String {
        match self {
            Route::Home => site_name.to_string(),
            other => format!("{} | {}", other.label(), site_name),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href())
    }
}

fn decode(raw: &str) -> String {
    let plus_decoded = raw.replace('+', " ");
    urlencoding::decode(&plus_decoded)
        .map(|s| s.into_owned())
        .unwrap_or(plus_decoded)
}

/// First non-empty value of `key` in a query string.
pub fn query_param(query: &str, key: &str) -> Option<String> {
    query
        .trim_start_matches('?')
        .split('&')
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(k, _)| decode(k) == key)
        .map(|(_, v)| decode(v))
        .filter(|v| !v.is_empty())
}
