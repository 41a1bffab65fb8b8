//! Core of the Pods storefront.
//!
//! Ties the domain crates together behind a single [`Site`]:
//!
//! - `SiteConfig` - `pods.toml` / `pods.json` settings with validation
//! - `SiteApp` - builder that validates config and loads the catalogue
//! - `Route` - the client route table

mod app;
mod config;
mod error;
mod routes;

pub use app::*;
pub use config::*;
pub use error::*;
pub use routes::*;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Route, Site, SiteApp, SiteConfig, SiteError, NAV_LINKS};

    pub use pods_catalog::prelude::*;
    pub use pods_observability::{LogFormat, LogLevel, StructuredLogger};
    pub use pods_quote::prelude::*;
    pub use pods_viewer::prelude::*;
}
