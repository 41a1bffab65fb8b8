//! CLI command implementations.

pub mod catalog;
pub mod config;
pub mod enquire;
pub mod gallery;
pub mod quote;
pub mod route;
pub mod series;

use clap::{Args, Subcommand};

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommand,
}

#[derive(Subcommand)]
pub enum CatalogCommand {
    /// List products, optionally filtered.
    List {
        /// Series id, or "all".
        #[arg(short, long, default_value = "all")]
        series: String,

        /// Case-insensitive text matched against name and description.
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Show one product.
    Show {
        /// Product id.
        id: String,
    },
}

/// Arguments for the series command.
#[derive(Args)]
pub struct SeriesArgs {
    #[command(subcommand)]
    pub command: SeriesCommand,
}

#[derive(Subcommand)]
pub enum SeriesCommand {
    /// List all series.
    List {
        /// Only series that have products in the catalogue.
        #[arg(long)]
        with_products: bool,
    },
    /// Show one series.
    Show {
        /// Series id.
        id: String,
    },
}

/// Arguments for the gallery command.
#[derive(Args)]
pub struct GalleryArgs {
    #[command(subcommand)]
    pub command: GalleryCommand,
}

#[derive(Subcommand)]
pub enum GalleryCommand {
    /// List gallery images.
    List {
        /// Category label, e.g. "Hotels".
        #[arg(short, long, default_value = "All")]
        category: String,
    },
    /// List the gallery categories.
    Categories,
}

/// Arguments for the quote command.
#[derive(Args)]
pub struct QuoteArgs {
    /// Number of sets.
    #[arg(short, long, default_value = "1")]
    pub qty: String,

    /// Add-on to include (panels, tv, bedding, safe, card, table). Repeatable.
    #[arg(short, long = "add-on")]
    pub add_ons: Vec<String>,
}

/// Arguments for the enquire command.
#[derive(Args)]
pub struct EnquireArgs {
    /// Series id.
    #[arg(short, long)]
    pub series: Option<String>,

    /// Number of sets.
    #[arg(short, long, default_value = "1")]
    pub qty: String,

    /// Colour.
    #[arg(long)]
    pub color: Option<String>,

    /// Material; must be offered by the series.
    #[arg(long)]
    pub material: Option<String>,

    /// Add-on to include. Repeatable.
    #[arg(short, long = "add-on")]
    pub add_ons: Vec<String>,

    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long, default_value = "")]
    pub phone: String,

    #[arg(long, default_value = "")]
    pub email: String,

    #[arg(long, default_value = "")]
    pub company: String,

    /// GSTIN.
    #[arg(long, default_value = "")]
    pub gstin: String,

    /// City / state.
    #[arg(long, default_value = "")]
    pub city: String,

    /// Delivery address.
    #[arg(long, default_value = "")]
    pub address: String,

    /// Access notes for delivery.
    #[arg(long, default_value = "")]
    pub notes: String,

    /// Prompt for missing required buyer fields.
    #[arg(short, long)]
    pub interactive: bool,
}

/// Arguments for the route command.
#[derive(Args)]
pub struct RouteArgs {
    /// Site path with optional query, e.g. "/order?series=galaxy".
    /// Without one, every route pattern is listed.
    pub url: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Overwrite an existing config without asking.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
