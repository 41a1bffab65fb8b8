//! Pods CLI - Command line access to the capsule-bed storefront data.
//!
//! Commands:
//! - `pods catalog` - List and inspect products
//! - `pods series` - List product series
//! - `pods gallery` - List gallery images
//! - `pods quote` - Price an order
//! - `pods enquire` - Compose an enquiry and print its hand-off link
//! - `pods route` - Resolve a site URL to its page
//! - `pods config` - Manage configuration

mod commands;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    CatalogArgs, ConfigArgs, EnquireArgs, GalleryArgs, QuoteArgs, RouteArgs, SeriesArgs,
};

/// Pods CLI - Browse the catalogue, price orders and compose enquiries
#[derive(Parser)]
#[command(name = "pods")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List and inspect products
    Catalog(CatalogArgs),

    /// List product series
    Series(SeriesArgs),

    /// List gallery images
    Gallery(GalleryArgs),

    /// Price an order
    Quote(QuoteArgs),

    /// Compose an order enquiry
    Enquire(EnquireArgs),

    /// Resolve a site URL to its page
    Route(RouteArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let ctx = match context::Context::load(cli.config.as_deref(), output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Catalog(args) => commands::catalog::run(args, &ctx),
        Commands::Series(args) => commands::series::run(args, &ctx),
        Commands::Gallery(args) => commands::gallery::run(args, &ctx),
        Commands::Quote(args) => commands::quote::run(args, &ctx),
        Commands::Enquire(args) => commands::enquire::run(args, &ctx),
        Commands::Route(args) => commands::route::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
