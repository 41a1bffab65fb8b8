//! Catalogue commands.

use anyhow::{bail, Result};

use super::{CatalogArgs, CatalogCommand};
use crate::context::Context;

/// Run the catalog command.
pub fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    match args.command {
        CatalogCommand::List { series, search } => list_products(&series, &search, ctx),
        CatalogCommand::Show { id } => show_product(&id, ctx),
    }
}

fn list_products(series: &str, search: &str, ctx: &Context) -> Result<()> {
    let site = ctx.site()?;
    if series != pods_catalog::search::ALL_SERIES && site.catalog().find_series(series).is_none() {
        bail!("Unknown series: {}. Run `pods series list` to see the options.", series);
    }

    let products = site.search(series, search);

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.header("Products");
    if products.is_empty() {
        ctx.output.info("No products match the current filters.");
        return Ok(());
    }

    let widths = [18, 34, 10, 18];
    ctx.output.table_row(&["ID", "NAME", "SERIES", "PRICE"], &widths);
    for product in &products {
        ctx.output.table_row(
            &[
                product.id.as_str(),
                &product.name,
                product.series_id.as_str(),
                &product.price_label,
            ],
            &widths,
        );
    }
    ctx.output.debug(&format!(
        "{} of {} products shown",
        products.len(),
        site.catalog().products().len()
    ));

    Ok(())
}

fn show_product(id: &str, ctx: &Context) -> Result<()> {
    let site = ctx.site()?;
    let product = site.catalog().require_product(id)?;

    if ctx.output.is_json() {
        ctx.output.json(product);
        return Ok(());
    }

    ctx.output.header(&product.name);
    ctx.output.text(&format!("  {}", product.description));
    ctx.output.text("");
    ctx.output.kv("id", product.id.as_str());
    let series_name = site
        .catalog()
        .series_of(product)
        .map(|s| s.name.as_str())
        .unwrap_or("-");
    ctx.output.kv("series", series_name);
    ctx.output.kv("price", &product.price_label);
    ctx.output.kv("page", &product.href());

    ctx.output.header("Features");
    for feature in &product.features {
        ctx.output.list_item(feature);
    }

    ctx.output.header("Specifications");
    for (label, value) in product.specifications.rows() {
        ctx.output.kv(label, value);
    }

    ctx.output.header("Images");
    for image in &product.images {
        ctx.output.list_item(image);
    }

    Ok(())
}
