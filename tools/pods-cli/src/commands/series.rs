//! Series commands.

use anyhow::Result;
use pods_catalog::series::ProductSeries;

use super::{SeriesArgs, SeriesCommand};
use crate::context::Context;

/// Run the series command.
pub fn run(args: SeriesArgs, ctx: &Context) -> Result<()> {
    match args.command {
        SeriesCommand::List { with_products } => list_series(with_products, ctx),
        SeriesCommand::Show { id } => show_series(&id, ctx),
    }
}

fn list_series(with_products: bool, ctx: &Context) -> Result<()> {
    let site = ctx.site()?;
    let catalog = site.catalog();
    let series: Vec<&ProductSeries> = if with_products {
        catalog.series_with_products()
    } else {
        catalog.series().iter().collect()
    };

    if ctx.output.is_json() {
        ctx.output.json(&series);
        return Ok(());
    }

    ctx.output.header("Product Series");
    let widths = [10, 26, 8, 20];
    ctx.output.table_row(&["ID", "NAME", "MODELS", "MATERIALS"], &widths);
    for s in series {
        let models = catalog.products_in_series(&s.id).count().to_string();
        ctx.output.table_row(
            &[
                s.id.as_str(),
                &s.name,
                &models,
                &s.available_materials().join(", "),
            ],
            &widths,
        );
    }

    Ok(())
}

fn show_series(id: &str, ctx: &Context) -> Result<()> {
    let site = ctx.site()?;
    let series = site.catalog().require_series(id)?;

    if ctx.output.is_json() {
        ctx.output.json(series);
        return Ok(());
    }

    ctx.output.header(&series.name);
    ctx.output.text(&format!("  {}", series.description));
    ctx.output.kv("order", &series.order_href());

    if !series.models.is_empty() {
        ctx.output.header("Models");
        for model in &series.models {
            ctx.output.list_item(model);
        }
    }

    if !series.sizes.is_empty() {
        ctx.output.header("Sizes");
        for size in &series.sizes {
            ctx.output.kv(&size.label, &size.dimensions);
        }
    }

    ctx.output.header("Options");
    ctx.output.kv("colors", &series.colors.join(", "));
    let materials: Vec<String> = series
        .available_materials()
        .into_iter()
        .map(ProductSeries::material_label)
        .collect();
    ctx.output.kv("materials", &materials.join(", "));
    if !series.applications.is_empty() {
        ctx.output.kv("applications", &series.applications.join(", "));
    }

    Ok(())
}
