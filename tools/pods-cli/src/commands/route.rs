//! Route resolution.

use anyhow::{bail, Result};
use pods_core::{Route, ROUTE_PATTERNS};
use serde_json::json;

use super::RouteArgs;
use crate::context::Context;

/// Run the route command.
pub fn run(args: RouteArgs, ctx: &Context) -> Result<()> {
    match args.url {
        Some(url) => resolve(&url, ctx),
        None => list_routes(ctx),
    }
}

fn list_routes(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        let routes: Vec<_> = ROUTE_PATTERNS
            .iter()
            .map(|(pattern, page)| json!({ "pattern": pattern, "page": page }))
            .collect();
        ctx.output.json(&routes);
        return Ok(());
    }

    ctx.output.header("Routes");
    let widths = [16, 20];
    ctx.output.table_row(&["PATTERN", "PAGE"], &widths);
    for (pattern, page) in ROUTE_PATTERNS {
        ctx.output.table_row(&[*pattern, *page], &widths);
    }
    Ok(())
}

fn resolve(url: &str, ctx: &Context) -> Result<()> {
    let Some(route) = Route::parse(url) else {
        bail!("No page matches '{}'", url);
    };
    let site = ctx.site()?;
    let (pattern, page) = route.pattern();
    let title = route.title(&site.config().site.name);

    // The router matches any id; only catalogue ids render a product.
    let target = match &route {
        Route::Product(id) => site.catalog().product(id).map(|p| p.name.clone()),
        Route::Order { series: Some(id) } => {
            site.catalog().find_series(id).map(|s| s.name.clone())
        }
        _ => None,
    };
    let names_entry = matches!(&route, Route::Product(_) | Route::Order { series: Some(_) });
    if names_entry && target.is_none() {
        ctx.output.warn(&format!("'{}' does not name a catalogue entry", url));
    }

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "href": route.href(),
            "pattern": pattern,
            "page": page,
            "title": title,
            "target": target,
        }));
        return Ok(());
    }

    ctx.output.header(&title);
    ctx.output.kv("href", &route.href());
    ctx.output.kv("pattern", pattern);
    ctx.output.kv("page", page);
    if let Some(name) = target {
        ctx.output.kv("target", &name);
    }
    Ok(())
}
