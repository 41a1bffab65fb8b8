//! Gallery commands.

use anyhow::{bail, Result};
use pods_catalog::gallery::GALLERY_CATEGORIES;

use super::{GalleryArgs, GalleryCommand};
use crate::context::Context;

/// Run the gallery command.
pub fn run(args: GalleryArgs, ctx: &Context) -> Result<()> {
    match args.command {
        GalleryCommand::List { category } => list_images(&category, ctx),
        GalleryCommand::Categories => list_categories(ctx),
    }
}

fn list_images(category: &str, ctx: &Context) -> Result<()> {
    let Some(label) = GALLERY_CATEGORIES
        .iter()
        .find(|c| c.eq_ignore_ascii_case(category))
    else {
        bail!(
            "Unknown category: {}. Known: {}",
            category,
            GALLERY_CATEGORIES.join(", ")
        );
    };

    let site = ctx.site()?;
    let images = site.gallery(label);

    if ctx.output.is_json() {
        ctx.output.json(&images);
        return Ok(());
    }

    ctx.output.header(&format!("Gallery: {}", label));
    let widths = [3, 36, 18];
    for (i, image) in images.iter().enumerate() {
        let n = (i + 1).to_string();
        ctx.output
            .table_row(&[&n, &image.title, &image.category], &widths);
        ctx.output.debug(&image.url);
    }
    ctx.output.info(&format!("{} image(s)", images.len()));

    Ok(())
}

fn list_categories(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&GALLERY_CATEGORIES);
        return Ok(());
    }

    ctx.output.header("Gallery Categories");
    for category in GALLERY_CATEGORIES {
        ctx.output.list_item(category);
    }
    Ok(())
}
