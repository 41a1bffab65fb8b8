//! Configuration management commands.

use std::fs;

use anyhow::{bail, Context as _, Result};
use dialoguer::Confirm;
use pods_core::default_config_template;

use super::{ConfigArgs, ConfigCommand};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let site = &ctx.config.site;
    ctx.output.info("");
    ctx.output.info("[site]");
    ctx.output.kv("name", &site.name);
    ctx.output.kv("title", &site.title);
    if let Some(css) = &site.css {
        ctx.output.kv("css", css);
    }
    ctx.output.kv("log_level", site.log_level.as_str());

    let pricing = &ctx.config.pricing;
    ctx.output.info("");
    ctx.output.info("[pricing]");
    ctx.output.kv("base_per_set", &pricing.base_per_set.display());
    ctx.output.kv("delivery_per_set", &pricing.delivery_per_set.display());
    ctx.output.kv(
        "tax",
        &format!("{} @{}%", pricing.tax_label, pricing.tax_rate_percent()),
    );
    for add_on in pods_quote::pricing::AddOn::ALL {
        ctx.output
            .kv(&format!("add_ons.{}", add_on.key()), &pricing.add_on_label(add_on));
    }

    let enquiry = &ctx.config.enquiry;
    ctx.output.info("");
    ctx.output.info("[enquiry]");
    ctx.output.kv(
        "whatsapp_number",
        enquiry.whatsapp().unwrap_or("(not configured, using email)"),
    );
    ctx.output.kv("fallback_email", &enquiry.fallback_email);
    ctx.output.kv("subject", &enquiry.subject);

    let viewer = &ctx.config.viewer;
    ctx.output.info("");
    ctx.output.info("[viewer]");
    ctx.output.kv(
        "zoom",
        &format!(
            "x{} steps within [{}, {}]",
            viewer.zoom_step, viewer.min_zoom, viewer.max_zoom
        ),
    );
    ctx.output.kv("double_click_zoom", &viewer.double_click_zoom.to_string());
    ctx.output.kv("thumbnail_limit", &viewer.thumbnail_limit.to_string());

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.default_config_path();

    if config_path.exists() && !force {
        if ctx.output.is_json() {
            bail!(
                "Config file already exists: {}. Use --force to overwrite.",
                config_path.display()
            );
        }
        let overwrite = Confirm::new()
            .with_prompt(format!("{} exists. Overwrite?", config_path.display()))
            .default(false)
            .interact()
            .context("Failed to read confirmation")?;
        if !overwrite {
            ctx.output.info("Left existing config unchanged");
            return Ok(());
        }
    }

    fs::write(&config_path, default_config_template())
        .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let mut warnings: Vec<String> = Vec::new();

    if ctx.config_path.is_none() {
        warnings.push("No config file found; defaults are in use".to_string());
    }
    if ctx.config.enquiry.whatsapp().is_none() {
        warnings.push(format!(
            "enquiry.whatsapp_number is not set; enquiries go to {}",
            ctx.config.enquiry.fallback_email
        ));
    }
    if ctx.config.viewer.thumbnail_limit < 2 {
        warnings.push("viewer.thumbnail_limit below 2 hides thumbnails entirely".to_string());
    }

    if let Err(e) = ctx.config.validate() {
        for warning in &warnings {
            ctx.output.warn(&format!("Warning: {}", warning));
        }
        return Err(e).context("Configuration is invalid");
    }

    // Loading the catalogue catches bad bundled data too.
    ctx.site()?;

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "valid": true, "warnings": warnings }));
    } else if warnings.is_empty() {
        ctx.output.success("Configuration is valid");
    } else {
        ctx.output.success("Configuration is valid (with warnings)");
    }

    Ok(())
}
