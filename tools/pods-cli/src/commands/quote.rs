//! Price an order.

use anyhow::Result;
use pods_quote::form::Quantity;
use pods_quote::pricing::{AddOn, AddOnSelection, PricingTable, QuoteBreakdown};

use super::QuoteArgs;
use crate::context::Context;
use crate::output::Output;

/// Run the quote command.
pub fn run(args: QuoteArgs, ctx: &Context) -> Result<()> {
    let pricing = &ctx.config.pricing;
    pricing.validate()?;

    let quantity = Quantity::parse(&args.qty);
    if quantity.get().to_string() != args.qty.trim() {
        ctx.output
            .warn(&format!("Quantity '{}' read as {}", args.qty, quantity));
    }
    let add_ons = parse_add_ons(&args.add_ons)?;

    let quote = pricing.quote(quantity, &add_ons)?;

    if ctx.output.is_json() {
        ctx.output.json(&quote);
        return Ok(());
    }

    print_breakdown(&ctx.output, pricing, &quote);
    Ok(())
}

/// Parse repeatable `--add-on` keys.
pub fn parse_add_ons(keys: &[String]) -> Result<AddOnSelection> {
    let mut selection = AddOnSelection::new();
    for key in keys {
        // Also accept comma-separated lists.
        for part in key.split(',').filter(|p| !p.trim().is_empty()) {
            selection.set(AddOn::from_key(part)?, true);
        }
    }
    Ok(selection)
}

/// Print a price breakdown table.
pub fn print_breakdown(output: &Output, pricing: &PricingTable, quote: &QuoteBreakdown) {
    output.header(&format!("Estimate for {} set(s)", quote.quantity));
    output.price("Base", quote.base);
    output.price("Delivery", quote.delivery);
    for line in &quote.add_on_lines {
        output.price(&format!("  {}", line.add_on.name()), line.subtotal);
    }
    output.price(&format!("Price (ex-{})", pricing.tax_label), quote.taxable);
    output.price(
        &format!("{} @{}%", pricing.tax_label, pricing.tax_rate_percent()),
        quote.tax,
    );
    output.total(&format!("Total (incl. {})", pricing.tax_label), quote.total);
}
