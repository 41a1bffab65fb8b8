//! Compose an order enquiry.

use anyhow::{Context as _, Result};
use dialoguer::Input;
use pods_quote::channel::RecordingSink;
use pods_quote::error::{QuoteError, RequiredField};
use pods_quote::form::{BuyerDetails, FormField, OrderForm};
use serde::Serialize;

use super::quote::{parse_add_ons, print_breakdown};
use super::EnquireArgs;
use crate::context::Context;

#[derive(Serialize)]
struct EnquiryOutput<'a> {
    channel: &'a str,
    url: &'a str,
    message: &'a str,
    quote: &'a pods_quote::pricing::QuoteBreakdown,
}

/// Run the enquire command.
pub fn run(args: EnquireArgs, ctx: &Context) -> Result<()> {
    let site = ctx.site()?;
    let catalog = site.catalog();

    let mut form = site.order_form(None)?;
    if let Some(series) = &args.series {
        form.select_series(series, catalog)?;
    }
    form.update(FormField::Quantity, &args.qty, catalog)?;
    if let Some(color) = &args.color {
        form.update(FormField::Color, color, catalog)?;
    }
    if let Some(material) = &args.material {
        form.select_material(material, catalog)?;
    }
    form.add_ons = parse_add_ons(&args.add_ons)?;
    form.buyer = BuyerDetails {
        name: args.name,
        phone: args.phone,
        email: args.email,
        company: args.company,
        tax_id: args.gstin,
        city: args.city,
        address: args.address,
        notes: args.notes,
    };

    if args.interactive && !ctx.output.is_json() {
        prompt_missing(&mut form)?;
    }

    // A terminal cannot open the link; it is printed below.
    let mut sink = RecordingSink::default();
    let submission = match site.submit_order(&form, &mut sink) {
        Ok(submission) => submission,
        Err(QuoteError::MissingFields(fields)) => {
            let flags: Vec<String> = fields.iter().map(|f| format!("--{}", flag(*f))).collect();
            return Err(QuoteError::MissingFields(fields))
                .with_context(|| format!("Pass {} or use --interactive", flags.join(" ")));
        }
        Err(e) => return Err(e.into()),
    };

    if ctx.output.is_json() {
        ctx.output.json(&EnquiryOutput {
            channel: submission.handoff.channel(),
            url: submission.handoff.url(),
            message: &submission.message,
            quote: &submission.quote,
        });
        return Ok(());
    }

    print_breakdown(&ctx.output, &site.config().pricing, &submission.quote);
    ctx.output.header("Message");
    ctx.output.text(&submission.message);
    ctx.output
        .header(&format!("Send via {}", submission.handoff.channel()));
    ctx.output.text(submission.handoff.url());
    ctx.output.success("Enquiry ready");

    Ok(())
}

fn flag(field: RequiredField) -> &'static str {
    match field {
        RequiredField::Name => "name",
        RequiredField::Phone => "phone",
        RequiredField::Email => "email",
        RequiredField::City => "city",
        RequiredField::Address => "address",
        RequiredField::Message => "message",
    }
}

fn prompt_missing(form: &mut OrderForm) -> Result<()> {
    for field in form.buyer.missing_fields() {
        let value: String = Input::new()
            .with_prompt(field.label())
            .validate_with(|input: &String| -> Result<(), &str> {
                if input.trim().is_empty() {
                    Err("Required")
                } else {
                    Ok(())
                }
            })
            .interact_text()
            .with_context(|| format!("Failed to read {}", field.label()))?;

        let slot = match field {
            RequiredField::Name => &mut form.buyer.name,
            RequiredField::Phone => &mut form.buyer.phone,
            RequiredField::Email => &mut form.buyer.email,
            RequiredField::City => &mut form.buyer.city,
            RequiredField::Address => &mut form.buyer.address,
            RequiredField::Message => continue,
        };
        *slot = value;
    }
    Ok(())
}
