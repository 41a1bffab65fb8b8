//! Order submission: validate, compose, hand off.

use pods_catalog::Catalog;

use crate::channel::{ChannelConfig, Handoff, HandoffSink};
use crate::enquiry::compose_enquiry;
use crate::error::QuoteError;
use crate::form::OrderForm;
use crate::pricing::{PricingTable, QuoteBreakdown};

/// What a successful submission produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub quote: QuoteBreakdown,
    pub message: String,
    pub handoff: Handoff,
}

/// Everything a submission needs besides the form itself.
#[derive(Debug, Clone, Copy)]
pub struct SubmitContext<'a> {
    pub catalog: &'a Catalog,
    pub pricing: &'a PricingTable,
    pub channel: &'a ChannelConfig,
}

/// Submit an order form.
///
/// Required buyer fields are checked first; on failure nothing reaches the
/// sink and the form is left untouched for correction.
pub fn submit_order(
    form: &OrderForm,
    ctx: SubmitContext<'_>,
    sink: &mut dyn HandoffSink,
) -> Result<Submission, QuoteError> {
    form.validate()?;
    let quote = form.quote(ctx.pricing)?;
    let message = compose_enquiry(form, &quote, ctx.pricing, ctx.catalog);
    let handoff = ctx.channel.handoff(&message);
    sink.open(&handoff);
    Ok(Submission {
        quote,
        message,
        handoff,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::RecordingSink;
    use crate::form::BuyerDetails;

    #[test]
    fn test_blank_required_field_blocks_handoff() {
        let catalog = Catalog::bundled().unwrap();
        let pricing = PricingTable::default();
        let channel = ChannelConfig::default();
        let ctx = SubmitContext {
            catalog: &catalog,
            pricing: &pricing,
            channel: &channel,
        };
        let mut form = OrderForm::new(&catalog).unwrap();
        form.buyer = BuyerDetails {
            name: " ".to_string(),
            phone: "1".to_string(),
            email: "e@x.in".to_string(),
            city: "Goa".to_string(),
            address: "Beach Rd".to_string(),
            ..Default::default()
        };

        let mut sink = RecordingSink::default();
        let err = submit_order(&form, ctx, &mut sink).unwrap_err();
        assert_eq!(err.to_string(), "Please fill Name.");
        assert!(sink.opened.is_empty());
    }
}
