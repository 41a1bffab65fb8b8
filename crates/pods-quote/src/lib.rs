//! Order form, price estimates and enquiry hand-off.
//!
//! - **Pricing**: constant price table, add-ons, derived breakdown
//! - **Form**: order form state with series/material coupling and validation
//! - **Enquiry**: plain-text enquiry message
//! - **Channel**: WhatsApp or mail link, opened through a sink
//! - **Contact**: general contact form
//!
//! # Example
//!
//! ```rust
//! use pods_catalog::Catalog;
//! use pods_quote::prelude::*;
//!
//! let catalog = Catalog::bundled().unwrap();
//! let mut form = OrderForm::new(&catalog).unwrap();
//! form.set_add_on(AddOn::Tv, true);
//!
//! let quote = form.quote(&PricingTable::default()).unwrap();
//! assert_eq!(quote.taxable.display(), "₹5,45,000");
//! assert_eq!(quote.total.display(), "₹6,43,100");
//! ```

pub mod error;
pub mod money;

pub mod channel;
pub mod contact;
pub mod enquiry;
pub mod form;
pub mod pricing;
pub mod submission;

pub use error::{QuoteError, RequiredField};
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{QuoteError, RequiredField};
    pub use crate::money::Money;

    pub use crate::channel::{ChannelConfig, Handoff, HandoffSink, RecordingSink};
    pub use crate::contact::{ContactForm, InquiryType};
    pub use crate::enquiry::compose_enquiry;
    pub use crate::form::{BuyerDetails, FormField, OrderForm, Quantity, COLORS};
    pub use crate::pricing::{AddOn, AddOnLine, AddOnSelection, AddOnPrices, PricingTable, QuoteBreakdown};
    pub use crate::submission::{submit_order, SubmitContext, Submission};
}
