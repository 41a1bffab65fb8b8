//! Plain-text enquiry message.

use std::fmt::Write as _;

use pods_catalog::Catalog;

use crate::form::OrderForm;
use crate::pricing::{PricingTable, QuoteBreakdown};

/// First line of every enquiry.
pub const ENQUIRY_HEADING: &str = "Capsule Beds Enquiry";

/// Series name used when the form points at a series the catalogue lacks.
pub const UNKNOWN_SERIES: &str = "Unknown Series";

/// Compose the enquiry text for a form and its estimate.
pub fn compose_enquiry(
    form: &OrderForm,
    quote: &QuoteBreakdown,
    pricing: &PricingTable,
    catalog: &Catalog,
) -> String {
    let series_name = catalog
        .find_series(form.series_id.as_str())
        .map(|s| s.name.as_str())
        .unwrap_or(UNKNOWN_SERIES);

    let add_ons = if form.add_ons.is_empty() {
        "None".to_string()
    } else {
        form.add_ons
            .iter()
            .map(|a| a.name())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let tax = &pricing.tax_label;
    let buyer = &form.buyer;

    let mut msg = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(msg, "{ENQUIRY_HEADING}");
    let _ = writeln!(msg);
    let _ = writeln!(msg, "Series: {series_name}");
    let _ = writeln!(msg, "Qty (sets): {}", form.quantity);
    let _ = writeln!(msg, "Color: {}", form.color);
    let _ = writeln!(msg, "Material: {}", form.material);
    let _ = writeln!(msg, "Add-ons: {add_ons}");
    let _ = writeln!(msg);
    let _ = writeln!(msg, "Price (ex-{tax}): {}", quote.taxable.display());
    let _ = writeln!(
        msg,
        "{tax} @{}%: {}",
        pricing.tax_rate_percent(),
        quote.tax.display()
    );
    let _ = writeln!(msg, "Total (incl. {tax}): {}", quote.total.display());
    let _ = writeln!(msg);
    let _ = writeln!(msg, "Buyer:");
    let _ = writeln!(msg, "Name: {}", buyer.name.trim());
    let _ = writeln!(msg, "Phone: {}", buyer.phone.trim());
    let _ = writeln!(msg, "Email: {}", buyer.email.trim());
    let _ = writeln!(msg, "Company: {}", or_dash(&buyer.company));
    let _ = writeln!(msg, "GSTIN: {}", or_dash(&buyer.tax_id));
    let _ = writeln!(msg, "City/State: {}", buyer.city.trim());
    let _ = writeln!(msg, "Address: {}", buyer.address.trim());
    let _ = write!(msg, "Access notes: {}", or_dash(&buyer.notes));
    msg
}

/// Trimmed value, or "-" when blank.
pub(crate) fn or_dash(value: &str) -> &str {
    let value = value.trim();
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{BuyerDetails, Quantity};
    use crate::pricing::AddOn;
    use pods_catalog::SeriesId;

    fn setup() -> (Catalog, PricingTable, OrderForm) {
        let catalog = Catalog::bundled().unwrap();
        let mut form = OrderForm::new(&catalog).unwrap();
        form.buyer = BuyerDetails {
            name: "Asha Rao".to_string(),
            phone: "9876543210".to_string(),
            email: "asha@example.com".to_string(),
            city: "Pune, MH".to_string(),
            address: "12 MG Road".to_string(),
            ..Default::default()
        };
        (catalog, PricingTable::default(), form)
    }

    #[test]
    fn test_reference_message() {
        let (catalog, pricing, form) = setup();
        let quote = form.quote(&pricing).unwrap();
        let msg = compose_enquiry(&form, &quote, &pricing, &catalog);
        let series = catalog.find_series("galaxy").unwrap();

        let expected = format!(
            "Capsule Beds Enquiry\n\
             \n\
             Series: {}\n\
             Qty (sets): 1\n\
             Color: White\n\
             Material: ABS\n\
             Add-ons: None\n\
             \n\
             Price (ex-GST): \u{20b9}5,15,000\n\
             GST @18%: \u{20b9}92,700\n\
             Total (incl. GST): \u{20b9}6,07,700\n\
             \n\
             Buyer:\n\
             Name: Asha Rao\n\
             Phone: 9876543210\n\
             Email: asha@example.com\n\
             Company: -\n\
             GSTIN: -\n\
             City/State: Pune, MH\n\
             Address: 12 MG Road\n\
             Access notes: -",
            series.name
        );
        assert_eq!(msg, expected);
    }

    #[test]
    fn test_add_ons_listed_in_order() {
        let (catalog, pricing, mut form) = setup();
        form.set_add_on(AddOn::Table, true);
        form.set_add_on(AddOn::Tv, true);
        form.quantity = Quantity::new(2);
        let quote = form.quote(&pricing).unwrap();
        let msg = compose_enquiry(&form, &quote, &pricing, &catalog);
        assert!(msg.contains("Add-ons: TV Module, Foldable Side Table\n"));
        assert!(msg.contains("Qty (sets): 2\n"));
    }

    #[test]
    fn test_unknown_series_fallback() {
        let (catalog, pricing, mut form) = setup();
        form.series_id = SeriesId::new("retired");
        let quote = form.quote(&pricing).unwrap();
        let msg = compose_enquiry(&form, &quote, &pricing, &catalog);
        assert!(msg.contains("Series: Unknown Series\n"));
    }

    #[test]
    fn test_optional_fields_shown_when_present() {
        let (catalog, pricing, mut form) = setup();
        form.buyer.company = "Stay Inn".to_string();
        form.buyer.tax_id = "27ABCDE1234F1Z5".to_string();
        form.buyer.notes = "Service lift".to_string();
        let quote = form.quote(&pricing).unwrap();
        let msg = compose_enquiry(&form, &quote, &pricing, &catalog);
        assert!(msg.contains("Company: Stay Inn\n"));
        assert!(msg.contains("GSTIN: 27ABCDE1234F1Z5\n"));
        assert!(msg.ends_with("Access notes: Service lift"));
    }
}
