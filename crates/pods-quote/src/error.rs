//! Quote and enquiry error types.

use std::fmt;

use thiserror::Error;

use pods_catalog::CatalogError;

/// A field the buyer must fill before an enquiry is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredField {
    Name,
    Phone,
    Email,
    City,
    Address,
    Message,
}

impl RequiredField {
    /// Label shown to the buyer.
    pub fn label(&self) -> &'static str {
        match self {
            RequiredField::Name => "Name",
            RequiredField::Phone => "Phone",
            RequiredField::Email => "Email",
            RequiredField::City => "City/State",
            RequiredField::Address => "Delivery Address",
            RequiredField::Message => "Message",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Join labels as "A, B and C".
fn join_labels(fields: &[RequiredField]) -> String {
    match fields {
        [] => String::new(),
        [only] => only.label().to_string(),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(RequiredField::label).collect();
            format!("{} and {}", head.join(", "), last.label())
        }
    }
}

/// Errors that can occur while pricing or submitting an enquiry.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// Required buyer fields are blank.
    #[error("Please fill {}.", join_labels(.0))]
    MissingFields(Vec<RequiredField>),

    /// The selected series is not in the catalogue.
    #[error("Unknown series: {0}")]
    UnknownSeries(String),

    /// The catalogue has no series to order from.
    #[error("Catalogue has no product series")]
    NoSeries,

    /// The selected material is not offered for the series.
    #[error("Material {material} is not offered for series {series}")]
    MaterialNotOffered { series: String, material: String },

    /// Unknown add-on key.
    #[error("Unknown add-on: {0}")]
    UnknownAddOn(String),

    /// Pricing table values are out of range.
    #[error("Invalid pricing: {0}")]
    InvalidPricing(String),

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in price calculation")]
    Overflow,

    /// Catalogue error.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_message_lists_all() {
        let err = QuoteError::MissingFields(vec![
            RequiredField::Name,
            RequiredField::Phone,
            RequiredField::Email,
            RequiredField::City,
            RequiredField::Address,
        ]);
        assert_eq!(
            err.to_string(),
            "Please fill Name, Phone, Email, City/State and Delivery Address."
        );
    }

    #[test]
    fn test_missing_fields_message_single() {
        let err = QuoteError::MissingFields(vec![RequiredField::Email]);
        assert_eq!(err.to_string(), "Please fill Email.");
    }
}
