//! Order form state.
//!
//! The form is a flat record mutated field by field as the buyer types. It
//! is read once on submission to build the estimate and the enquiry text.

use std::fmt;

use serde::{Deserialize, Serialize};

use pods_catalog::series::ProductSeries;
use pods_catalog::{Catalog, SeriesId};

use crate::error::{QuoteError, RequiredField};
use crate::pricing::{AddOn, AddOnSelection, PricingTable, QuoteBreakdown};

/// Colour choices on the order form, default first.
pub const COLORS: &[&str] = &["White", "Pink", "Yellow", "Black", "Blue", "Orange", "Grey"];

/// Number of sets ordered. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct Quantity(u32);

impl Quantity {
    pub const ONE: Quantity = Quantity(1);

    /// Coerce any integer to a quantity, flooring at one.
    pub fn new(n: i64) -> Self {
        Quantity(n.clamp(1, i64::from(u32::MAX)) as u32)
    }

    /// Parse raw input the way a number field does: leading digits are
    /// read, anything non-numeric or non-positive becomes one.
    ///
    /// ```
    /// use pods_quote::form::Quantity;
    /// assert_eq!(Quantity::parse("3").get(), 3);
    /// assert_eq!(Quantity::parse("2.7").get(), 2);
    /// assert_eq!(Quantity::parse("abc").get(), 1);
    /// assert_eq!(Quantity::parse("-4").get(), 1);
    /// ```
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        let (negative, digits) = match raw.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, raw.strip_prefix('+').unwrap_or(raw)),
        };
        let leading: String = digits.chars().take_while(char::is_ascii_digit).collect();
        if negative || leading.is_empty() {
            return Quantity::ONE;
        }
        match leading.parse::<i64>() {
            Ok(n) => Quantity::new(n),
            // Longer than i64: saturate.
            Err(_) => Quantity::new(i64::MAX),
        }
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Quantity::ONE
    }
}

impl TryFrom<i64> for Quantity {
    type Error = String;

    fn try_from(n: i64) -> Result<Self, Self::Error> {
        Ok(Quantity::new(n))
    }
}

impl From<Quantity> for u32 {
    fn from(q: Quantity) -> u32 {
        q.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Buyer contact and delivery details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyerDetails {
    pub name: String,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub company: String,
    /// GSTIN, if the buyer has one.
    #[serde(default)]
    pub tax_id: String,
    /// City / state.
    pub city: String,
    /// Delivery address.
    pub address: String,
    /// Access notes for delivery.
    #[serde(default)]
    pub notes: String,
}

impl BuyerDetails {
    /// Required fields that are blank, in form order.
    pub fn missing_fields(&self) -> Vec<RequiredField> {
        [
            (RequiredField::Name, &self.name),
            (RequiredField::Phone, &self.phone),
            (RequiredField::Email, &self.email),
            (RequiredField::City, &self.city),
            (RequiredField::Address, &self.address),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }
}

/// A single editable input on the order form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Series,
    Quantity,
    Color,
    Material,
    Name,
    Phone,
    Email,
    Company,
    TaxId,
    City,
    Address,
    Notes,
}

/// The order form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderForm {
    pub series_id: SeriesId,
    pub quantity: Quantity,
    pub color: String,
    pub material: String,
    pub add_ons: AddOnSelection,
    pub buyer: BuyerDetails,
}

impl OrderForm {
    /// Form defaults: first series, one set, white, the series' first material.
    pub fn new(catalog: &Catalog) -> Result<Self, QuoteError> {
        let series = catalog.default_series().ok_or(QuoteError::NoSeries)?;
        Ok(Self {
            series_id: series.id.clone(),
            quantity: Quantity::ONE,
            color: COLORS[0].to_string(),
            material: default_material(series),
            add_ons: AddOnSelection::new(),
            buyer: BuyerDetails::default(),
        })
    }

    /// Apply a `?series=` query parameter. Unknown ids are ignored.
    ///
    /// Returns whether the selection changed.
    pub fn preselect_series(&mut self, param: Option<&str>, catalog: &Catalog) -> bool {
        match param {
            Some(id) if id != self.series_id.as_str() && catalog.find_series(id).is_some() => {
                self.select_series(id, catalog).is_ok()
            }
            _ => false,
        }
    }

    /// Switch series. Resets the material if the new series does not offer it.
    pub fn select_series(&mut self, id: &str, catalog: &Catalog) -> Result<(), QuoteError> {
        let series = catalog
            .find_series(id)
            .ok_or_else(|| QuoteError::UnknownSeries(id.to_string()))?;
        self.series_id = series.id.clone();
        if !series.offers_material(&self.material) {
            self.material = default_material(series);
        }
        Ok(())
    }

    /// Set the material, which must be offered by the selected series.
    pub fn select_material(&mut self, material: &str, catalog: &Catalog) -> Result<(), QuoteError> {
        let series = self.series(catalog)?;
        if !series.offers_material(material) {
            return Err(QuoteError::MaterialNotOffered {
                series: series.id.to_string(),
                material: material.to_string(),
            });
        }
        self.material = material.to_string();
        Ok(())
    }

    /// Bind a raw text input to its field.
    pub fn update(&mut self, field: FormField, value: &str, catalog: &Catalog) -> Result<(), QuoteError> {
        match field {
            FormField::Series => return self.select_series(value, catalog),
            FormField::Material => return self.select_material(value, catalog),
            FormField::Quantity => self.quantity = Quantity::parse(value),
            FormField::Color => self.color = value.to_string(),
            FormField::Name => self.buyer.name = value.to_string(),
            FormField::Phone => self.buyer.phone = value.to_string(),
            FormField::Email => self.buyer.email = value.to_string(),
            FormField::Company => self.buyer.company = value.to_string(),
            FormField::TaxId => self.buyer.tax_id = value.to_string(),
            FormField::City => self.buyer.city = value.to_string(),
            FormField::Address => self.buyer.address = value.to_string(),
            FormField::Notes => self.buyer.notes = value.to_string(),
        }
        Ok(())
    }

    /// Enable or disable an add-on checkbox.
    pub fn set_add_on(&mut self, add_on: AddOn, enabled: bool) {
        self.add_ons.set(add_on, enabled);
    }

    /// The selected series.
    pub fn series<'a>(&self, catalog: &'a Catalog) -> Result<&'a ProductSeries, QuoteError> {
        catalog
            .find_series(self.series_id.as_str())
            .ok_or_else(|| QuoteError::UnknownSeries(self.series_id.to_string()))
    }

    /// Current estimate.
    pub fn quote(&self, table: &PricingTable) -> Result<QuoteBreakdown, QuoteError> {
        table.quote(self.quantity, &self.add_ons)
    }

    /// Check required buyer fields.
    pub fn validate(&self) -> Result<(), QuoteError> {
        let missing = self.buyer.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(QuoteError::MissingFields(missing))
        }
    }
}

fn default_material(series: &ProductSeries) -> String {
    series
        .available_materials()
        .first()
        .copied()
        .unwrap_or(pods_catalog::series::DEFAULT_MATERIAL)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn catalog() -> Catalog {
        Catalog::bundled().unwrap()
    }

    fn filled(catalog: &Catalog) -> OrderForm {
        let mut form = OrderForm::new(catalog).unwrap();
        form.buyer = BuyerDetails {
            name: "Asha".to_string(),
            phone: "9876543210".to_string(),
            email: "asha@example.com".to_string(),
            city: "Pune, MH".to_string(),
            address: "12 MG Road".to_string(),
            ..Default::default()
        };
        form
    }

    #[test]
    fn test_defaults() {
        let form = OrderForm::new(&catalog()).unwrap();
        assert_eq!(form.series_id.as_str(), "galaxy");
        assert_eq!(form.quantity, Quantity::ONE);
        assert_eq!(form.color, "White");
        assert_eq!(form.material, "ABS");
        assert!(form.add_ons.is_empty());
    }

    #[test]
    fn test_quantity_coercion() {
        assert_eq!(Quantity::new(0).get(), 1);
        assert_eq!(Quantity::new(-5).get(), 1);
        assert_eq!(Quantity::parse("").get(), 1);
        assert_eq!(Quantity::parse("  12 ").get(), 12);
        assert_eq!(Quantity::parse("0").get(), 1);
        assert_eq!(Quantity::parse("99999999999999999999999").get(), u32::MAX);
    }

    #[test]
    fn test_preselect_known_series() {
        let catalog = catalog();
        let mut form = OrderForm::new(&catalog).unwrap();
        assert!(form.preselect_series(Some("cosmos"), &catalog));
        assert_eq!(form.series_id.as_str(), "cosmos");
    }

    #[test]
    fn test_preselect_unknown_series_ignored() {
        let catalog = catalog();
        let mut form = OrderForm::new(&catalog).unwrap();
        assert!(!form.preselect_series(Some("nope"), &catalog));
        assert!(!form.preselect_series(None, &catalog));
        assert_eq!(form.series_id.as_str(), "galaxy");
    }

    #[test]
    fn test_series_change_resets_unoffered_material() {
        let catalog = catalog();
        let mut form = OrderForm::new(&catalog).unwrap();
        form.select_series("wooden", &catalog).unwrap();
        assert_eq!(form.material, "Wood");

        form.select_series("esports", &catalog).unwrap();
        assert_eq!(form.material, "Wood");

        form.select_series("galaxy", &catalog).unwrap();
        assert_eq!(form.material, "ABS");
    }

    #[test]
    fn test_select_material_checks_series() {
        let catalog = catalog();
        let mut form = OrderForm::new(&catalog).unwrap();
        let err = form.select_material("Wood", &catalog).unwrap_err();
        assert!(matches!(err, QuoteError::MaterialNotOffered { .. }));
        assert_eq!(form.material, "ABS");
    }

    #[test]
    fn test_update_binds_fields() {
        let catalog = catalog();
        let mut form = OrderForm::new(&catalog).unwrap();
        form.update(FormField::Quantity, "4", &catalog).unwrap();
        form.update(FormField::Name, "Ravi", &catalog).unwrap();
        form.update(FormField::Notes, "Lift available", &catalog).unwrap();
        assert_eq!(form.quantity.get(), 4);
        assert_eq!(form.buyer.name, "Ravi");
        assert_eq!(form.buyer.notes, "Lift available");
        assert!(form.update(FormField::Series, "nope", &catalog).is_err());
    }

    #[test]
    fn test_validate_requires_buyer_fields() {
        let catalog = catalog();
        assert!(filled(&catalog).validate().is_ok());

        let mut form = filled(&catalog);
        form.buyer.name.clear();
        form.buyer.address = "   ".to_string();
        match form.validate().unwrap_err() {
            QuoteError::MissingFields(fields) => {
                assert_eq!(fields, vec![RequiredField::Name, RequiredField::Address]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_optional_fields_not_required() {
        let catalog = catalog();
        let form = filled(&catalog);
        assert!(form.buyer.company.is_empty());
        assert!(form.buyer.tax_id.is_empty());
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_quote_follows_form() {
        let catalog = catalog();
        let mut form = filled(&catalog);
        form.set_add_on(AddOn::Bedding, true);
        let q = form.quote(&PricingTable::default()).unwrap();
        assert_eq!(q.add_ons, Money::new(6_000));
    }
}
