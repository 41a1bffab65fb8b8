//! Price estimates for an order.
//!
//! The estimate is a pure function of the quantity and the enabled add-ons:
//!
//! ```text
//! base     = base_per_set     * qty
//! delivery = delivery_per_set * qty
//! add_ons  = sum(price(a) * qty) for each enabled add-on
//! taxable  = base + delivery + add_ons
//! tax      = round_half_up(taxable * tax_rate)
//! total    = taxable + tax
//! ```

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::QuoteError;
use crate::form::Quantity;
use crate::money::Money;

/// An optional extra, priced per set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddOn {
    Panels,
    Tv,
    Bedding,
    Safe,
    Card,
    Table,
}

impl AddOn {
    /// Every add-on in display order.
    pub const ALL: [AddOn; 6] = [
        AddOn::Panels,
        AddOn::Tv,
        AddOn::Bedding,
        AddOn::Safe,
        AddOn::Card,
        AddOn::Table,
    ];

    /// Config and CLI key.
    pub fn key(&self) -> &'static str {
        match self {
            AddOn::Panels => "panels",
            AddOn::Tv => "tv",
            AddOn::Bedding => "bedding",
            AddOn::Safe => "safe",
            AddOn::Card => "card",
            AddOn::Table => "table",
        }
    }

    /// Short name used in the enquiry message.
    pub fn name(&self) -> &'static str {
        match self {
            AddOn::Panels => "Panels",
            AddOn::Tv => "TV Module",
            AddOn::Bedding => "Bedding Set",
            AddOn::Safe => "Safe Box",
            AddOn::Card => "Card Access",
            AddOn::Table => "Foldable Side Table",
        }
    }

    /// Checkbox label on the order form.
    pub fn form_label(&self) -> &'static str {
        match self {
            AddOn::Panels => "Panels (Side/Back/Top)",
            other => other.name(),
        }
    }

    /// Parse a config/CLI key.
    pub fn from_key(key: &str) -> Result<Self, QuoteError> {
        AddOn::ALL
            .into_iter()
            .find(|a| a.key().eq_ignore_ascii_case(key.trim()))
            .ok_or_else(|| QuoteError::UnknownAddOn(key.to_string()))
    }
}

impl fmt::Display for AddOn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The set of enabled add-ons.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddOnSelection(BTreeSet<AddOn>);

impl AddOnSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable an add-on.
    pub fn set(&mut self, add_on: AddOn, enabled: bool) {
        if enabled {
            self.0.insert(add_on);
        } else {
            self.0.remove(&add_on);
        }
    }

    pub fn is_enabled(&self, add_on: AddOn) -> bool {
        self.0.contains(&add_on)
    }

    /// Enabled add-ons in display order.
    pub fn iter(&self) -> impl Iterator<Item = AddOn> + '_ {
        self.0.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<AddOn> for AddOnSelection {
    fn from_iter<I: IntoIterator<Item = AddOn>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Per-set price of each add-on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddOnPrices {
    pub panels: Money,
    pub tv: Money,
    pub bedding: Money,
    pub safe: Money,
    pub card: Money,
    pub table: Money,
}

impl AddOnPrices {
    pub fn price(&self, add_on: AddOn) -> Money {
        match add_on {
            AddOn::Panels => self.panels,
            AddOn::Tv => self.tv,
            AddOn::Bedding => self.bedding,
            AddOn::Safe => self.safe,
            AddOn::Card => self.card,
            AddOn::Table => self.table,
        }
    }
}

impl Default for AddOnPrices {
    fn default() -> Self {
        Self {
            panels: Money::new(25_000),
            tv: Money::new(30_000),
            bedding: Money::new(6_000),
            safe: Money::new(8_000),
            card: Money::new(5_000),
            table: Money::new(4_000),
        }
    }
}

/// Constant price table the estimate is computed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingTable {
    /// Price of one set (two pods, upper + lower).
    #[serde(default = "default_base")]
    pub base_per_set: Money,
    /// Delivery charge per set.
    #[serde(default = "default_delivery")]
    pub delivery_per_set: Money,
    /// Tax rate in basis points (1800 = 18%).
    #[serde(default = "default_tax_rate_bps")]
    pub tax_rate_bps: u32,
    /// Tax name shown in breakdowns.
    #[serde(default = "default_tax_label")]
    pub tax_label: String,
    #[serde(default)]
    pub add_ons: AddOnPrices,
}

fn default_base() -> Money {
    Money::new(500_000)
}

fn default_delivery() -> Money {
    Money::new(15_000)
}

fn default_tax_rate_bps() -> u32 {
    1_800
}

fn default_tax_label() -> String {
    "GST".to_string()
}

impl Default for PricingTable {
    fn default() -> Self {
        Self {
            base_per_set: default_base(),
            delivery_per_set: default_delivery(),
            tax_rate_bps: default_tax_rate_bps(),
            tax_label: default_tax_label(),
            add_ons: AddOnPrices::default(),
        }
    }
}

impl PricingTable {
    /// Reject tables that would produce negative or nonsensical estimates.
    pub fn validate(&self) -> Result<(), QuoteError> {
        if !self.base_per_set.rupees.is_positive() {
            return Err(QuoteError::InvalidPricing(
                "base_per_set must be positive".to_string(),
            ));
        }
        if self.delivery_per_set.is_negative() {
            return Err(QuoteError::InvalidPricing(
                "delivery_per_set must not be negative".to_string(),
            ));
        }
        if let Some(a) = AddOn::ALL
            .into_iter()
            .find(|a| self.add_ons.price(*a).is_negative())
        {
            return Err(QuoteError::InvalidPricing(format!(
                "add-on {} must not be negative",
                a.key()
            )));
        }
        if self.tax_rate_bps > 10_000 {
            return Err(QuoteError::InvalidPricing(format!(
                "tax rate {} bps exceeds 100%",
                self.tax_rate_bps
            )));
        }
        Ok(())
    }

    /// Tax rate as a percentage string, e.g. "18" or "12.5".
    pub fn tax_rate_percent(&self) -> String {
        let whole = self.tax_rate_bps / 100;
        let frac = self.tax_rate_bps % 100;
        if frac == 0 {
            whole.to_string()
        } else {
            format!("{}.{:02}", whole, frac)
                .trim_end_matches('0')
                .to_string()
        }
    }

    /// Checkbox label with price, e.g. "TV Module (+₹30,000)".
    pub fn add_on_label(&self, add_on: AddOn) -> String {
        format!(
            "{} (+{})",
            add_on.form_label(),
            self.add_ons.price(add_on).display()
        )
    }

    /// Compute the estimate for `quantity` sets with `add_ons` enabled.
    pub fn quote(
        &self,
        quantity: Quantity,
        add_ons: &AddOnSelection,
    ) -> Result<QuoteBreakdown, QuoteError> {
        let qty = i64::from(quantity.get());

        let base = self.base_per_set.checked_mul(qty).ok_or(QuoteError::Overflow)?;
        let delivery = self
            .delivery_per_set
            .checked_mul(qty)
            .ok_or(QuoteError::Overflow)?;

        let mut lines = Vec::with_capacity(add_ons.len());
        let mut add_on_total = Money::zero();
        for add_on in add_ons.iter() {
            let unit = self.add_ons.price(add_on);
            let subtotal = unit.checked_mul(qty).ok_or(QuoteError::Overflow)?;
            add_on_total = add_on_total
                .checked_add(subtotal)
                .ok_or(QuoteError::Overflow)?;
            lines.push(AddOnLine {
                add_on,
                unit_price: unit,
                subtotal,
            });
        }

        let taxable = base
            .checked_add(delivery)
            .and_then(|m| m.checked_add(add_on_total))
            .ok_or(QuoteError::Overflow)?;
        let tax = taxable
            .apply_rate_bps(self.tax_rate_bps)
            .ok_or(QuoteError::Overflow)?;
        let total = taxable.checked_add(tax).ok_or(QuoteError::Overflow)?;

        Ok(QuoteBreakdown {
            quantity,
            base,
            delivery,
            add_ons: add_on_total,
            add_on_lines: lines,
            taxable,
            tax,
            total,
        })
    }
}

/// One enabled add-on in a breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddOnLine {
    pub add_on: AddOn,
    pub unit_price: Money,
    /// unit_price * quantity.
    pub subtotal: Money,
}

/// Complete price breakdown for an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteBreakdown {
    pub quantity: Quantity,
    pub base: Money,
    pub delivery: Money,
    /// Sum of all add-on subtotals.
    pub add_ons: Money,
    pub add_on_lines: Vec<AddOnLine>,
    /// base + delivery + add_ons, before tax.
    pub taxable: Money,
    pub tax: Money,
    /// taxable + tax.
    pub total: Money,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_quote() {
        let table = PricingTable::default();
        let q = table.quote(Quantity::ONE, &AddOnSelection::new()).unwrap();

        assert_eq!(q.base, Money::new(500_000));
        assert_eq!(q.delivery, Money::new(15_000));
        assert_eq!(q.add_ons, Money::zero());
        assert_eq!(q.taxable, Money::new(515_000));
        assert_eq!(q.tax, Money::new(92_700));
        assert_eq!(q.total, Money::new(607_700));
    }

    #[test]
    fn test_add_ons_priced_per_set() {
        let table = PricingTable::default();
        let sel: AddOnSelection = [AddOn::Tv, AddOn::Table].into_iter().collect();
        let q = table.quote(Quantity::new(3), &sel).unwrap();

        assert_eq!(q.add_on_lines.len(), 2);
        assert_eq!(q.add_on_lines[0].add_on, AddOn::Tv);
        assert_eq!(q.add_on_lines[0].subtotal, Money::new(90_000));
        assert_eq!(q.add_on_lines[1].subtotal, Money::new(12_000));
        assert_eq!(q.add_ons, Money::new(102_000));
        assert_eq!(q.taxable, Money::new(1_500_000 + 45_000 + 102_000));
    }

    #[test]
    fn test_all_add_ons() {
        let table = PricingTable::default();
        let sel: AddOnSelection = AddOn::ALL.into_iter().collect();
        let q = table.quote(Quantity::ONE, &sel).unwrap();
        assert_eq!(q.add_ons, Money::new(78_000));
        assert_eq!(q.taxable, Money::new(593_000));
        assert_eq!(q.tax, Money::new(106_740));
        assert_eq!(q.total, Money::new(699_740));
    }

    #[test]
    fn test_quote_is_deterministic() {
        let table = PricingTable::default();
        let sel: AddOnSelection = [AddOn::Safe].into_iter().collect();
        let a = table.quote(Quantity::new(7), &sel).unwrap();
        let b = table.quote(Quantity::new(7), &sel).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_overflow_is_reported() {
        let table = PricingTable {
            base_per_set: Money::new(i64::MAX / 2),
            ..Default::default()
        };
        let err = table
            .quote(Quantity::new(4), &AddOnSelection::new())
            .unwrap_err();
        assert!(matches!(err, QuoteError::Overflow));
    }

    #[test]
    fn test_validate() {
        assert!(PricingTable::default().validate().is_ok());

        let bad = PricingTable {
            tax_rate_bps: 10_001,
            ..Default::default()
        };
        assert!(bad.validate().is_err());

        let bad = PricingTable {
            base_per_set: Money::zero(),
            ..Default::default()
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_tax_rate_percent() {
        assert_eq!(PricingTable::default().tax_rate_percent(), "18");
        let t = PricingTable {
            tax_rate_bps: 1250,
            ..Default::default()
        };
        assert_eq!(t.tax_rate_percent(), "12.5");
    }

    #[test]
    fn test_add_on_label() {
        let t = PricingTable::default();
        assert_eq!(t.add_on_label(AddOn::Tv), "TV Module (+\u{20b9}30,000)");
        assert_eq!(
            t.add_on_label(AddOn::Panels),
            "Panels (Side/Back/Top) (+\u{20b9}25,000)"
        );
    }

    #[test]
    fn test_add_on_keys() {
        assert_eq!(AddOn::from_key("TV").unwrap(), AddOn::Tv);
        assert!(AddOn::from_key("jacuzzi").is_err());
    }

    #[test]
    fn test_selection_set() {
        let mut sel = AddOnSelection::new();
        sel.set(AddOn::Card, true);
        assert!(sel.is_enabled(AddOn::Card));
        sel.set(AddOn::Card, false);
        assert!(sel.is_empty());
    }
}
