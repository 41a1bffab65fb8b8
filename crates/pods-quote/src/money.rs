//! Money type for quote amounts.
//!
//! Quotes are issued in whole rupees. Amounts are plain integers so repeated
//! calculations over the same inputs always produce the same figures.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Currency symbol prefixed to displayed amounts.
pub const RUPEE_SYMBOL: &str = "\u{20b9}";

/// A rupee amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Money {
    /// Amount in whole rupees.
    pub rupees: i64,
}

impl Money {
    /// Create a new amount.
    pub const fn new(rupees: i64) -> Self {
        Self { rupees }
    }

    /// Zero rupees.
    pub const fn zero() -> Self {
        Self::new(0)
    }

    pub fn is_zero(&self) -> bool {
        self.rupees == 0
    }

    pub fn is_negative(&self) -> bool {
        self.rupees < 0
    }

    /// Add, returning `None` on overflow.
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.rupees.checked_add(other.rupees).map(Money::new)
    }

    /// Multiply by a count, returning `None` on overflow.
    pub fn checked_mul(self, factor: i64) -> Option<Money> {
        self.rupees.checked_mul(factor).map(Money::new)
    }

    /// Apply a rate given in basis points, rounding half up to the nearest rupee.
    ///
    /// ```
    /// use pods_quote::money::Money;
    /// assert_eq!(Money::new(515_000).apply_rate_bps(1800), Some(Money::new(92_700)));
    /// ```
    pub fn apply_rate_bps(self, bps: u32) -> Option<Money> {
        let scaled = self.rupees.checked_mul(i64::from(bps))?;
        let half = if scaled < 0 { -5_000 } else { 5_000 };
        Some(Money::new(scaled.checked_add(half)? / 10_000))
    }

    /// Format with Indian digit grouping and symbol (e.g., "₹6,07,700").
    pub fn display(&self) -> String {
        format!("{}{}", RUPEE_SYMBOL, self.display_amount())
    }

    /// Format with Indian digit grouping, no symbol (e.g., "6,07,700").
    pub fn display_amount(&self) -> String {
        let digits = self.rupees.unsigned_abs().to_string();
        let grouped = group_indian(&digits);
        if self.rupees < 0 {
            format!("-{}", grouped)
        } else {
            grouped
        }
    }
}

/// Group digits as lakh/crore: last three, then pairs.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (front, pair) = rest.split_at(rest.len() - 2);
        groups.push(pair);
        rest = front;
    }
    if !rest.is_empty() {
        groups.push(rest);
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_display_small() {
        assert_eq!(Money::new(0).display_amount(), "0");
        assert_eq!(Money::new(999).display_amount(), "999");
        assert_eq!(Money::new(4_000).display_amount(), "4,000");
    }

    #[test]
    fn test_money_display_lakh_grouping() {
        assert_eq!(Money::new(15_000).display_amount(), "15,000");
        assert_eq!(Money::new(500_000).display_amount(), "5,00,000");
        assert_eq!(Money::new(607_700).display(), "\u{20b9}6,07,700");
        assert_eq!(Money::new(12_345_678).display_amount(), "1,23,45,678");
    }

    #[test]
    fn test_money_display_negative() {
        assert_eq!(Money::new(-1_500).display_amount(), "-1,500");
    }

    #[test]
    fn test_money_addition_and_multiply() {
        let a = Money::new(500_000);
        let b = Money::new(15_000);
        assert_eq!(a.checked_add(b), Some(Money::new(515_000)));
        assert_eq!(b.checked_mul(3), Some(Money::new(45_000)));
    }

    #[test]
    fn test_apply_rate_rounds_half_up() {
        // 18% of 25 = 4.5 -> 5
        assert_eq!(Money::new(25).apply_rate_bps(1800), Some(Money::new(5)));
        // 18% of 24 = 4.32 -> 4
        assert_eq!(Money::new(24).apply_rate_bps(1800), Some(Money::new(4)));
        assert_eq!(Money::new(1_000).apply_rate_bps(0), Some(Money::zero()));
    }

    #[test]
    fn test_checked_overflow() {
        assert_eq!(Money::new(i64::MAX).checked_add(Money::new(1)), None);
        assert_eq!(Money::new(i64::MAX).checked_mul(2), None);
        assert_eq!(Money::new(i64::MAX).apply_rate_bps(1800), None);
    }

    #[test]
    fn test_serde_transparent() {
        let m: Money = serde_json::from_str("500000").unwrap();
        assert_eq!(m, Money::new(500_000));
    }
}
