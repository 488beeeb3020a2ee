//! Price value type
//!
//! A price is either a concrete amount in the canonical currency (INR)
//! or the contact-sales sentinel for volumes beyond the published tiers.
//! The sentinel is data, not an error: it flows through billing and
//! currency adjustments unchanged.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A computed price: a concrete amount or "contact sales"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Price {
    /// Concrete amount in the canonical currency
    Amount(Decimal),
    /// No published price at this volume; sales quote required
    ContactSales,
}

impl Price {
    /// Zero-amount price
    pub const ZERO: Price = Price::Amount(Decimal::ZERO);

    /// Check whether this is the contact-sales sentinel
    pub fn is_contact_sales(&self) -> bool {
        matches!(self, Price::ContactSales)
    }

    /// Extract the amount, if any
    pub fn amount(&self) -> Option<Decimal> {
        match self {
            Price::Amount(a) => Some(*a),
            Price::ContactSales => None,
        }
    }

    /// Apply a numeric adjustment to the amount
    ///
    /// The contact-sales sentinel passes through unchanged; no numeric
    /// operation is ever applied to it.
    pub fn map<F>(self, f: F) -> Price
    where
        F: FnOnce(Decimal) -> Decimal,
    {
        match self {
            Price::Amount(a) => Price::Amount(f(a)),
            Price::ContactSales => Price::ContactSales,
        }
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Price::Amount(amount)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Amount(a) => write!(f, "{}", a),
            Price::ContactSales => write!(f, "Contact Sales"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_map_applies_to_amount() {
        let p = Price::Amount(dec!(1000)).map(|a| a * dec!(0.8));
        assert_eq!(p, Price::Amount(dec!(800.0)));
    }

    #[test]
    fn test_map_passes_sentinel_through() {
        let p = Price::ContactSales.map(|a| a * dec!(0.8));
        assert!(p.is_contact_sales());
    }

    #[test]
    fn test_serde_sentinel() {
        let json = serde_json::to_string(&Price::ContactSales).unwrap();
        assert_eq!(json, "\"contact_sales\"");
    }

    #[test]
    fn test_amount() {
        assert_eq!(Price::Amount(dec!(42)).amount(), Some(dec!(42)));
        assert_eq!(Price::ContactSales.amount(), None);
    }
}
