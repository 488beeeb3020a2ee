//! Quote output models
//!
//! A quote is the engine's complete answer for one request: the display
//! total, the canonical (INR, unrounded) total the caller should store,
//! the tier label, the preset-card highlight, and a per-component
//! breakdown for the summary panel.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{BillingCycle, Currency, Price, ProductLine};

/// Per-component price breakdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteBreakdown {
    /// Base price from the product line's tier rules (pre-discount)
    pub base: Price,

    /// Sum of selected flat add-on costs
    pub add_ons: Decimal,

    /// Provider cost (rate per minute times usage), voice line only
    pub provider: Decimal,

    /// Whether the yearly multiplier was applied to the total
    pub yearly_discount_applied: bool,
}

/// A computed price quote
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    /// Product line the quote is for
    pub product_line: ProductLine,

    /// Usage amount the quote was computed at
    pub usage_amount: i64,

    /// Billing cycle the quote was computed for
    pub billing_cycle: BillingCycle,

    /// Display currency
    pub currency: Currency,

    /// Currency symbol for rendering
    pub currency_symbol: String,

    /// Total in the display currency, rounded to whole units
    pub total: Price,

    /// Total in the canonical currency (INR), unrounded
    ///
    /// Repeated currency toggling must always convert from this value;
    /// chaining conversions through rounded display values drifts.
    pub canonical_total: Price,

    /// Marketing tier label for the usage amount
    pub tier_label: String,

    /// Index of the preset tier card exactly matching the usage, if any
    pub highlighted_tier: Option<usize>,

    /// Component breakdown (pre-discount amounts)
    pub breakdown: QuoteBreakdown,
}

impl Quote {
    /// Display text for the total ("Free", "Contact Sales", or symbol + amount)
    pub fn display_total(&self) -> String {
        match self.total {
            Price::ContactSales => "Contact Sales".to_string(),
            Price::Amount(a) if a.is_zero() => "Free".to_string(),
            Price::Amount(a) => format!("{}{}", self.currency_symbol, group_thousands(a)),
        }
    }
}

/// Plan-card prices for a user-count band
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanPrices {
    /// Essentials plan price (contact sales when unpublished)
    pub essentials: Price,

    /// Professional plan price (contact sales when unpublished)
    pub professional: Price,
}

/// Render a non-negative whole amount with thousands separators
pub fn group_thousands(amount: Decimal) -> String {
    let whole = amount.trunc().to_string();
    let digits = whole.trim_start_matches('-');
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if whole.starts_with('-') {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
