//! Pricing request model
//!
//! A request is constructed fresh by the caller on every interaction
//! (slider move, toggle flip). The engine holds no state between calls;
//! all continuity lives on the caller's side.

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Product line selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProductLine {
    /// Chat bots, metered in chat sessions per month
    #[default]
    Chat,
    /// Voice bots, metered in voice minutes per month
    Voice,
}

impl fmt::Display for ProductLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductLine::Chat => write!(f, "chat"),
            ProductLine::Voice => write!(f, "voice"),
        }
    }
}

/// Billing cycle selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    #[default]
    Monthly,
    /// Billed annually at a discounted monthly-equivalent rate
    Yearly,
}

impl fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BillingCycle::Monthly => write!(f, "monthly"),
            BillingCycle::Yearly => write!(f, "yearly"),
        }
    }
}

/// Display currency
///
/// INR is the canonical currency: every price is computed in INR and
/// converted for display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Inr,
    Usd,
}

impl Currency {
    /// Currency symbol for display
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Inr => "₹",
            Currency::Usd => "$",
        }
    }

    /// ISO currency code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Inr => "INR",
            Currency::Usd => "USD",
        }
    }
}

/// A single pricing computation request
///
/// Usage is UI-clamped to the product line's slider range before it
/// reaches the engine, but the engine is defined for all non-negative
/// values anyway. Negative usage is rejected as invalid input.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PricingRequest {
    /// Product line being priced
    pub product_line: ProductLine,

    /// Chat sessions or voice minutes per month
    #[validate(range(min = 0))]
    pub usage_amount: i64,

    /// Billing cycle
    pub billing_cycle: BillingCycle,

    /// Display currency
    pub currency: Currency,

    /// Selected add-on ids; unknown ids are priced at zero
    #[serde(default)]
    pub selected_add_ons: Vec<String>,

    /// Selected telephony/voice-synthesis provider id (voice line only)
    #[serde(default)]
    pub provider: Option<String>,
}

impl PricingRequest {
    /// Build a bare request with no add-ons or provider selected
    pub fn new(product_line: ProductLine, usage_amount: i64) -> Self {
        Self {
            product_line,
            usage_amount,
            billing_cycle: BillingCycle::Monthly,
            currency: Currency::Inr,
            selected_add_ons: Vec::new(),
            provider: None,
        }
    }
}
