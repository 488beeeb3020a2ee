//! Billing cycle and display currency adjustment
//!
//! The yearly multiplier is applied exactly once, to the fully
//! aggregated raw price. INR is the canonical currency: conversion and
//! rounding happen at display time only and always start from the
//! canonical value, never from a previously converted one.

use rust_decimal::{Decimal, RoundingStrategy};

use botquote_core::models::{BillingCycle, Currency, Price};

/// Apply the billing cycle multiplier to a fully aggregated price
///
/// The contact-sales sentinel passes through unchanged.
pub fn apply_cycle(raw: Price, cycle: BillingCycle, yearly_multiplier: Decimal) -> Price {
    match cycle {
        BillingCycle::Monthly => raw,
        BillingCycle::Yearly => raw.map(|a| a * yearly_multiplier),
    }
}

/// Convert a canonical (INR) price to the display currency
///
/// Rounds to the nearest whole unit, half away from zero. Because the
/// input is always the canonical value, toggling the display currency
/// repeatedly cannot drift.
pub fn to_display(canonical: Price, currency: Currency, usd_to_inr: Decimal) -> Price {
    canonical.map(|a| {
        let converted = match currency {
            Currency::Inr => a,
            Currency::Usd => a / usd_to_inr,
        };
        converted.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
    })
}
