//! User-count band lookup and preset tier matching
//!
//! Bands are ordered ascending by `max_users`. Lookup picks the first
//! band covering the usage amount; usage beyond every band falls back to
//! the last band rather than failing. An empty band table is a
//! configuration bug and fails fast.

use rust_decimal::Decimal;
use tracing::debug;

use botquote_core::models::{BillingCycle, PlanPrices, Price, UsageTier, UserCountBand};
use botquote_core::{AppError, AppResult};

/// Find the band covering a usage amount
///
/// Returns the first band with `usage <= max_users`, or the last band
/// when usage exceeds every bound (fallback-to-highest policy).
pub fn find_band(usage: i64, bands: &[UserCountBand]) -> AppResult<&UserCountBand> {
    if usage < 0 {
        return Err(AppError::InvalidInput(format!(
            "usage amount cannot be negative: {}",
            usage
        )));
    }

    let last = bands
        .last()
        .ok_or_else(|| AppError::Config("band table is empty".to_string()))?;

    let band = bands
        .iter()
        .find(|b| usage <= b.max_users)
        .unwrap_or(last);

    debug!(usage, band = band.max_users, "band lookup");
    Ok(band)
}

/// Plan-card prices for a usage amount
///
/// Maps each plan column of the matched band to a price (`None` becomes
/// contact sales) and applies the yearly multiplier exactly once per
/// column.
pub fn plan_prices(
    usage: i64,
    bands: &[UserCountBand],
    cycle: BillingCycle,
    yearly_multiplier: Decimal,
) -> AppResult<PlanPrices> {
    let band = find_band(usage, bands)?;

    let adjust = |price: Option<Decimal>| -> Price {
        let raw = match price {
            Some(p) => Price::Amount(p),
            None => Price::ContactSales,
        };
        match cycle {
            BillingCycle::Monthly => raw,
            BillingCycle::Yearly => raw.map(|a| a * yearly_multiplier),
        }
    };

    Ok(PlanPrices {
        essentials: adjust(band.essentials_price),
        professional: adjust(band.professional_price),
    })
}

/// Index of the preset tier whose nominal threshold equals the usage
///
/// Equality match, not a range match: used to highlight a preset card
/// when the slider lands exactly on its value.
pub fn match_exact_tier(usage: i64, tiers: &[UsageTier]) -> Option<usize> {
    tiers.iter().position(|t| t.threshold == usage)
}
