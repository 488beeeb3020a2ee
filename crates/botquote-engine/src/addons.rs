//! Add-on and provider cost aggregation
//!
//! Catalog lookups are permissive: selections are stored by the caller
//! and may outlive the catalog, so an unknown id prices at zero (with a
//! warning) instead of failing the quote.

use rust_decimal::Decimal;
use tracing::warn;

use botquote_core::models::{AddOn, VoiceProvider};

/// Sum the flat costs of the selected add-ons
pub fn aggregate_add_ons(selected_ids: &[String], catalog: &[AddOn]) -> Decimal {
    selected_ids
        .iter()
        .map(|id| match catalog.iter().find(|a| &a.id == id) {
            Some(add_on) => add_on.flat_cost,
            None => {
                warn!(%id, "unknown add-on id, priced at zero");
                Decimal::ZERO
            }
        })
        .sum()
}

/// Provider cost: per-minute rate times usage, charged once per quote
pub fn provider_cost(
    provider_id: Option<&str>,
    usage_minutes: i64,
    catalog: &[VoiceProvider],
) -> Decimal {
    let Some(id) = provider_id else {
        return Decimal::ZERO;
    };

    match catalog.iter().find(|p| p.id == id) {
        Some(provider) => provider.cost_per_minute * Decimal::from(usage_minutes.max(0)),
        None => {
            warn!(%id, "unknown provider id, priced at zero");
            Decimal::ZERO
        }
    }
}
