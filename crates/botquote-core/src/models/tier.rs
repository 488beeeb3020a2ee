//! Tier and band tables
//!
//! Pricing tables are immutable, statically configured, and ordered by
//! ascending threshold. Lookup semantics live in the engine crate; these
//! are the row types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Price;

/// Preset tier card shown alongside the usage slider
///
/// `threshold` is the nominal usage the card represents (chat sessions or
/// voice minutes). The slider landing exactly on a threshold highlights
/// that card; the range-based price lookup is separate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageTier {
    /// Marketing name ("Free", "Basic", ...)
    pub name: String,

    /// Nominal usage amount this card represents
    pub threshold: i64,

    /// Published base price for the card
    pub base_price: Price,
}

/// Per-plan price band keyed by user count
///
/// `None` means there is no fixed price at this band; the quote degrades
/// to contact sales, never to an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCountBand {
    /// Upper bound (inclusive) of active users covered by this band
    pub max_users: i64,

    /// Essentials plan monthly price, if published
    pub essentials_price: Option<Decimal>,

    /// Professional plan monthly price, if published
    pub professional_price: Option<Decimal>,
}

/// Voice pricing tier with flat overage billing
///
/// Unlike the chat line (interpolated between anchor prices), voice tiers
/// charge a flat per-minute rate for minutes past the tier floor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceTier {
    /// Marketing name ("Basic", "Professional", "Enterprise")
    pub name: String,

    /// Lowest minute count in the tier; overage counts from here
    pub min_minutes: i64,

    /// Highest minute count in the tier (None = unbounded)
    pub max_minutes: Option<i64>,

    /// Base price for the tier floor
    pub base_price: Price,

    /// Flat rate per minute past the tier floor
    pub overage_per_minute: Decimal,
}

impl VoiceTier {
    /// Check whether a minute count falls within this tier
    pub fn covers(&self, minutes: i64) -> bool {
        self.max_minutes.map_or(true, |max| minutes <= max)
    }
}
