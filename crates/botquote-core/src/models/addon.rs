//! Add-on and provider catalogs
//!
//! Catalogs evolve independently of stored selections, so lookups by id
//! are permissive: an unknown id prices at zero rather than failing.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Flat-fee add-on (WhatsApp channel, custom voice, analytics, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddOn {
    /// Stable identifier stored in selections
    pub id: String,

    /// Display name
    pub name: String,

    /// Flat monthly cost in the canonical currency
    pub flat_cost: Decimal,
}

/// Telephony / voice-synthesis provider, billed per minute of usage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceProvider {
    /// Stable identifier stored in selections
    pub id: String,

    /// Display name
    pub name: String,

    /// Cost per voice minute in the canonical currency
    pub cost_per_minute: Decimal,
}
