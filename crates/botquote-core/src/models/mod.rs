//! Domain models for BotQuote
//!
//! This module contains all the core domain models used throughout the engine.

pub mod addon;
pub mod price;
pub mod quote;
pub mod request;
pub mod tier;

pub use addon::{AddOn, VoiceProvider};
pub use price::Price;
pub use quote::{PlanPrices, Quote, QuoteBreakdown};
pub use request::{BillingCycle, Currency, PricingRequest, ProductLine};
pub use tier::{UsageTier, UserCountBand, VoiceTier};
