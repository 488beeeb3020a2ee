//! Pricing configuration
//!
//! Static pricing tables with built-in reference defaults. Configuration
//! can be overridden from optional config files and `BOTQUOTE__`-prefixed
//! environment variables using the `config` crate. Malformed tables are a
//! programming/config bug and fail fast at load time.

use config::{Config, Environment, File};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::env;

use crate::error::AppError;
use crate::models::{AddOn, Price, UsageTier, UserCountBand, VoiceProvider, VoiceTier};
use crate::AppResult;

/// Main pricing configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PricingConfig {
    pub chat: ChatPricingConfig,
    pub voice: VoicePricingConfig,
    pub billing: BillingAdjustConfig,
}

/// Chat line configuration
///
/// The chat curve is anchored at the published tier prices and
/// interpolated between them; the anchors live here.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ChatPricingConfig {
    /// Sessions included for free
    pub free_limit: i64,

    /// Sessions covered by the Basic tier
    pub basic_threshold: i64,

    /// Published Basic tier price
    pub basic_price: Decimal,

    /// Sessions covered by the Professional tier
    pub professional_threshold: i64,

    /// Published Professional tier price
    pub professional_price: Decimal,

    /// Sessions beyond which pricing is custom
    pub contact_sales_threshold: i64,

    /// Preset tier cards (also drive exact-match highlighting)
    pub tiers: Vec<UsageTier>,

    /// Flat add-on catalog
    pub add_ons: Vec<AddOn>,

    /// Per-plan price bands keyed by active user count
    pub user_bands: Vec<UserCountBand>,
}

/// Voice line configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct VoicePricingConfig {
    /// Range tiers with flat overage rates
    pub tiers: Vec<VoiceTier>,

    /// Preset tier cards (drive exact-match highlighting)
    pub preset_tiers: Vec<UsageTier>,

    /// Telephony / voice-synthesis provider catalog
    pub providers: Vec<VoiceProvider>,

    /// Flat add-on catalog
    pub add_ons: Vec<AddOn>,

    /// Per-plan price bands keyed by voice minutes
    pub user_bands: Vec<UserCountBand>,
}

/// Billing cycle and currency adjustment configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct BillingAdjustConfig {
    /// Multiplier applied once to the aggregated total on yearly billing
    pub yearly_multiplier: Decimal,

    /// Fixed exchange rate: 1 USD in INR
    pub usd_to_inr: Decimal,
}

impl Default for ChatPricingConfig {
    fn default() -> Self {
        Self {
            free_limit: 50,
            basic_threshold: 60,
            basic_price: dec!(1999),
            professional_threshold: 250,
            professional_price: dec!(6999),
            contact_sales_threshold: 1000,
            tiers: vec![
                preset("Free", 50, Price::ZERO),
                preset("Basic", 60, Price::Amount(dec!(1999))),
                preset("Professional", 250, Price::Amount(dec!(6999))),
                preset("Enterprise", 1000, Price::ContactSales),
            ],
            add_ons: vec![addon("whatsapp", "WhatsApp Integration", dec!(500))],
            user_bands: vec![
                band(60, Some(dec!(1999)), Some(dec!(6999))),
                band(100, Some(dec!(33320)), Some(dec!(93320))),
                band(150, Some(dec!(49970)), Some(dec!(139976))),
                band(200, Some(dec!(66620)), Some(dec!(186640))),
                band(250, Some(dec!(83280)), Some(dec!(233320))),
                band(300, Some(dec!(99930)), None),
                band(350, None, None),
                band(400, None, None),
                band(450, None, None),
                band(500, None, None),
            ],
        }
    }
}

impl Default for VoicePricingConfig {
    fn default() -> Self {
        Self {
            tiers: vec![
                VoiceTier {
                    name: "Basic".to_string(),
                    min_minutes: 1500,
                    max_minutes: Some(2500),
                    base_price: Price::Amount(dec!(14999)),
                    overage_per_minute: dec!(150),
                },
                VoiceTier {
                    name: "Professional".to_string(),
                    min_minutes: 2501,
                    max_minutes: Some(7500),
                    base_price: Price::Amount(dec!(39999)),
                    overage_per_minute: dec!(80),
                },
                VoiceTier {
                    name: "Enterprise".to_string(),
                    min_minutes: 7501,
                    max_minutes: None,
                    base_price: Price::ContactSales,
                    overage_per_minute: Decimal::ZERO,
                },
            ],
            preset_tiers: vec![
                preset("Basic", 1500, Price::Amount(dec!(14999))),
                preset("Professional", 2500, Price::Amount(dec!(39999))),
                preset("Enterprise", 7500, Price::ContactSales),
            ],
            providers: vec![
                provider("plivo", "Plivo", dec!(0.5)),
                provider("twilio", "Twilio", dec!(1.0)),
                provider("elevenlabs", "ElevenLabs", dec!(2.0)),
            ],
            add_ons: vec![
                addon("custom_voice", "Custom Voice", dec!(5000)),
                addon("multi_language", "Multi-language Support", dec!(3000)),
                addon("advanced_analytics", "Advanced Analytics", dec!(2000)),
            ],
            user_bands: vec![
                band(1500, Some(dec!(14999)), Some(dec!(39999))),
                band(2500, Some(dec!(149994)), Some(dec!(324995))),
                band(3500, Some(dec!(209994)), Some(dec!(474995))),
                band(4500, Some(dec!(269994)), None),
                band(5500, None, None),
                band(6500, None, None),
                band(7500, None, None),
            ],
        }
    }
}

impl Default for BillingAdjustConfig {
    fn default() -> Self {
        Self {
            yearly_multiplier: dec!(0.8),
            usd_to_inr: dec!(83),
        }
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            chat: ChatPricingConfig::default(),
            voice: VoicePricingConfig::default(),
            billing: BillingAdjustConfig::default(),
        }
    }
}

fn preset(name: &str, threshold: i64, base_price: Price) -> UsageTier {
    UsageTier {
        name: name.to_string(),
        threshold,
        base_price,
    }
}

fn addon(id: &str, name: &str, flat_cost: Decimal) -> AddOn {
    AddOn {
        id: id.to_string(),
        name: name.to_string(),
        flat_cost,
    }
}

fn provider(id: &str, name: &str, cost_per_minute: Decimal) -> VoiceProvider {
    VoiceProvider {
        id: id.to_string(),
        name: name.to_string(),
        cost_per_minute,
    }
}

fn band(
    max_users: i64,
    essentials_price: Option<Decimal>,
    professional_price: Option<Decimal>,
) -> UserCountBand {
    UserCountBand {
        max_users,
        essentials_price,
        professional_price,
    }
}

impl PricingConfig {
    /// Load configuration from optional files and environment overrides
    ///
    /// Sections absent from every source fall back to the built-in
    /// reference tables. The loaded configuration is validated before it
    /// is returned.
    pub fn load() -> AppResult<Self> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(
                Environment::with_prefix("BOTQUOTE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let loaded: PricingConfig = config.try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> AppResult<Self> {
        let config = Config::builder().add_source(File::with_name(path)).build()?;

        let loaded: PricingConfig = config.try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Validate the pricing tables
    ///
    /// Empty tables, unordered thresholds, negative costs, or a broken
    /// discount/exchange rate are configuration bugs, fatal at startup.
    pub fn validate(&self) -> AppResult<()> {
        self.chat.validate()?;
        self.voice.validate()?;
        self.billing.validate()
    }
}

impl ChatPricingConfig {
    fn validate(&self) -> AppResult<()> {
        let ordered = self.free_limit < self.basic_threshold
            && self.basic_threshold < self.professional_threshold
            && self.professional_threshold < self.contact_sales_threshold;
        if !ordered {
            return Err(AppError::Config(
                "chat thresholds must be strictly ascending".to_string(),
            ));
        }

        if self.free_limit < 0 {
            return Err(AppError::Config(
                "chat free limit cannot be negative".to_string(),
            ));
        }

        if self.basic_price < Decimal::ZERO || self.professional_price < Decimal::ZERO {
            return Err(AppError::Config(
                "chat anchor prices cannot be negative".to_string(),
            ));
        }

        validate_presets("chat", &self.tiers)?;
        validate_add_ons("chat", &self.add_ons)?;
        validate_bands("chat", &self.user_bands)
    }
}

impl VoicePricingConfig {
    fn validate(&self) -> AppResult<()> {
        if self.tiers.is_empty() {
            return Err(AppError::Config("voice tier table is empty".to_string()));
        }

        let mut prev_max: Option<i64> = None;
        for tier in &self.tiers {
            if let Some(max) = tier.max_minutes {
                if max < tier.min_minutes {
                    return Err(AppError::Config(format!(
                        "voice tier '{}' has max below min",
                        tier.name
                    )));
                }
            }
            if let Some(prev) = prev_max {
                if tier.min_minutes <= prev {
                    return Err(AppError::Config(
                        "voice tiers must be ascending and non-overlapping".to_string(),
                    ));
                }
            }
            if tier.overage_per_minute < Decimal::ZERO {
                return Err(AppError::Config(format!(
                    "voice tier '{}' has negative overage rate",
                    tier.name
                )));
            }
            prev_max = tier.max_minutes;
        }
        // Only the last tier may be unbounded
        if self.tiers[..self.tiers.len() - 1]
            .iter()
            .any(|t| t.max_minutes.is_none())
        {
            return Err(AppError::Config(
                "only the last voice tier may be unbounded".to_string(),
            ));
        }

        for p in &self.providers {
            if p.cost_per_minute < Decimal::ZERO {
                return Err(AppError::Config(format!(
                    "provider '{}' has negative per-minute cost",
                    p.id
                )));
            }
        }

        validate_presets("voice", &self.preset_tiers)?;
        validate_add_ons("voice", &self.add_ons)?;
        validate_bands("voice", &self.user_bands)
    }
}

impl BillingAdjustConfig {
    fn validate(&self) -> AppResult<()> {
        if self.yearly_multiplier <= Decimal::ZERO || self.yearly_multiplier > Decimal::ONE {
            return Err(AppError::Config(
                "yearly multiplier must be within (0, 1]".to_string(),
            ));
        }

        if self.usd_to_inr <= Decimal::ZERO {
            return Err(AppError::Config(
                "exchange rate must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

fn validate_presets(line: &str, tiers: &[UsageTier]) -> AppResult<()> {
    if tiers.is_empty() {
        return Err(AppError::Config(format!("{} preset tiers are empty", line)));
    }

    for pair in tiers.windows(2) {
        if pair[1].threshold <= pair[0].threshold {
            return Err(AppError::Config(format!(
                "{} preset tiers must be strictly ascending",
                line
            )));
        }
    }

    Ok(())
}

fn validate_add_ons(line: &str, add_ons: &[AddOn]) -> AppResult<()> {
    for a in add_ons {
        if a.flat_cost < Decimal::ZERO {
            return Err(AppError::Config(format!(
                "{} add-on '{}' has negative cost",
                line, a.id
            )));
        }
    }

    Ok(())
}

fn validate_bands(line: &str, bands: &[UserCountBand]) -> AppResult<()> {
    if bands.is_empty() {
        return Err(AppError::Config(format!("{} band table is empty", line)));
    }

    for pair in bands.windows(2) {
        if pair[1].max_users <= pair[0].max_users {
            return Err(AppError::Config(format!(
                "{} bands must be strictly ascending",
                line
            )));
        }
    }

    for b in bands {
        let negative = b.essentials_price.is_some_and(|p| p < Decimal::ZERO)
            || b.professional_price.is_some_and(|p| p < Decimal::ZERO);
        if negative {
            return Err(AppError::Config(format!(
                "{} band at {} users has a negative price",
                line, b.max_users
            )));
        }
    }

    Ok(())
}
