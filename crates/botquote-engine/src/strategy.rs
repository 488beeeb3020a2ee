//! Per-product-line base price rules
//!
//! The two product lines use different algorithms and must not be
//! unified: the chat curve interpolates between published anchor prices,
//! while voice tiers charge a flat per-minute overage past the tier
//! floor. Dispatch happens on `ProductLine`; each rule is independently
//! testable.

use rust_decimal::Decimal;
use tracing::debug;

use botquote_core::config::{ChatPricingConfig, PricingConfig, VoicePricingConfig};
use botquote_core::models::{Price, ProductLine};
use botquote_core::{AppError, AppResult};

/// Base price for a usage amount on a product line
pub fn base_price(line: ProductLine, usage: i64, config: &PricingConfig) -> AppResult<Price> {
    let price = match line {
        ProductLine::Chat => chat_base_price(usage, &config.chat)?,
        ProductLine::Voice => voice_base_price(usage, &config.voice)?,
    };

    debug!(%line, usage, %price, "base price");
    Ok(price)
}

/// Chat base price: piecewise, anchored at the published tier prices
///
/// - within the free allowance: zero
/// - up to the Basic threshold: linear scale toward the Basic price,
///   anchored at the paid tier's nominal price rather than at zero
/// - up to the Professional threshold: linear interpolation between the
///   Basic and Professional prices
/// - up to the contact-sales cutoff: extrapolation past the Professional
///   price at a per-session rate derived from it
/// - beyond the cutoff: contact sales
///
/// Each boundary value belongs to the lower branch.
pub fn chat_base_price(sessions: i64, config: &ChatPricingConfig) -> AppResult<Price> {
    if sessions < 0 {
        return Err(AppError::InvalidInput(format!(
            "chat sessions cannot be negative: {}",
            sessions
        )));
    }

    if sessions <= config.free_limit {
        return Ok(Price::ZERO);
    }

    let s = Decimal::from(sessions);

    if sessions <= config.basic_threshold {
        let extra = s - Decimal::from(config.free_limit);
        let span = Decimal::from(config.basic_threshold - config.free_limit);
        return Ok(Price::Amount(config.basic_price * extra / span));
    }

    if sessions <= config.professional_threshold {
        let offset = s - Decimal::from(config.basic_threshold);
        let span = Decimal::from(config.professional_threshold - config.basic_threshold);
        let spread = config.professional_price - config.basic_price;
        return Ok(Price::Amount(config.basic_price + spread * offset / span));
    }

    if sessions <= config.contact_sales_threshold {
        let per_session = config.professional_price / Decimal::from(config.professional_threshold);
        let extra = s - Decimal::from(config.professional_threshold);
        return Ok(Price::Amount(config.professional_price + extra * per_session));
    }

    Ok(Price::ContactSales)
}

/// Voice base price: tier base plus flat overage past the tier floor
///
/// Minutes below the first tier's floor price at that tier's base with no
/// overage (same fallback policy as band lookup). Minutes beyond the last
/// bounded tier are custom-priced.
pub fn voice_base_price(minutes: i64, config: &VoicePricingConfig) -> AppResult<Price> {
    if minutes < 0 {
        return Err(AppError::InvalidInput(format!(
            "voice minutes cannot be negative: {}",
            minutes
        )));
    }

    let last = config
        .tiers
        .last()
        .ok_or_else(|| AppError::Config("voice tier table is empty".to_string()))?;

    let tier = config
        .tiers
        .iter()
        .find(|t| t.covers(minutes))
        .unwrap_or(last);

    match tier.base_price {
        Price::ContactSales => Ok(Price::ContactSales),
        Price::Amount(base) => {
            let extra = (minutes - tier.min_minutes).max(0);
            Ok(Price::Amount(
                base + Decimal::from(extra) * tier.overage_per_minute,
            ))
        }
    }
}

/// Marketing tier label for a usage amount
pub fn tier_label(line: ProductLine, usage: i64, config: &PricingConfig) -> String {
    match line {
        ProductLine::Chat => {
            let tiers = &config.chat.tiers;
            tiers
                .iter()
                .find(|t| usage <= t.threshold)
                .or_else(|| tiers.last())
                .map(|t| t.name.clone())
                .unwrap_or_default()
        }
        ProductLine::Voice => {
            let tiers = &config.voice.tiers;
            tiers
                .iter()
                .find(|t| t.covers(usage))
                .or_else(|| tiers.last())
                .map(|t| t.name.clone())
                .unwrap_or_default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn config() -> PricingConfig {
        PricingConfig::default()
    }

    #[test]
    fn test_chat_free_band() {
        let cfg = config();
        for sessions in [0, 1, 25, 50] {
            assert_eq!(chat_base_price(sessions, &cfg.chat).unwrap(), Price::ZERO);
        }
    }

    #[test]
    fn test_chat_anchor_values() {
        let cfg = config();
        assert_eq!(
            chat_base_price(60, &cfg.chat).unwrap(),
            Price::Amount(dec!(1999))
        );
        assert_eq!(
            chat_base_price(250, &cfg.chat).unwrap(),
            Price::Amount(dec!(6999))
        );
        // 6999 + 750 * (6999 / 250)
        assert_eq!(
            chat_base_price(1000, &cfg.chat).unwrap(),
            Price::Amount(dec!(27996))
        );
    }

    #[test]
    fn test_chat_first_paid_band_scales_from_anchor() {
        let cfg = config();
        // 1999 * (55 - 50) / 10
        assert_eq!(
            chat_base_price(55, &cfg.chat).unwrap(),
            Price::Amount(dec!(999.5))
        );
    }

    #[test]
    fn test_chat_contact_sales_past_cutoff() {
        let cfg = config();
        assert!(chat_base_price(1001, &cfg.chat).unwrap().is_contact_sales());
        assert!(chat_base_price(50_000, &cfg.chat)
            .unwrap()
            .is_contact_sales());
    }

    #[test]
    fn test_chat_monotonic() {
        let cfg = config();
        let mut prev = Decimal::ZERO;
        for sessions in 0..=1000 {
            let price = chat_base_price(sessions, &cfg.chat)
                .unwrap()
                .amount()
                .unwrap();
            assert!(
                price >= prev,
                "price decreased at {} sessions: {} < {}",
                sessions,
                price,
                prev
            );
            prev = price;
        }
    }

    #[test]
    fn test_chat_negative_rejected() {
        let cfg = config();
        assert!(matches!(
            chat_base_price(-1, &cfg.chat),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_voice_tier_anchors() {
        let cfg = config();
        assert_eq!(
            voice_base_price(1500, &cfg.voice).unwrap(),
            Price::Amount(dec!(14999))
        );
        // 14999 + 500 * 150
        assert_eq!(
            voice_base_price(2000, &cfg.voice).unwrap(),
            Price::Amount(dec!(89999))
        );
        // 14999 + 1000 * 150
        assert_eq!(
            voice_base_price(2500, &cfg.voice).unwrap(),
            Price::Amount(dec!(164999))
        );
        // Professional tier reprices from its own floor
        assert_eq!(
            voice_base_price(2501, &cfg.voice).unwrap(),
            Price::Amount(dec!(39999))
        );
        // 39999 + 4999 * 80
        assert_eq!(
            voice_base_price(7500, &cfg.voice).unwrap(),
            Price::Amount(dec!(439919))
        );
    }

    #[test]
    fn test_voice_below_floor_prices_at_basic_base() {
        let cfg = config();
        assert_eq!(
            voice_base_price(0, &cfg.voice).unwrap(),
            Price::Amount(dec!(14999))
        );
        assert_eq!(
            voice_base_price(1000, &cfg.voice).unwrap(),
            Price::Amount(dec!(14999))
        );
    }

    #[test]
    fn test_voice_contact_sales_past_last_bounded_tier() {
        let cfg = config();
        assert!(voice_base_price(7501, &cfg.voice)
            .unwrap()
            .is_contact_sales());
    }

    #[test]
    fn test_voice_negative_rejected() {
        let cfg = config();
        assert!(matches!(
            voice_base_price(-10, &cfg.voice),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_tier_labels() {
        let cfg = config();
        assert_eq!(tier_label(ProductLine::Chat, 50, &cfg), "Free");
        assert_eq!(tier_label(ProductLine::Chat, 51, &cfg), "Basic");
        assert_eq!(tier_label(ProductLine::Chat, 250, &cfg), "Professional");
        assert_eq!(tier_label(ProductLine::Chat, 5000, &cfg), "Enterprise");

        assert_eq!(tier_label(ProductLine::Voice, 1000, &cfg), "Basic");
        assert_eq!(tier_label(ProductLine::Voice, 3000, &cfg), "Professional");
        assert_eq!(tier_label(ProductLine::Voice, 9000, &cfg), "Enterprise");
    }
}
