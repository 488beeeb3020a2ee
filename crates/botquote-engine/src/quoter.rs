//! Quote service
//!
//! Orchestrates the full pricing pipeline for one request: base price by
//! product line, add-on and provider aggregation, a single yearly
//! discount over the aggregated total, and display currency conversion.
//! The service owns only its validated configuration; quotes are pure
//! functions of the request.

use rust_decimal::Decimal;
use tracing::debug;
use validator::Validate;

use botquote_core::models::{
    BillingCycle, PlanPrices, PricingRequest, ProductLine, Quote, QuoteBreakdown,
};
use botquote_core::{AppError, AppResult, PricingConfig};

use crate::{addons, bands, billing, strategy};

/// Stateless pricing quote service
///
/// Construction validates the pricing tables once; every `quote` call is
/// a pure computation over them.
pub struct QuoteService {
    config: PricingConfig,
}

impl QuoteService {
    /// Create a service over a pricing configuration
    ///
    /// Fails fast on malformed tables.
    pub fn new(config: PricingConfig) -> AppResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Compute a quote for a request
    pub fn quote(&self, request: &PricingRequest) -> AppResult<Quote> {
        request
            .validate()
            .map_err(|e| AppError::InvalidInput(e.to_string()))?;

        let usage = request.usage_amount;
        let line = request.product_line;

        let base = strategy::base_price(line, usage, &self.config)?;

        let add_on_catalog = match line {
            ProductLine::Chat => &self.config.chat.add_ons,
            ProductLine::Voice => &self.config.voice.add_ons,
        };
        let add_ons = addons::aggregate_add_ons(&request.selected_add_ons, add_on_catalog);

        // Providers are billed per voice minute; the chat line has none
        let provider = match line {
            ProductLine::Chat => Decimal::ZERO,
            ProductLine::Voice => addons::provider_cost(
                request.provider.as_deref(),
                usage,
                &self.config.voice.providers,
            ),
        };

        // Discount applies once, after all additive components are summed
        let raw = base.map(|b| b + add_ons + provider);
        let canonical = billing::apply_cycle(
            raw,
            request.billing_cycle,
            self.config.billing.yearly_multiplier,
        );
        let total = billing::to_display(canonical, request.currency, self.config.billing.usd_to_inr);

        let presets = match line {
            ProductLine::Chat => &self.config.chat.tiers,
            ProductLine::Voice => &self.config.voice.preset_tiers,
        };

        let quote = Quote {
            product_line: line,
            usage_amount: usage,
            billing_cycle: request.billing_cycle,
            currency: request.currency,
            currency_symbol: request.currency.symbol().to_string(),
            total,
            canonical_total: canonical,
            tier_label: strategy::tier_label(line, usage, &self.config),
            highlighted_tier: bands::match_exact_tier(usage, presets),
            breakdown: QuoteBreakdown {
                base,
                add_ons,
                provider,
                yearly_discount_applied: request.billing_cycle == BillingCycle::Yearly
                    && !base.is_contact_sales(),
            },
        };

        debug!(
            %line,
            usage,
            total = %quote.total,
            tier = %quote.tier_label,
            "quote computed"
        );

        Ok(quote)
    }

    /// Plan-card prices for a usage amount on a product line
    pub fn plan_prices(
        &self,
        line: ProductLine,
        usage: i64,
        cycle: BillingCycle,
    ) -> AppResult<PlanPrices> {
        let bands = match line {
            ProductLine::Chat => &self.config.chat.user_bands,
            ProductLine::Voice => &self.config.voice.user_bands,
        };

        bands::plan_prices(usage, bands, cycle, self.config.billing.yearly_multiplier)
    }
}

impl Default for QuoteService {
    fn default() -> Self {
        // The built-in reference tables are valid by construction
        Self {
            config: PricingConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use botquote_core::models::{Currency, Price};
    use rust_decimal_macros::dec;

    fn service() -> QuoteService {
        QuoteService::default()
    }

    fn request(line: ProductLine, usage: i64) -> PricingRequest {
        PricingRequest::new(line, usage)
    }

    #[test]
    fn test_chat_basic_quote() {
        let quote = service().quote(&request(ProductLine::Chat, 60)).unwrap();

        assert_eq!(quote.total, Price::Amount(dec!(1999)));
        assert_eq!(quote.tier_label, "Basic");
        assert_eq!(quote.highlighted_tier, Some(1));
        assert_eq!(quote.currency_symbol, "₹");
    }

    #[test]
    fn test_chat_whatsapp_add_on() {
        let mut req = request(ProductLine::Chat, 60);
        req.selected_add_ons = vec!["whatsapp".to_string()];

        let quote = service().quote(&req).unwrap();
        assert_eq!(quote.total, Price::Amount(dec!(2499)));
        assert_eq!(quote.breakdown.add_ons, dec!(500));
    }

    #[test]
    fn test_provider_ignored_on_chat_line() {
        let mut req = request(ProductLine::Chat, 60);
        req.provider = Some("plivo".to_string());

        let quote = service().quote(&req).unwrap();
        assert_eq!(quote.breakdown.provider, Decimal::ZERO);
        assert_eq!(quote.total, Price::Amount(dec!(1999)));
    }

    #[test]
    fn test_voice_quote_with_provider() {
        let mut req = request(ProductLine::Voice, 2000);
        req.provider = Some("plivo".to_string());

        let quote = service().quote(&req).unwrap();
        // base 14999 + 500 * 150 = 89999, provider 2000 * 0.5 = 1000
        assert_eq!(quote.breakdown.base, Price::Amount(dec!(89999)));
        assert_eq!(quote.breakdown.provider, dec!(1000));
        assert_eq!(quote.total, Price::Amount(dec!(90999)));
        assert_eq!(quote.tier_label, "Basic");
    }

    #[test]
    fn test_yearly_discount_applied_once_over_sum() {
        let mut req = request(ProductLine::Voice, 2000);
        req.provider = Some("plivo".to_string());
        req.selected_add_ons = vec!["custom_voice".to_string(), "multi_language".to_string()];
        req.billing_cycle = BillingCycle::Yearly;

        let quote = service().quote(&req).unwrap();
        // (89999 + 1000 + 8000) * 0.8
        assert_eq!(quote.canonical_total, Price::Amount(dec!(79199.2)));
        assert_eq!(quote.total, Price::Amount(dec!(79199)));
        assert!(quote.breakdown.yearly_discount_applied);
        // Components in the breakdown stay pre-discount
        assert_eq!(quote.breakdown.add_ons, dec!(8000));
    }

    #[test]
    fn test_usd_display_conversion() {
        let mut req = request(ProductLine::Voice, 2000);
        req.provider = Some("plivo".to_string());
        req.selected_add_ons = vec!["custom_voice".to_string(), "multi_language".to_string()];
        req.billing_cycle = BillingCycle::Yearly;
        req.currency = Currency::Usd;

        let quote = service().quote(&req).unwrap();
        // 79199.2 / 83 = 954.20..., rounded at display time only
        assert_eq!(quote.total, Price::Amount(dec!(954)));
        // Canonical stays in INR, unrounded
        assert_eq!(quote.canonical_total, Price::Amount(dec!(79199.2)));
        assert_eq!(quote.currency_symbol, "$");
    }

    #[test]
    fn test_contact_sales_passes_through_pipeline() {
        let mut req = request(ProductLine::Chat, 1001);
        req.selected_add_ons = vec!["whatsapp".to_string()];
        req.billing_cycle = BillingCycle::Yearly;
        req.currency = Currency::Usd;

        let quote = service().quote(&req).unwrap();
        assert!(quote.total.is_contact_sales());
        assert!(quote.canonical_total.is_contact_sales());
        assert_eq!(quote.tier_label, "Enterprise");
        assert!(!quote.breakdown.yearly_discount_applied);
    }

    #[test]
    fn test_quote_is_idempotent() {
        let mut req = request(ProductLine::Voice, 3000);
        req.provider = Some("elevenlabs".to_string());
        req.billing_cycle = BillingCycle::Yearly;

        let svc = service();
        let first = svc.quote(&req).unwrap();
        let second = svc.quote(&req).unwrap();

        assert_eq!(first.total, second.total);
        assert_eq!(first.canonical_total, second.canonical_total);
        assert_eq!(first.tier_label, second.tier_label);
    }

    #[test]
    fn test_negative_usage_rejected() {
        let err = service()
            .quote(&request(ProductLine::Chat, -5))
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn test_free_tier_with_add_on_still_charges_add_on() {
        let mut req = request(ProductLine::Chat, 50);
        req.selected_add_ons = vec!["whatsapp".to_string()];

        let quote = service().quote(&req).unwrap();
        assert_eq!(quote.total, Price::Amount(dec!(500)));
        assert_eq!(quote.tier_label, "Free");
        assert_eq!(quote.highlighted_tier, Some(0));
    }

    #[test]
    fn test_plan_prices_lookup() {
        let svc = service();

        let prices = svc
            .plan_prices(ProductLine::Chat, 80, BillingCycle::Monthly)
            .unwrap();
        assert_eq!(prices.essentials, Price::Amount(dec!(33320)));
        assert_eq!(prices.professional, Price::Amount(dec!(93320)));

        // Beyond every band: falls back to the last band (all custom)
        let prices = svc
            .plan_prices(ProductLine::Chat, 2000, BillingCycle::Monthly)
            .unwrap();
        assert!(prices.essentials.is_contact_sales());
        assert!(prices.professional.is_contact_sales());
    }

    #[test]
    fn test_invalid_config_rejected_at_construction() {
        let mut config = PricingConfig::default();
        config.voice.tiers.clear();
        assert!(matches!(
            QuoteService::new(config),
            Err(AppError::Config(_))
        ));
    }
}
