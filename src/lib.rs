pub mod adapters;
pub mod config;
pub mod domain;
pub mod sandbox;
pub mod services;

use {
    adapters::{paypal::PayPalAdapter, stripe::StripeAdapter},
    config::{Config, ProviderConfig},
    domain::processor::PaymentProcessor,
    sandbox::{SandboxPayPal, SandboxStripe},
    std::sync::Arc,
};

/// Wire the configured provider's client into its adapter. Callers only
/// ever see the processor contract.
pub fn build_processor(config: &Config) -> Arc<dyn PaymentProcessor> {
    match &config.provider {
        ProviderConfig::Stripe {
            merchant_id,
            decline_above_cents,
        } => {
            let mut client = SandboxStripe::new(merchant_id.as_str());
            if let Some(limit) = decline_above_cents {
                client = client.decline_above(*limit);
            }
            Arc::new(StripeAdapter::new(Arc::new(client)))
        }
        ProviderConfig::PayPal {
            account_email,
            fee_bps,
        } => {
            let client = SandboxPayPal::new(account_email.as_str()).with_fee_bps(*fee_bps);
            Arc::new(PayPalAdapter::new(Arc::new(client)))
        }
    }
}
