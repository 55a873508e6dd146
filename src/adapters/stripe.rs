use {
    crate::domain::{
        confirmation::{Confirmation, Provider},
        error::PaymentError,
        money::{CANONICAL_CURRENCY, MinorUnits},
        processor::PaymentProcessor,
    },
    serde::{Deserialize, Serialize},
    std::sync::Arc,
};

/// Result of a Stripe charge. Missing fields deserialize to their
/// defaults: no `ok` means failure, no `amount_cents` means zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChargeResponse {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub amount_cents: i64,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// The slice of the Stripe SDK this crate calls.
pub trait StripeClient: Send + Sync {
    /// Charge in minor units (cents).
    fn charge(&self, amount_cents: i64) -> ChargeResponse;

    fn merchant_id(&self) -> &str;
}

pub struct StripeAdapter {
    client: Arc<dyn StripeClient>,
}

impl StripeAdapter {
    pub fn new(client: Arc<dyn StripeClient>) -> Self {
        Self { client }
    }
}

impl PaymentProcessor for StripeAdapter {
    fn confirm(&self, amount: f64) -> Result<Confirmation, PaymentError> {
        let requested = MinorUnits::from_major_truncated(amount);
        let response = self.client.charge(requested.cents());

        // Report what Stripe recorded, not what was requested.
        let charged = MinorUnits::new(response.amount_cents).to_major();
        if !response.ok {
            return Err(PaymentError::PaymentFailed("Stripe charge failed".into()));
        }

        Ok(Confirmation::new(
            charged,
            CANONICAL_CURRENCY,
            Provider::Stripe,
            self.client.merchant_id(),
        ))
    }
}
