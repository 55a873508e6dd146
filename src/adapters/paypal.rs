use {
    crate::domain::{
        confirmation::{Confirmation, Provider},
        error::PaymentError,
        money::CANONICAL_CURRENCY,
        processor::PaymentProcessor,
    },
    std::sync::Arc,
};

/// The slice of the PayPal SDK this crate calls. PayPal already takes
/// major units, so no conversion happens on the way in.
pub trait PayPalClient: Send + Sync {
    /// Returns `(success, total_paid)`.
    fn make_payment(&self, total: f64) -> (bool, f64);

    fn account_email(&self) -> &str;
}

pub struct PayPalAdapter {
    client: Arc<dyn PayPalClient>,
}

impl PayPalAdapter {
    pub fn new(client: Arc<dyn PayPalClient>) -> Self {
        Self { client }
    }
}

impl PaymentProcessor for PayPalAdapter {
    fn confirm(&self, amount: f64) -> Result<Confirmation, PaymentError> {
        let (success, total_paid) = self.client.make_payment(amount);
        if !success {
            return Err(PaymentError::PaymentFailed("PayPal payment failed".into()));
        }

        Ok(Confirmation::new(
            total_paid,
            CANONICAL_CURRENCY,
            Provider::PayPal,
            self.client.account_email(),
        ))
    }
}
