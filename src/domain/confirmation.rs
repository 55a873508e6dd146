use {
    super::money::Currency,
    derive_more::Display,
    serde::Serialize,
    std::fmt,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
pub enum Provider {
    Stripe,
    #[display("PayPal")]
    PayPal,
}

/// What a provider reports it actually charged. Built fresh per `pay` call;
/// the amount is the provider's figure, not the requested one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Confirmation {
    amount: f64,
    currency: Currency,
    provider: Provider,
    reference: String,
}

impl Confirmation {
    pub fn new(
        amount: f64,
        currency: Currency,
        provider: Provider,
        reference: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            currency,
            provider,
            reference: reference.into(),
        }
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn provider(&self) -> Provider {
        self.provider
    }

    /// Merchant id or account email, whichever the provider identifies by.
    pub fn reference(&self) -> &str {
        &self.reference
    }
}

impl fmt::Display for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "paid {:.2} {} via {} ({})",
            self.amount, self.currency, self.provider, self.reference
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::money::CANONICAL_CURRENCY;

    #[test]
    fn renders_two_decimals() {
        let c = Confirmation::new(41.8, CANONICAL_CURRENCY, Provider::PayPal, "a@b.com");
        assert_eq!(c.to_string(), "paid 41.80 EUR via PayPal (a@b.com)");
    }

    #[test]
    fn renders_zero_amount() {
        let c = Confirmation::new(0.0, CANONICAL_CURRENCY, Provider::Stripe, "M1");
        assert_eq!(c.to_string(), "paid 0.00 EUR via Stripe (M1)");
    }

    #[test]
    fn serializes_structured_fields() {
        let c = Confirmation::new(19.99, CANONICAL_CURRENCY, Provider::Stripe, "M1");
        let v = serde_json::to_value(&c).unwrap();
        assert_eq!(v["currency"], "EUR");
        assert_eq!(v["provider"], "Stripe");
        assert_eq!(v["reference"], "M1");
        assert_eq!(v["amount"], 19.99);
    }
}
