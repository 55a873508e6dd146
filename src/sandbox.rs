//! In-process stand-ins for the third-party SDKs.
//!
//! They answer in each provider's native shape so the adapters can be wired
//! and exercised without network access.

use crate::adapters::{
    paypal::PayPalClient,
    stripe::{ChargeResponse, StripeClient},
};

pub struct SandboxStripe {
    merchant_id: String,
    decline_above_cents: Option<i64>,
}

impl SandboxStripe {
    pub fn new(merchant_id: impl Into<String>) -> Self {
        Self {
            merchant_id: merchant_id.into(),
            decline_above_cents: None,
        }
    }

    /// Decline any charge strictly above `cents`.
    pub fn decline_above(mut self, cents: i64) -> Self {
        self.decline_above_cents = Some(cents);
        self
    }
}

impl StripeClient for SandboxStripe {
    fn charge(&self, amount_cents: i64) -> ChargeResponse {
        let declined = self
            .decline_above_cents
            .is_some_and(|limit| amount_cents > limit);
        tracing::debug!(amount_cents, declined, "sandbox stripe charge");

        let mut extra = serde_json::Map::new();
        extra.insert("currency".into(), "eur".into());
        if declined {
            extra.insert("decline_code".into(), "amount_too_large".into());
            return ChargeResponse {
                ok: false,
                amount_cents: 0,
                extra,
            };
        }

        ChargeResponse {
            ok: true,
            amount_cents,
            extra,
        }
    }

    fn merchant_id(&self) -> &str {
        &self.merchant_id
    }
}

pub struct SandboxPayPal {
    account_email: String,
    fee_bps: u32,
}

impl SandboxPayPal {
    pub fn new(account_email: impl Into<String>) -> Self {
        Self {
            account_email: account_email.into(),
            fee_bps: 0,
        }
    }

    /// Fee withheld from the reported total, in basis points.
    pub fn with_fee_bps(mut self, fee_bps: u32) -> Self {
        self.fee_bps = fee_bps;
        self
    }
}

impl PayPalClient for SandboxPayPal {
    fn make_payment(&self, total: f64) -> (bool, f64) {
        if !total.is_finite() || total <= 0.0 {
            tracing::debug!(total, "sandbox paypal rejected payment");
            return (false, 0.0);
        }

        let total_paid = total - total * f64::from(self.fee_bps) / 10_000.0;
        tracing::debug!(total, total_paid, "sandbox paypal payment");
        (true, total_paid)
    }

    fn account_email(&self) -> &str {
        &self.account_email
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stripe_echoes_cents() {
        let client = SandboxStripe::new("acct_1");
        let resp = client.charge(1999);
        assert!(resp.ok);
        assert_eq!(resp.amount_cents, 1999);
        assert_eq!(resp.extra["currency"], "eur");
    }

    #[test]
    fn stripe_declines_above_limit() {
        let client = SandboxStripe::new("acct_1").decline_above(1000);
        assert!(client.charge(1000).ok);

        let resp = client.charge(1001);
        assert!(!resp.ok);
        assert_eq!(resp.extra["decline_code"], "amount_too_large");
    }

    #[test]
    fn paypal_withholds_fee() {
        let client = SandboxPayPal::new("a@b.com").with_fee_bps(250);
        let (ok, paid) = client.make_payment(100.0);
        assert!(ok);
        assert_eq!(paid, 97.5);
    }

    #[test]
    fn paypal_rejects_non_positive() {
        let client = SandboxPayPal::new("a@b.com");
        assert_eq!(client.make_payment(0.0), (false, 0.0));
        assert!(!client.make_payment(f64::NAN).0);
    }
}
