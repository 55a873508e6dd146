#![allow(dead_code)]

use pay_bridge::adapters::{
    paypal::PayPalClient,
    stripe::{ChargeResponse, StripeClient},
};
use std::sync::Mutex;

/// Stripe double: answers every charge with a fixed response and records
/// the cents it was asked to charge.
pub struct RecordingStripe {
    pub merchant_id: String,
    pub response: ChargeResponse,
    pub calls: Mutex<Vec<i64>>,
}

impl RecordingStripe {
    pub fn new(merchant_id: &str, ok: bool, amount_cents: i64) -> Self {
        Self::with_response(
            merchant_id,
            ChargeResponse {
                ok,
                amount_cents,
                ..Default::default()
            },
        )
    }

    pub fn with_response(merchant_id: &str, response: ChargeResponse) -> Self {
        Self {
            merchant_id: merchant_id.to_string(),
            response,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<i64> {
        self.calls.lock().unwrap().clone()
    }
}

impl StripeClient for RecordingStripe {
    fn charge(&self, amount_cents: i64) -> ChargeResponse {
        self.calls.lock().unwrap().push(amount_cents);
        self.response.clone()
    }

    fn merchant_id(&self) -> &str {
        &self.merchant_id
    }
}

/// PayPal double: answers every payment with a fixed outcome and records
/// the totals it was handed.
pub struct RecordingPayPal {
    pub account_email: String,
    pub outcome: (bool, f64),
    pub calls: Mutex<Vec<f64>>,
}

impl RecordingPayPal {
    pub fn new(account_email: &str, success: bool, total_paid: f64) -> Self {
        Self {
            account_email: account_email.to_string(),
            outcome: (success, total_paid),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<f64> {
        self.calls.lock().unwrap().clone()
    }
}

impl PayPalClient for RecordingPayPal {
    fn make_payment(&self, total: f64) -> (bool, f64) {
        self.calls.lock().unwrap().push(total);
        self.outcome
    }

    fn account_email(&self) -> &str {
        &self.account_email
    }
}
