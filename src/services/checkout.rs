use {
    crate::domain::{error::PaymentError, processor::PaymentProcessor},
    thiserror::Error,
};

#[derive(Debug, Error, PartialEq)]
pub enum CheckoutError {
    #[error("invalid checkout total: {0}")]
    InvalidTotal(f64),

    #[error("payment: {0}")]
    Payment(#[from] PaymentError),
}

/// Settle an order total through whichever processor the app was wired with.
pub fn checkout(processor: &dyn PaymentProcessor, total: f64) -> Result<String, CheckoutError> {
    if !total.is_finite() || total <= 0.0 {
        return Err(CheckoutError::InvalidTotal(total));
    }

    match processor.pay(total) {
        Ok(confirmation) => {
            tracing::info!(total, %confirmation, "checkout completed");
            Ok(confirmation)
        }
        Err(e) => {
            tracing::warn!(total, error = %e, "checkout declined");
            Err(e.into())
        }
    }
}
