use super::{confirmation::Confirmation, error::PaymentError};

/// The one capability checkout code depends on. Implementations wrap a
/// provider SDK client and keep every provider-specific unit and success
/// signal on their side of this boundary.
///
/// `amount` is a positive value in the canonical major unit (euros).
pub trait PaymentProcessor: Send + Sync {
    /// Charge `amount` and report what the provider recorded.
    fn confirm(&self, amount: f64) -> Result<Confirmation, PaymentError>;

    /// Charge `amount` and render the confirmation for display.
    fn pay(&self, amount: f64) -> Result<String, PaymentError> {
        self.confirm(amount).map(|c| c.to_string())
    }
}
