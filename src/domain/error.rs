use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
    /// The provider rejected the charge or omitted its success flag.
    #[error("{0}")]
    PaymentFailed(String),
}
