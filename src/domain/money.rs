use {
    derive_more::Display,
    serde::{Deserialize, Serialize},
};

const MINOR_PER_MAJOR: f64 = 100.0;

/// Amount in minor units (cents), the unit card-network SDKs charge in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display)]
pub struct MinorUnits(i64);

impl MinorUnits {
    pub fn new(cents: i64) -> Self {
        Self(cents)
    }

    /// Truncates toward zero: sub-cent fractions are dropped, never rounded.
    /// `19.999` becomes `1999`. Non-finite input saturates like any
    /// float-to-int cast (NaN becomes 0).
    pub fn from_major_truncated(amount: f64) -> Self {
        Self((amount * MINOR_PER_MAJOR) as i64)
    }

    pub fn cents(&self) -> i64 {
        self.0
    }

    pub fn to_major(self) -> f64 {
        self.0 as f64 / MINOR_PER_MAJOR
    }
}

/// The canonical currency of the processor contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[display("EUR")]
    Eur,
}

pub const CANONICAL_CURRENCY: Currency = Currency::Eur;
