use {derive_more::Display, thiserror::Error};

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("invalid {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ProviderKind {
    #[display("stripe")]
    Stripe,
    #[display("paypal")]
    PayPal,
}

impl TryFrom<&str> for ProviderKind {
    type Error = ConfigError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stripe" => Ok(Self::Stripe),
            "paypal" => Ok(Self::PayPal),
            _ => Err(ConfigError::Invalid {
                key: "PAYMENT_PROVIDER",
                value: s.to_string(),
            }),
        }
    }
}

/// Provider credentials plus the sandbox knobs the binary exposes.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderConfig {
    Stripe {
        merchant_id: String,
        decline_above_cents: Option<i64>,
    },
    PayPal {
        account_email: String,
        fee_bps: u32,
    },
}

impl ProviderConfig {
    pub fn kind(&self) -> ProviderKind {
        match self {
            Self::Stripe { .. } => ProviderKind::Stripe,
            Self::PayPal { .. } => ProviderKind::PayPal,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub provider: ProviderConfig,
    pub checkout_total: f64,
}

const DEFAULT_CHECKOUT_TOTAL: f64 = 42.5;

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |key: &'static str| lookup(key).ok_or(ConfigError::Missing(key));

        let kind = ProviderKind::try_from(required("PAYMENT_PROVIDER")?.as_str())?;
        let provider = match kind {
            ProviderKind::Stripe => ProviderConfig::Stripe {
                merchant_id: required("STRIPE_MERCHANT_ID")?,
                decline_above_cents: parse_optional(&lookup, "STRIPE_DECLINE_ABOVE_CENTS")?,
            },
            ProviderKind::PayPal => ProviderConfig::PayPal {
                account_email: required("PAYPAL_ACCOUNT_EMAIL")?,
                fee_bps: parse_optional(&lookup, "PAYPAL_FEE_BPS")?.unwrap_or(0),
            },
        };

        let checkout_total =
            parse_optional(&lookup, "CHECKOUT_TOTAL")?.unwrap_or(DEFAULT_CHECKOUT_TOTAL);

        tracing::info!(provider = %kind, checkout_total, "configuration loaded");
        Ok(Self {
            provider,
            checkout_total,
        })
    }
}

fn parse_optional<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse()
                .map_err(|_| ConfigError::Invalid { key, value: raw })
        })
        .transpose()
}
