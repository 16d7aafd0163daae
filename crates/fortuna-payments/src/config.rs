//! Client Configuration

use reqwest::Url;

use crate::error::{PaymentError, Result};

/// Description sent with every intent created by the payment flow
pub const DEFAULT_DESCRIPTION: &str = "Test payment from Fortuna";

/// Currency used when the caller does not name one
pub const DEFAULT_CURRENCY: &str = "usd";

/// Default payment service location
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Payment client configuration
#[derive(Clone, Debug)]
pub struct PaymentConfig {
    /// Base URL of the payment service; endpoint paths are joined onto it
    pub base_url: Url,

    /// Description attached to intents created by the flow
    pub description: String,

    /// Currency used when none is given
    pub default_currency: String,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_API_URL).expect("default API URL is valid"),
            description: DEFAULT_DESCRIPTION.into(),
            default_currency: DEFAULT_CURRENCY.into(),
        }
    }
}

impl PaymentConfig {
    /// Build a config for a service at `base_url`
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            ..Default::default()
        })
    }

    /// Config for an app served from the same origin as its API
    pub fn for_origin(origin: &str) -> Result<Self> {
        Self::new(origin)
    }

    /// Create from environment variables
    ///
    /// `FORTUNA_API_URL`, `FORTUNA_PAYMENT_DESCRIPTION` and
    /// `FORTUNA_DEFAULT_CURRENCY` are optional.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("FORTUNA_API_URL") {
            config.base_url = parse_base_url(&url)?;
        }
        if let Ok(description) = std::env::var("FORTUNA_PAYMENT_DESCRIPTION") {
            config.description = description;
        }
        if let Ok(currency) = std::env::var("FORTUNA_DEFAULT_CURRENCY") {
            config.default_currency = currency.to_lowercase();
        }

        Ok(config)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_default_currency(mut self, currency: impl Into<String>) -> Self {
        self.default_currency = currency.into().to_lowercase();
        self
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw)
        .map_err(|e| PaymentError::Config(format!("invalid API URL '{raw}': {e}")))?;
    if url.cannot_be_a_base() {
        return Err(PaymentError::Config(format!("API URL '{raw}' cannot be a base")));
    }
    Ok(url)
}
