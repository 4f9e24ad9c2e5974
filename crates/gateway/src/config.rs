//! Gateway configuration.
//!
//! Configuration is an explicit struct built once at startup and passed by
//! reference - no ambient process settings. Per-call values live in a
//! separate override struct merged by a pure function; the override always
//! wins over the configured default.

use std::fmt;

use crate::error::{GatewayError, Result};

/// Which Payflow endpoint transactions are submitted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Production,
    Sandbox,
}

impl Environment {
    /// Base URL for this environment. The protocol uses a fixed URL per
    /// environment; there is no per-merchant routing.
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Production => "https://payflowpro.paypal.com",
            Self::Sandbox => "https://pilot-payflowpro.paypal.com",
        }
    }

    pub fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Gateway credentials and defaults, immutable for the process lifetime.
///
/// Vendor id and password are required and validated at construction;
/// everything else has a protocol default. Per-call values are supplied
/// through [`ConfigOverrides`].
#[derive(Clone)]
pub struct GatewayConfig {
    vendor: String,
    password: String,
    user: Option<String>,
    partner: String,
    currency: String,
    environment: Environment,
}

impl GatewayConfig {
    /// Create a configuration from the two mandatory credentials.
    ///
    /// Fails with [`GatewayError::Configuration`] when either is empty -
    /// a missing credential is a deployment problem, not a transaction
    /// error, and is surfaced before any field set is built.
    pub fn new(
        vendor: impl Into<String>,
        password: impl Into<String>,
        environment: Environment,
    ) -> Result<Self> {
        let vendor = vendor.into();
        let password = password.into();
        if vendor.is_empty() {
            return Err(GatewayError::Configuration("vendor id"));
        }
        if password.is_empty() {
            return Err(GatewayError::Configuration("password"));
        }
        Ok(Self {
            vendor,
            password,
            user: None,
            partner: "PayPal".to_string(),
            currency: "USD".to_string(),
            environment,
        })
    }

    /// Set the USER credential. When unset, the vendor id is submitted as
    /// the user, which is how single-user Payflow accounts operate.
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Set the partner label (defaults to `PayPal`).
    pub fn with_partner(mut self, partner: impl Into<String>) -> Self {
        self.partner = partner.into();
        self
    }

    /// Set the default currency code (defaults to `USD`).
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Merge per-call overrides with the configured defaults.
    ///
    /// Pure function; precedence is override first, configuration default
    /// second. The resolved user falls back to the vendor id.
    pub fn resolve(&self, overrides: &ConfigOverrides) -> ResolvedCredentials {
        let user = overrides
            .user
            .as_deref()
            .or(self.user.as_deref())
            .unwrap_or(&self.vendor);
        ResolvedCredentials {
            vendor: self.vendor.clone(),
            password: self.password.clone(),
            user: user.to_string(),
            partner: overrides
                .partner
                .clone()
                .unwrap_or_else(|| self.partner.clone()),
            currency: overrides
                .currency
                .clone()
                .unwrap_or_else(|| self.currency.clone()),
        }
    }
}

impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("vendor", &self.vendor)
            .field("password", &"<redacted>")
            .field("user", &self.user)
            .field("partner", &self.partner)
            .field("currency", &self.currency)
            .field("environment", &self.environment)
            .finish()
    }
}

/// Per-call configuration overrides. A `Some` value wins over the
/// configured default for that submission only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub user: Option<String>,
    pub partner: Option<String>,
    pub currency: Option<String>,
}

/// Fully-resolved credential fields for one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCredentials {
    pub vendor: String,
    pub password: String,
    pub user: String,
    pub partner: String,
    pub currency: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GatewayConfig {
        GatewayConfig::new("acme", "s3cret", Environment::Sandbox).unwrap()
    }

    #[test]
    fn test_missing_vendor_is_a_configuration_error() {
        let err = GatewayConfig::new("", "s3cret", Environment::Sandbox).unwrap_err();
        assert!(matches!(err, GatewayError::Configuration("vendor id")));
    }

    #[test]
    fn test_missing_password_is_a_configuration_error() {
        let err = GatewayConfig::new("acme", "", Environment::Production).unwrap_err();
        assert!(matches!(err, GatewayError::Configuration("password")));
    }

    #[test]
    fn test_defaults() {
        let creds = config().resolve(&ConfigOverrides::default());
        assert_eq!(creds.vendor, "acme");
        assert_eq!(creds.user, "acme"); // falls back to the vendor id
        assert_eq!(creds.partner, "PayPal");
        assert_eq!(creds.currency, "USD");
    }

    #[test]
    fn test_configured_user_beats_vendor_fallback() {
        let creds = config()
            .with_user("api-user")
            .resolve(&ConfigOverrides::default());
        assert_eq!(creds.user, "api-user");
    }

    #[test]
    fn test_call_time_override_wins() {
        let overrides = ConfigOverrides {
            user: Some("override-user".to_string()),
            partner: None,
            currency: Some("GBP".to_string()),
        };
        let creds = config().with_user("api-user").resolve(&overrides);

        assert_eq!(creds.user, "override-user");
        assert_eq!(creds.partner, "PayPal");
        assert_eq!(creds.currency, "GBP");
    }

    #[test]
    fn test_endpoints() {
        assert_eq!(
            Environment::Production.endpoint(),
            "https://payflowpro.paypal.com"
        );
        assert_eq!(
            Environment::Sandbox.endpoint(),
            "https://pilot-payflowpro.paypal.com"
        );
        assert!(Environment::Production.is_production());
        assert!(!Environment::Sandbox.is_production());
    }

    #[test]
    fn test_debug_redacts_password() {
        let rendered = format!("{:?}", config());
        assert!(!rendered.contains("s3cret"));
        assert!(rendered.contains("<redacted>"));
    }
}
