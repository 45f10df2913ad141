//! # Offline Client Configuration
//!
//! Extends the base LINE Pay configuration with the merchant device
//! fields required by the offline (point-of-sale) API.

use linepay_core::{Environment, LinePayConfig, LinePayError, LinePayResult};
use std::env;
use std::time::Duration;

/// Device type reported when none is configured.
pub const DEFAULT_DEVICE_TYPE: &str = "POS";

/// Configuration for [`OfflineClient`](crate::OfflineClient).
///
/// Composes the base [`LinePayConfig`] (credentials, environment,
/// timeout) with the device identification fields every offline call
/// must carry.
#[derive(Debug, Clone)]
pub struct OfflineConfig {
    /// Base client configuration (credentials, environment, timeout)
    pub base: LinePayConfig,

    /// Merchant device profile id issued for the terminal. Required;
    /// trimmed at client construction.
    pub merchant_device_profile_id: String,

    /// Terminal device type. Defaults to `"POS"` when absent or blank.
    pub merchant_device_type: Option<String>,
}

impl OfflineConfig {
    /// Create config with explicit values (production environment,
    /// default timeout)
    pub fn new(
        channel_id: impl Into<String>,
        channel_secret: impl Into<String>,
        merchant_device_profile_id: impl Into<String>,
    ) -> Self {
        Self {
            base: LinePayConfig::new(channel_id, channel_secret, Environment::Production),
            merchant_device_profile_id: merchant_device_profile_id.into(),
            merchant_device_type: None,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Required env vars (in addition to the base client's):
    /// - `LINE_PAY_MERCHANT_DEVICE_PROFILE_ID`
    ///
    /// Optional env vars:
    /// - `LINE_PAY_MERCHANT_DEVICE_TYPE` (default `POS`)
    pub fn from_env() -> LinePayResult<Self> {
        let base = LinePayConfig::from_env()?;

        let merchant_device_profile_id = env::var("LINE_PAY_MERCHANT_DEVICE_PROFILE_ID")
            .map_err(|_| {
                LinePayError::Configuration(
                    "LINE_PAY_MERCHANT_DEVICE_PROFILE_ID not set".to_string(),
                )
            })?;

        Ok(Self {
            base,
            merchant_device_profile_id,
            merchant_device_type: env::var("LINE_PAY_MERCHANT_DEVICE_TYPE").ok(),
        })
    }

    /// Builder: set the target environment, re-resolving the base URL
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.base.environment = environment;
        self.base.api_base_url = environment.base_url().to_string();
        self
    }

    /// Builder: set the per-call read timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.base = self.base.with_timeout(timeout);
        self
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.base = self.base.with_api_base_url(url);
        self
    }

    /// Builder: set the merchant device type
    pub fn with_merchant_device_type(mut self, device_type: impl Into<String>) -> Self {
        self.merchant_device_type = Some(device_type.into());
        self
    }
}
