//! # LINE Pay Configuration
//!
//! Configuration management for LINE Pay clients.
//! Credentials come from environment variables or are supplied directly.

use crate::error::{LinePayError, LinePayResult};
use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Default per-call read timeout in milliseconds.
///
/// The provider documents 20 seconds as the minimum read timeout for the
/// query/capture/void/refund endpoints. Payment requests should run with
/// at least 40 seconds; see `with_timeout`.
pub const DEFAULT_TIMEOUT_MS: u64 = 20_000;

/// Target LINE Pay environment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Sandbox environment (`sandbox-api-pay.line.me`)
    Sandbox,
    /// Production environment (`api-pay.line.me`)
    Production,
}

impl Environment {
    /// Base URL of the API in this environment
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Sandbox => "https://sandbox-api-pay.line.me",
            Environment::Production => "https://api-pay.line.me",
        }
    }

    /// Environment name as configured (`"sandbox"` / `"production"`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Sandbox => "sandbox",
            Environment::Production => "production",
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::Production
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Environment {
    type Err = LinePayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sandbox" => Ok(Environment::Sandbox),
            "production" => Ok(Environment::Production),
            other => Err(LinePayError::Configuration(format!(
                "Unknown environment '{}', expected 'sandbox' or 'production'",
                other
            ))),
        }
    }
}

/// LINE Pay API configuration
#[derive(Debug, Clone)]
pub struct LinePayConfig {
    /// Channel ID issued by the merchant console
    pub channel_id: String,

    /// Channel secret used to sign every request
    pub channel_secret: String,

    /// Target environment
    pub environment: Environment,

    /// Per-call read timeout
    pub timeout: Duration,

    /// API base URL (for testing/mocking)
    pub api_base_url: String,
}

impl LinePayConfig {
    /// Create config with explicit values
    pub fn new(
        channel_id: impl Into<String>,
        channel_secret: impl Into<String>,
        environment: Environment,
    ) -> Self {
        Self {
            channel_id: channel_id.into(),
            channel_secret: channel_secret.into(),
            environment,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            api_base_url: environment.base_url().to_string(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `LINE_PAY_CHANNEL_ID`
    /// - `LINE_PAY_CHANNEL_SECRET`
    ///
    /// Optional env vars:
    /// - `LINE_PAY_ENV` (`sandbox` or `production`, default `production`)
    /// - `LINE_PAY_TIMEOUT_MS`
    pub fn from_env() -> LinePayResult<Self> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let channel_id = env::var("LINE_PAY_CHANNEL_ID")
            .map_err(|_| LinePayError::Configuration("LINE_PAY_CHANNEL_ID not set".to_string()))?;

        let channel_secret = env::var("LINE_PAY_CHANNEL_SECRET").map_err(|_| {
            LinePayError::Configuration("LINE_PAY_CHANNEL_SECRET not set".to_string())
        })?;

        let environment = match env::var("LINE_PAY_ENV") {
            Ok(value) => value.parse()?,
            Err(_) => Environment::default(),
        };

        let mut config = Self::new(channel_id, channel_secret, environment);

        if let Ok(value) = env::var("LINE_PAY_TIMEOUT_MS") {
            let millis: u64 = value.parse().map_err(|_| {
                LinePayError::Configuration(format!(
                    "LINE_PAY_TIMEOUT_MS must be an integer, got '{}'",
                    value
                ))
            })?;
            config.timeout = Duration::from_millis(millis);
        }

        config.validate()?;
        Ok(config)
    }

    /// Check that the credentials are present and non-empty
    pub fn validate(&self) -> LinePayResult<()> {
        if self.channel_id.trim().is_empty() {
            return Err(LinePayError::Configuration(
                "channelId is required".to_string(),
            ));
        }
        if self.channel_secret.trim().is_empty() {
            return Err(LinePayError::Configuration(
                "channelSecret is required".to_string(),
            ));
        }
        Ok(())
    }

    /// Builder: set the per-call read timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Configured timeout in whole milliseconds
    pub fn timeout_ms(&self) -> u64 {
        self.timeout.as_millis() as u64
    }
}
