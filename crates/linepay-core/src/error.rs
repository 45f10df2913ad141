//! # LINE Pay Error Types
//!
//! Typed error handling for the LINE Pay client.
//! All client operations return `Result<T, LinePayError>`.

use thiserror::Error;

/// Return code reported by the API on success.
pub const RETURN_CODE_SUCCESS: &str = "0000";

/// Reserved return code for responses whose body could not be parsed.
pub const RETURN_CODE_PARSE_ERROR: &str = "PARSE_ERROR";

/// Core error type for all LINE Pay operations
#[derive(Debug, Error)]
pub enum LinePayError {
    /// Configuration errors (missing credentials, invalid values)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Local input validation failed before any request was sent
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        /// Field that failed validation, when known
        field: Option<String>,
    },

    /// The configured read timeout elapsed before a response arrived
    #[error("Request to {url} timed out after {timeout_ms} ms")]
    Timeout { timeout_ms: u64, url: String },

    /// The API answered with a non-success return code, or with a body
    /// that could not be parsed (`return_code` is then `PARSE_ERROR`)
    #[error("LINE Pay API error [{return_code}]: {return_message} (HTTP {http_status})")]
    Api {
        return_code: String,
        return_message: String,
        http_status: u16,
        raw_body: Option<String>,
    },

    /// Network/HTTP error communicating with the API
    #[error("Network error: {0}")]
    Network(String),
}

impl LinePayError {
    /// The API return code, for `Api` errors
    pub fn return_code(&self) -> Option<&str> {
        match self {
            LinePayError::Api { return_code, .. } => Some(return_code),
            _ => None,
        }
    }

    /// Returns true for API errors in the 1xxx family (authentication)
    pub fn is_auth_error(&self) -> bool {
        self.code_starts_with('1')
    }

    /// Returns true for API errors in the 2xxx family (payment)
    pub fn is_payment_error(&self) -> bool {
        self.code_starts_with('2')
    }

    /// Returns true for API errors in the 9xxx family (internal)
    pub fn is_internal_error(&self) -> bool {
        self.code_starts_with('9')
    }

    fn code_starts_with(&self, digit: char) -> bool {
        self.return_code()
            .map(|code| code.starts_with(digit))
            .unwrap_or(false)
    }
}

/// Result type alias for LINE Pay operations
pub type LinePayResult<T> = Result<T, LinePayError>;
