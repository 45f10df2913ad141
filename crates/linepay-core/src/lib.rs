//! # linepay-core
//!
//! Core signed-request client for the LINE Pay v4 REST API.
//!
//! This crate provides:
//! - `LinePayClient` for issuing signed GET/POST requests
//! - `LinePayConfig` and `Environment` for credentials and routing
//! - `LinePayError` for typed error handling
//! - Request signing (`generate_signature`, `verify_signature`, nonces)
//! - URL encoding helpers and transaction-id/confirm-query utilities
//!
//! Endpoint-specific clients (e.g. `linepay-offline`) build on top of
//! [`LinePayClient::get`] / [`LinePayClient::post`] rather than dealing
//! with signing or envelope parsing themselves.
//!
//! ## Example
//!
//! ```rust,ignore
//! use linepay_core::{ApiResponse, Environment, LinePayClient, LinePayConfig};
//!
//! let config = LinePayConfig::new("channel-id", "channel-secret", Environment::Sandbox);
//! let client = LinePayClient::new(config)?;
//!
//! let response: ApiResponse<serde_json::Value> = client
//!     .get("/v4/payments", &[("orderId", "ORDER-001")], &[])
//!     .await?;
//! ```

pub mod client;
pub mod config;
pub mod encode;
pub mod error;
pub mod signature;
pub mod transaction;

// Re-exports for convenience
pub use client::{
    ApiResponse, LinePayClient, HEADER_AUTHORIZATION, HEADER_AUTH_NONCE, HEADER_CHANNEL_ID,
};
pub use config::{Environment, LinePayConfig, DEFAULT_TIMEOUT_MS};
pub use encode::{build_query_string, encode_path_segment};
pub use error::{
    LinePayError, LinePayResult, RETURN_CODE_PARSE_ERROR, RETURN_CODE_SUCCESS,
};
pub use signature::{generate_nonce, generate_signature, verify_signature};
pub use transaction::{
    is_valid_transaction_id, parse_confirm_query, validate_transaction_id, ConfirmQuery,
};
