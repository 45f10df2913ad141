//! # linepay-offline
//!
//! Client for the LINE Pay Offline API v4 (point-of-sale payments
//! through merchant terminal devices).
//!
//! This crate provides:
//! - `OfflineClient` with one method per offline endpoint:
//!   payment request, status check, authorization queries, capture,
//!   void, payment details, refund
//! - `OfflineConfig` extending the base configuration with merchant
//!   device identification
//! - Wire types for every request and response payload
//!
//! Signing, dispatch, and error mapping live in `linepay-core`; this
//! crate shapes requests and injects the two device headers every
//! offline call must carry.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use linepay_offline::{Currency, OfflineClient, OfflineConfig, PaymentRequest};
//!
//! // Credentials from LINE_PAY_* environment variables
//! let client = OfflineClient::from_env()?;
//!
//! // Charge the one-time key scanned from the customer's barcode
//! let payment = client.request_payment(&PaymentRequest {
//!     amount: 100,
//!     currency: Currency::TWD,
//!     one_time_key: "12345678901245678".into(),
//!     order_id: "ORDER-001".into(),
//!     options: None,
//!     packages: None,
//! }).await?;
//!
//! println!("paid: {}", payment.info.unwrap().transaction_id);
//! ```
//!
//! On a timeout during `request_payment`, call `check_payment_status`
//! with the same order id instead of re-issuing the payment.

pub mod client;
pub mod config;
pub mod types;

// Re-exports for convenience
pub use client::{OfflineClient, HEADER_DEVICE_PROFILE_ID, HEADER_DEVICE_TYPE};
pub use config::{OfflineConfig, DEFAULT_DEVICE_TYPE};
pub use linepay_core::{ApiResponse, Environment, LinePayError, LinePayResult};
pub use types::{
    AuthorizationInfo, CaptureRequest, CaptureResponseInfo, CheckPaymentStatus,
    CheckPaymentStatusInfo, Currency, ExtraOptions, PackageInfo, PayType, PaymentDetailsInfo,
    PaymentInfo, PaymentMethod, PaymentOptions, PaymentProvider, PaymentQuery, PaymentRequest,
    PaymentResponseInfo, PaymentSettings, PaymentStatus, ProductInfo, PromotionRestriction,
    RefundInfo, RefundRequest, RefundResponseInfo, TransactionType, UserAgreement,
};
