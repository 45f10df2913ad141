//! # Offline API Wire Types
//!
//! Request and response types for the LINE Pay Offline API v4.
//! Pure data contracts mirroring the provider's JSON schema; all domain
//! validation is left to the remote provider.
//!
//! Optional request fields serialize by key omission, which is how the
//! API encodes their meaning (an absent `refundAmount` is a full refund).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Supported currencies (ISO 4217)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    USD,
    TWD,
    THB,
}

impl Currency {
    /// Returns the ISO 4217 currency code
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::TWD => "TWD",
            Currency::THB => "THB",
        }
    }
}

/// Payment method used for (part of) a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    CreditCard,
    Balance,
    Point,
    Discount,
}

/// Upstream payment provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentProvider {
    TSP,
    PGW,
}

/// Authorization state reported by the authorizations query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Authorization,
    VoidedAuthorization,
    ExpiredAuthorization,
}

/// Transaction type in query responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Payment,
    PartialRefund,
    Refund,
}

/// Result of a payment status check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckPaymentStatus {
    Complete,
    Fail,
    Refund,
}

/// Payment type option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayType {
    Normal,
    Preapproved,
}

/// One method/amount pair within a transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInfo {
    pub method: PaymentMethod,
    pub amount: i64,
}

/// Product line within a package
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInfo {
    pub name: String,
    pub quantity: u32,
    pub price: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// User agreement shown for a package
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAgreement {
    pub agreement_url: String,
}

/// Package of products within a payment request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageInfo {
    pub id: String,
    pub amount: i64,
    pub products: Vec<ProductInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agreement: Option<UserAgreement>,
}

/// Branch information attached to a payment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtraOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_name: Option<String>,
}

/// Capture/pay-type settings for a payment.
///
/// `capture: Some(false)` requests a separated authorization; the
/// payment then completes via `capture_payment`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pay_type: Option<PayType>,
}

/// Optional payment request settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<ExtraOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment: Option<PaymentSettings>,
}

/// Promotion restriction: the amount not eligible for promotion.
///
/// When present on a refund, only full refund is supported.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionRestriction {
    pub use_limit: i64,
}

/// Body of `request_payment`.
///
/// `one_time_key` comes from the customer's barcode/QR code and is
/// valid for roughly five minutes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub amount: i64,
    pub currency: Currency,
    pub one_time_key: String,
    pub order_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<PaymentOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packages: Option<Vec<PackageInfo>>,
}

/// Body of `capture_payment`. The capture amount may differ from the
/// authorized amount.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureRequest {
    pub amount: i64,
    pub currency: Currency,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotion_restriction: Option<PromotionRestriction>,
}

/// Body of `refund_payment`. An absent `refund_amount` requests a full
/// refund.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotion_restriction: Option<PromotionRestriction>,
}

/// Query filter for `query_authorizations` / `retrieve_payment_details`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentQuery {
    pub order_id: Option<String>,
    pub transaction_id: Option<String>,
}

impl PaymentQuery {
    /// Filter by merchant order id
    pub fn by_order_id(order_id: impl Into<String>) -> Self {
        Self {
            order_id: Some(order_id.into()),
            transaction_id: None,
        }
    }

    /// Filter by transaction id
    pub fn by_transaction_id(transaction_id: impl Into<String>) -> Self {
        Self {
            order_id: None,
            transaction_id: Some(transaction_id.into()),
        }
    }

    /// Ordered `key=value` pairs for the query string (`orderId` first)
    pub(crate) fn as_params(&self) -> Vec<(&'static str, &str)> {
        let mut params = Vec::with_capacity(2);
        if let Some(order_id) = &self.order_id {
            params.push(("orderId", order_id.as_str()));
        }
        if let Some(transaction_id) = &self.transaction_id {
            params.push(("transactionId", transaction_id.as_str()));
        }
        params
    }
}

/// Payload of `request_payment`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponseInfo {
    /// Transaction id (19 digits)
    pub transaction_id: i64,
    pub order_id: String,
    pub transaction_date: DateTime<Utc>,
    pub pay_info: Vec<PaymentInfo>,
    pub payment_provider: PaymentProvider,
}

/// Payload of `check_payment_status`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckPaymentStatusInfo {
    pub status: CheckPaymentStatus,
    pub transaction_id: i64,
    pub order_id: String,
    pub transaction_date: DateTime<Utc>,
    pub pay_info: Vec<PaymentInfo>,
    pub payment_provider: PaymentProvider,
}

/// One item in the `query_authorizations` payload
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizationInfo {
    pub transaction_id: i64,
    pub transaction_date: DateTime<Utc>,
    pub transaction_type: TransactionType,
    pub product_name: String,
    pub currency: Currency,
    pub payment_provider: PaymentProvider,
    pub authorization_expire_date: DateTime<Utc>,
    pub pay_info: Vec<PaymentInfo>,
    pub order_id: String,
    pub pay_status: PaymentStatus,
}

/// Payload of `capture_payment`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureResponseInfo {
    pub transaction_id: i64,
    pub order_id: String,
    pub transaction_date: DateTime<Utc>,
    pub pay_info: Vec<PaymentInfo>,
    pub payment_provider: PaymentProvider,
}

/// One refund recorded against a payment; `refund_amount` is negative
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundInfo {
    pub refund_transaction_id: i64,
    pub transaction_type: TransactionType,
    pub refund_amount: i64,
    pub refund_transaction_date: DateTime<Utc>,
}

/// One item in the `retrieve_payment_details` payload
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDetailsInfo {
    pub transaction_id: i64,
    pub transaction_date: DateTime<Utc>,
    pub transaction_type: TransactionType,
    pub product_name: String,
    pub currency: Currency,
    pub pay_info: Vec<PaymentInfo>,
    pub payment_provider: PaymentProvider,
    #[serde(default)]
    pub refund_list: Option<Vec<RefundInfo>>,
    pub order_id: String,
}

/// Payload of `refund_payment`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundResponseInfo {
    pub refund_transaction_id: i64,
    pub refund_transaction_date: DateTime<Utc>,
}
