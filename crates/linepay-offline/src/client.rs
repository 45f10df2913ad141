//! # LINE Pay Offline Client
//!
//! Client for the LINE Pay Offline API v4: payments through merchant
//! terminal devices (POS systems).
//!
//! Every call carries two device identification headers in addition to
//! the signing headers added by the core client. The device headers are
//! additive and never enter the signature.

use crate::config::{OfflineConfig, DEFAULT_DEVICE_TYPE};
use crate::types::{
    AuthorizationInfo, CaptureRequest, CaptureResponseInfo, CheckPaymentStatusInfo,
    PaymentDetailsInfo, PaymentQuery, PaymentRequest, PaymentResponseInfo, RefundRequest,
    RefundResponseInfo,
};
use linepay_core::{
    encode_path_segment, ApiResponse, LinePayClient, LinePayError, LinePayResult,
};
use tracing::{debug, instrument};

/// Header carrying the merchant device profile id
pub const HEADER_DEVICE_PROFILE_ID: &str = "X-LINE-MerchantDeviceProfileId";

/// Header carrying the merchant device type
pub const HEADER_DEVICE_TYPE: &str = "X-LINE-MerchantDeviceType";

/// LINE Pay Offline API client.
///
/// Wraps a [`LinePayClient`] and exposes one method per offline
/// endpoint. Stateless; any number of calls may run concurrently on one
/// instance, and cloning is cheap.
///
/// After a timeout on [`request_payment`](Self::request_payment), use
/// [`check_payment_status`](Self::check_payment_status) to resolve the
/// outcome instead of re-issuing the payment, which could charge twice.
///
/// # Example
///
/// ```rust,ignore
/// use linepay_offline::{OfflineClient, OfflineConfig, PaymentRequest, Currency};
///
/// let config = OfflineConfig::new("channel-id", "channel-secret", "POS-001");
/// let client = OfflineClient::new(config)?;
///
/// let payment = client.request_payment(&PaymentRequest {
///     amount: 100,
///     currency: Currency::TWD,
///     one_time_key: "12345678901245678".into(),
///     order_id: "ORDER-001".into(),
///     options: None,
///     packages: None,
/// }).await?;
/// ```
#[derive(Debug, Clone)]
pub struct OfflineClient {
    inner: LinePayClient,
    merchant_device_profile_id: String,
    merchant_device_type: String,
}

impl OfflineClient {
    /// Create a new offline client from the given configuration
    pub fn new(config: OfflineConfig) -> LinePayResult<Self> {
        let inner = LinePayClient::new(config.base.clone())?;
        Self::with_inner(inner, &config)
    }

    /// Create an offline client that reuses a caller-supplied transport
    pub fn with_http_client(config: OfflineConfig, http: reqwest::Client) -> LinePayResult<Self> {
        let inner = LinePayClient::with_http_client(config.base.clone(), http)?;
        Self::with_inner(inner, &config)
    }

    /// Create from environment variables
    pub fn from_env() -> LinePayResult<Self> {
        let config = OfflineConfig::from_env()?;
        Self::new(config)
    }

    fn with_inner(inner: LinePayClient, config: &OfflineConfig) -> LinePayResult<Self> {
        let merchant_device_profile_id = config.merchant_device_profile_id.trim();
        if merchant_device_profile_id.is_empty() {
            return Err(LinePayError::Configuration(
                "merchantDeviceProfileId is required and cannot be empty".to_string(),
            ));
        }

        let merchant_device_type = config
            .merchant_device_type
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_DEVICE_TYPE)
            .to_string();

        Ok(Self {
            inner,
            merchant_device_profile_id: merchant_device_profile_id.to_string(),
            merchant_device_type,
        })
    }

    /// The configured merchant device profile id (trimmed)
    pub fn merchant_device_profile_id(&self) -> &str {
        &self.merchant_device_profile_id
    }

    /// The configured merchant device type (`"POS"` when unset)
    pub fn merchant_device_type(&self) -> &str {
        &self.merchant_device_type
    }

    fn device_headers(&self) -> [(&str, &str); 2] {
        [
            (HEADER_DEVICE_PROFILE_ID, &self.merchant_device_profile_id),
            (HEADER_DEVICE_TYPE, &self.merchant_device_type),
        ]
    }

    /// Request payment with the customer's one-time key.
    ///
    /// The payment completes within this call unless the request asked
    /// for a separated capture. Run it with a read timeout of at least
    /// 40 seconds; on timeout, verify the result with
    /// [`check_payment_status`](Self::check_payment_status) before
    /// retrying.
    #[instrument(skip(self, request), fields(order_id = %request.order_id))]
    pub async fn request_payment(
        &self,
        request: &PaymentRequest,
    ) -> LinePayResult<ApiResponse<PaymentResponseInfo>> {
        debug!("Requesting offline payment");
        self.inner
            .post("/v4/payments/oneTimeKeys/pay", Some(request), &self.device_headers())
            .await
    }

    /// Check payment status by merchant order id.
    ///
    /// Intended for resolving the outcome after a read timeout on
    /// [`request_payment`](Self::request_payment).
    #[instrument(skip(self))]
    pub async fn check_payment_status(
        &self,
        order_id: &str,
    ) -> LinePayResult<ApiResponse<CheckPaymentStatusInfo>> {
        let path = format!(
            "/v4/payments/orders/{}/check",
            encode_path_segment(order_id)
        );
        self.inner.get(&path, &[], &self.device_headers()).await
    }

    /// Query authorized or voided authorizations.
    ///
    /// Captured or refunded payments are visible through
    /// [`retrieve_payment_details`](Self::retrieve_payment_details)
    /// instead.
    #[instrument(skip(self, query))]
    pub async fn query_authorizations(
        &self,
        query: &PaymentQuery,
    ) -> LinePayResult<ApiResponse<Vec<AuthorizationInfo>>> {
        self.inner
            .get(
                "/v4/payments/authorizations",
                &query.as_params(),
                &self.device_headers(),
            )
            .await
    }

    /// Capture a previously authorized payment.
    ///
    /// The capture amount may differ from the authorized amount.
    #[instrument(skip(self, request))]
    pub async fn capture_payment(
        &self,
        order_id: &str,
        request: &CaptureRequest,
    ) -> LinePayResult<ApiResponse<CaptureResponseInfo>> {
        let path = format!(
            "/v4/payments/orders/{}/capture",
            encode_path_segment(order_id)
        );
        self.inner
            .post(&path, Some(request), &self.device_headers())
            .await
    }

    /// Void an authorization before capture.
    ///
    /// After capture, use [`refund_payment`](Self::refund_payment)
    /// instead.
    #[instrument(skip(self))]
    pub async fn void_authorization(&self, order_id: &str) -> LinePayResult<ApiResponse<()>> {
        let path = format!(
            "/v4/payments/orders/{}/void",
            encode_path_segment(order_id)
        );
        self.inner
            .post::<(), ()>(&path, None, &self.device_headers())
            .await
    }

    /// Retrieve captured or authorized payment details, filtered by
    /// order id or transaction id.
    #[instrument(skip(self, query))]
    pub async fn retrieve_payment_details(
        &self,
        query: &PaymentQuery,
    ) -> LinePayResult<ApiResponse<Vec<PaymentDetailsInfo>>> {
        self.inner
            .get("/v4/payments", &query.as_params(), &self.device_headers())
            .await
    }

    /// Refund a completed payment.
    ///
    /// Passing `None` (or a request without `refund_amount`) refunds the
    /// full amount. When `promotion_restriction` is set, only full
    /// refund is supported by the provider.
    #[instrument(skip(self, request))]
    pub async fn refund_payment(
        &self,
        order_id: &str,
        request: Option<&RefundRequest>,
    ) -> LinePayResult<ApiResponse<RefundResponseInfo>> {
        let path = format!(
            "/v4/payments/orders/{}/refund",
            encode_path_segment(order_id)
        );
        self.inner
            .post(&path, request, &self.device_headers())
            .await
    }
}
