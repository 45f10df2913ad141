//! # LINE Pay Client
//!
//! Generic signed-request client for the LINE Pay v4 API.
//! Endpoint wrappers build paths, bodies, and query parameters and
//! delegate to [`LinePayClient::get`] / [`LinePayClient::post`].

use crate::config::LinePayConfig;
use crate::encode::build_query_string;
use crate::error::{LinePayError, LinePayResult, RETURN_CODE_PARSE_ERROR, RETURN_CODE_SUCCESS};
use crate::signature::{generate_nonce, generate_signature};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

/// Header carrying the merchant channel id
pub const HEADER_CHANNEL_ID: &str = "X-LINE-ChannelId";

/// Header carrying the request signature
pub const HEADER_AUTHORIZATION: &str = "X-LINE-Authorization";

/// Header carrying the signature nonce
pub const HEADER_AUTH_NONCE: &str = "X-LINE-Authorization-Nonce";

/// Response envelope shared by all LINE Pay endpoints.
///
/// Values returned by the client always carry `return_code == "0000"`;
/// any other code surfaces as [`LinePayError::Api`] instead. `info` is
/// absent on endpoints without a payload (void).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub return_code: String,
    pub return_message: String,
    pub info: Option<T>,
}

/// Minimal envelope parsed first to classify the response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponseEnvelope {
    return_code: String,
    return_message: String,
}

/// LINE Pay API client.
///
/// Owns the channel credentials and the HTTP transport. Cheap to clone;
/// any number of calls may run concurrently on one instance.
#[derive(Debug, Clone)]
pub struct LinePayClient {
    config: LinePayConfig,
    http: Client,
}

impl LinePayClient {
    /// Create a new client from the given configuration
    pub fn new(config: LinePayConfig) -> LinePayResult<Self> {
        config.validate()?;

        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                LinePayError::Configuration(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self { config, http })
    }

    /// Create a client that reuses a caller-supplied transport.
    ///
    /// The supplied client's own timeout settings apply; timeout errors
    /// are still reported with the configured duration.
    pub fn with_http_client(config: LinePayConfig, http: Client) -> LinePayResult<Self> {
        config.validate()?;
        Ok(Self { config, http })
    }

    /// Create from environment variables
    pub fn from_env() -> LinePayResult<Self> {
        let config = LinePayConfig::from_env()?;
        Self::new(config)
    }

    /// The active configuration
    pub fn config(&self) -> &LinePayConfig {
        &self.config
    }

    /// Issue a signed GET request
    pub async fn get<T>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        extra_headers: &[(&str, &str)],
    ) -> LinePayResult<ApiResponse<T>>
    where
        T: DeserializeOwned,
    {
        let query_string = if query.is_empty() {
            None
        } else {
            Some(build_query_string(query))
        };
        self.send(Method::GET, path, None, query_string, extra_headers)
            .await
    }

    /// Issue a signed POST request with an optional JSON body
    pub async fn post<T, B>(
        &self,
        path: &str,
        body: Option<&B>,
        extra_headers: &[(&str, &str)],
    ) -> LinePayResult<ApiResponse<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body_json = match body {
            Some(value) => {
                Some(
                    serde_json::to_string(value).map_err(|e| LinePayError::Validation {
                        message: format!("Failed to serialize request body: {}", e),
                        field: None,
                    })?,
                )
            }
            None => None,
        };
        self.send(Method::POST, path, body_json, None, extra_headers)
            .await
    }

    /// Sign and dispatch one request, then interpret the response.
    ///
    /// The signature covers secret, path, body, query, and a fresh nonce.
    /// Extra headers are additive and never enter the signature. Success
    /// and failure are decided by the envelope's `returnCode`, not the
    /// HTTP status line.
    #[instrument(skip(self, body_json, extra_headers))]
    async fn send<T>(
        &self,
        method: Method,
        path: &str,
        body_json: Option<String>,
        query_string: Option<String>,
        extra_headers: &[(&str, &str)],
    ) -> LinePayResult<ApiResponse<T>>
    where
        T: DeserializeOwned,
    {
        let nonce = generate_nonce();
        let body = body_json.as_deref().unwrap_or("");
        let query = query_string.as_deref().unwrap_or("");
        let signature = generate_signature(&self.config.channel_secret, path, body, &nonce, query);

        let mut url = format!("{}{}", self.config.api_base_url, path);
        if !query.is_empty() {
            url.push('?');
            url.push_str(query);
        }

        debug!("Sending {} {}", method, url);

        let mut request = self
            .http
            .request(method, &url)
            .header(HEADER_CHANNEL_ID, &self.config.channel_id)
            .header(HEADER_AUTHORIZATION, &signature)
            .header(HEADER_AUTH_NONCE, &nonce);

        for (name, value) in extra_headers {
            request = request.header(*name, *value);
        }

        if let Some(json) = body_json {
            request = request.header(CONTENT_TYPE, "application/json").body(json);
        }

        let response = request
            .send()
            .await
            .map_err(|e| self.transport_error(e, &url))?;

        let http_status = response.status().as_u16();
        let raw_body = response
            .text()
            .await
            .map_err(|e| self.transport_error(e, &url))?;

        let envelope: ResponseEnvelope = serde_json::from_str(&raw_body).map_err(|e| {
            error!(
                "Unparseable LINE Pay response (HTTP {}): {}",
                http_status, e
            );
            LinePayError::Api {
                return_code: RETURN_CODE_PARSE_ERROR.to_string(),
                return_message: format!("Failed to parse response body: {}", e),
                http_status,
                raw_body: Some(raw_body.clone()),
            }
        })?;

        if envelope.return_code != RETURN_CODE_SUCCESS {
            error!(
                "LINE Pay API error: returnCode={}, returnMessage={}, status={}",
                envelope.return_code, envelope.return_message, http_status
            );
            return Err(LinePayError::Api {
                return_code: envelope.return_code,
                return_message: envelope.return_message,
                http_status,
                raw_body: Some(raw_body),
            });
        }

        let parsed: ApiResponse<T> = serde_json::from_str(&raw_body).map_err(|e| {
            LinePayError::Api {
                return_code: RETURN_CODE_PARSE_ERROR.to_string(),
                return_message: format!("Failed to parse response info: {}", e),
                http_status,
                raw_body: Some(raw_body.clone()),
            }
        })?;

        debug!("LINE Pay call succeeded: returnCode={}", parsed.return_code);
        Ok(parsed)
    }

    fn transport_error(&self, e: reqwest::Error, url: &str) -> LinePayError {
        if e.is_timeout() {
            LinePayError::Timeout {
                timeout_ms: self.config.timeout_ms(),
                url: url.to_string(),
            }
        } else {
            LinePayError::Network(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Environment;
    use crate::signature;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{header_exists, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(base_url: &str) -> LinePayConfig {
        LinePayConfig::new("test-channel-id", "test-channel-secret", Environment::Sandbox)
            .with_api_base_url(base_url)
    }

    fn test_client(server: &MockServer) -> LinePayClient {
        LinePayClient::new(test_config(&server.uri())).unwrap()
    }

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct EchoInfo {
        transaction_id: i64,
    }

    #[tokio::test]
    async fn test_get_sends_signing_headers_and_parses_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v4/payments"))
            .and(query_param("orderId", "ORDER-001"))
            .and(header_exists(HEADER_CHANNEL_ID))
            .and(header_exists(HEADER_AUTHORIZATION))
            .and(header_exists(HEADER_AUTH_NONCE))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "returnCode": "0000",
                "returnMessage": "Success.",
                "info": { "transactionId": 1234567890123456789_i64 }
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let response: ApiResponse<EchoInfo> = client
            .get("/v4/payments", &[("orderId", "ORDER-001")], &[])
            .await
            .unwrap();

        assert_eq!(response.return_code, "0000");
        assert_eq!(response.info.unwrap().transaction_id, 1234567890123456789);
    }

    #[tokio::test]
    async fn test_signature_header_matches_signing_contract() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v4/payments"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "returnCode": "0000",
                "returnMessage": "Success.",
                "info": { "transactionId": 1234567890123456789_i64 }
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let _: ApiResponse<EchoInfo> = client
            .get("/v4/payments", &[("orderId", "ORDER-001")], &[])
            .await
            .unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);

        let nonce = requests[0]
            .headers
            .get(HEADER_AUTH_NONCE)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        let sent_signature = requests[0]
            .headers
            .get(HEADER_AUTHORIZATION)
            .unwrap()
            .to_str()
            .unwrap();

        let expected = signature::generate_signature(
            "test-channel-secret",
            "/v4/payments",
            "",
            &nonce,
            "orderId=ORDER-001",
        );
        assert_eq!(sent_signature, expected);
    }

    #[tokio::test]
    async fn test_post_signs_serialized_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v4/payments/oneTimeKeys/pay"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "returnCode": "0000",
                "returnMessage": "Success.",
                "info": { "transactionId": 1234567890123456789_i64 }
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let body = json!({ "amount": 100, "currency": "TWD" });
        let _: ApiResponse<EchoInfo> = client
            .post("/v4/payments/oneTimeKeys/pay", Some(&body), &[])
            .await
            .unwrap();

        let requests = server.received_requests().await.unwrap();
        let sent_body = String::from_utf8(requests[0].body.clone()).unwrap();
        let nonce = requests[0]
            .headers
            .get(HEADER_AUTH_NONCE)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        let sent_signature = requests[0]
            .headers
            .get(HEADER_AUTHORIZATION)
            .unwrap()
            .to_str()
            .unwrap();

        let expected = signature::generate_signature(
            "test-channel-secret",
            "/v4/payments/oneTimeKeys/pay",
            &sent_body,
            &nonce,
            "",
        );
        assert_eq!(sent_signature, expected);
    }

    #[tokio::test]
    async fn test_extra_headers_are_additive() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v4/payments/orders/ORDER-001/void"))
            .and(header_exists(HEADER_AUTHORIZATION))
            .and(wiremock::matchers::header("X-Custom-Header", "custom"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "returnCode": "0000",
                "returnMessage": "Success."
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let response: ApiResponse<()> = client
            .post(
                "/v4/payments/orders/ORDER-001/void",
                None::<&()>,
                &[("X-Custom-Header", "custom")],
            )
            .await
            .unwrap();

        assert_eq!(response.return_code, "0000");
        assert!(response.info.is_none());
    }

    #[tokio::test]
    async fn test_api_error_return_code() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v4/payments"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "returnCode": "1104",
                "returnMessage": "Merchant not found"
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let result: LinePayResult<ApiResponse<EchoInfo>> =
            client.get("/v4/payments", &[], &[]).await;

        let err = result.unwrap_err();
        assert!(err.is_auth_error());
        match err {
            LinePayError::Api {
                return_code,
                return_message,
                http_status,
                ..
            } => {
                assert_eq!(return_code, "1104");
                assert_eq!(return_message, "Merchant not found");
                assert_eq!(http_status, 200);
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_api_error_on_http_failure_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v4/payments"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "returnCode": "9000",
                "returnMessage": "Internal error"
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let result: LinePayResult<ApiResponse<EchoInfo>> =
            client.get("/v4/payments", &[], &[]).await;

        let err = result.unwrap_err();
        assert!(err.is_internal_error());
        match err {
            LinePayError::Api { http_status, .. } => assert_eq!(http_status, 500),
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_parse_error_on_non_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v4/payments"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let result: LinePayResult<ApiResponse<EchoInfo>> =
            client.get("/v4/payments", &[], &[]).await;

        match result.unwrap_err() {
            LinePayError::Api {
                return_code,
                http_status,
                raw_body,
                ..
            } => {
                assert_eq!(return_code, RETURN_CODE_PARSE_ERROR);
                assert_eq!(http_status, 502);
                assert_eq!(raw_body.as_deref(), Some("Bad Gateway"));
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_parse_error_on_malformed_info() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v4/payments"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "returnCode": "0000",
                "returnMessage": "Success.",
                "info": { "transactionId": "not-a-number" }
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let result: LinePayResult<ApiResponse<EchoInfo>> =
            client.get("/v4/payments", &[], &[]).await;

        match result.unwrap_err() {
            LinePayError::Api { return_code, .. } => {
                assert_eq!(return_code, RETURN_CODE_PARSE_ERROR);
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_timeout_maps_to_timeout_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v4/payments"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({
                        "returnCode": "0000",
                        "returnMessage": "Success."
                    }))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let config = test_config(&server.uri()).with_timeout(Duration::from_millis(50));
        let client = LinePayClient::new(config).unwrap();
        let result: LinePayResult<ApiResponse<EchoInfo>> =
            client.get("/v4/payments", &[], &[]).await;

        match result.unwrap_err() {
            LinePayError::Timeout { timeout_ms, url } => {
                assert_eq!(timeout_ms, 50);
                assert!(url.contains("/v4/payments"));
            }
            other => panic!("expected Timeout error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_network_error_on_connection_refused() {
        let config = test_config("http://127.0.0.1:1");
        let client = LinePayClient::new(config).unwrap();
        let result: LinePayResult<ApiResponse<EchoInfo>> =
            client.get("/v4/payments", &[], &[]).await;

        match result.unwrap_err() {
            LinePayError::Network(_) => {}
            other => panic!("expected Network error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_rejects_invalid_config() {
        let config = LinePayConfig::new("", "secret", Environment::Sandbox);
        assert!(LinePayClient::new(config).is_err());

        let config = LinePayConfig::new("channel", "", Environment::Sandbox);
        assert!(LinePayClient::with_http_client(config, Client::new()).is_err());
    }
}
