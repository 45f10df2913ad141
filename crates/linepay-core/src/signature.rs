//! # Request Signing
//!
//! HMAC-SHA256 request signing for the LINE Pay API.
//!
//! Every request carries a Base64 signature computed over the channel
//! secret, the request path, the serialized body (empty for GET), the
//! canonical query string (empty for POST), and a single-use nonce.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use uuid::Uuid;

type HmacSha256 = Hmac<Sha256>;

/// Generate a single-use request nonce
pub fn generate_nonce() -> String {
    Uuid::new_v4().to_string()
}

/// Compute the request signature.
///
/// The signed message is `secret + uri + body + query_string + nonce`.
/// Absent parts are passed as empty strings, so omitting the query yields
/// the same signature as passing `""`.
pub fn generate_signature(
    secret: &str,
    uri: &str,
    body: &str,
    nonce: &str,
    query_string: &str,
) -> String {
    let message = format!("{}{}{}{}{}", secret, uri, body, query_string, nonce);
    compute_hmac_base64(secret, &message)
}

/// Verify a candidate signature over `data`.
///
/// Returns false for any mismatch, including a candidate of different
/// length; never errors on malformed input.
pub fn verify_signature(secret: &str, data: &str, candidate: &str) -> bool {
    let expected = compute_hmac_base64(secret, data);
    constant_time_compare(&expected, candidate)
}

fn compute_hmac_base64(secret: &str, message: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(message.as_bytes());
    let result = mac.finalize();
    STANDARD.encode(result.into_bytes())
}

fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.bytes()
        .zip(b.bytes())
        .fold(0, |acc, (x, y)| acc | (x ^ y))
        == 0
}
