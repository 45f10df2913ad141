//! # URL Encoding Helpers
//!
//! Path-segment and query-string encoding shared by the endpoint clients.

use std::borrow::Cow;

/// Percent-encode a single path segment.
///
/// Reserved characters in merchant order ids become safe literals, e.g.
/// `ORDER/001` encodes to `ORDER%2F001`.
pub fn encode_path_segment(segment: &str) -> Cow<'_, str> {
    urlencoding::encode(segment)
}

/// Build a canonical query string from ordered `key=value` pairs.
///
/// Keys pass through raw, values are percent-encoded, caller order is
/// preserved. The result carries no leading `?` and is the exact string
/// covered by the request signature.
pub fn build_query_string(params: &[(&str, &str)]) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}
