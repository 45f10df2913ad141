//! # Transaction Helpers
//!
//! Transaction-id validation and confirm-redirect query parsing.

use crate::error::{LinePayError, LinePayResult};

/// Number of decimal digits in a LINE Pay transaction id.
const TRANSACTION_ID_DIGITS: usize = 19;

/// Returns true when `id` is a well-formed transaction id (19 digits)
pub fn is_valid_transaction_id(id: &str) -> bool {
    id.len() == TRANSACTION_ID_DIGITS && id.bytes().all(|b| b.is_ascii_digit())
}

/// Validate a transaction id, erroring when malformed
pub fn validate_transaction_id(id: &str) -> LinePayResult<()> {
    if is_valid_transaction_id(id) {
        Ok(())
    } else {
        Err(LinePayError::Validation {
            message: format!(
                "Invalid transactionId format: expected 19 digits, got '{}'",
                id
            ),
            field: Some("transactionId".to_string()),
        })
    }
}

/// Identifiers extracted from a confirm-redirect query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmQuery {
    pub transaction_id: String,
    pub order_id: Option<String>,
}

/// Extract `transactionId` and `orderId` from confirm-redirect query pairs.
///
/// The first occurrence of a key wins when it repeats. A missing or empty
/// `transactionId` is an error; `orderId` is optional.
pub fn parse_confirm_query(pairs: &[(String, String)]) -> LinePayResult<ConfirmQuery> {
    let first = |key: &str| {
        pairs
            .iter()
            .find(|(k, _)| k.as_str() == key)
            .map(|(_, v)| v.clone())
            .filter(|v| !v.is_empty())
    };

    let transaction_id = first("transactionId").ok_or_else(|| LinePayError::Validation {
        message: "Missing transactionId in confirm query".to_string(),
        field: Some("transactionId".to_string()),
    })?;

    Ok(ConfirmQuery {
        transaction_id,
        order_id: first("orderId"),
    })
}
