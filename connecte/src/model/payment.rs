//! Payment status record returned by `GET /payments/{id}`.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Outcome of a processed payment.
///
/// `status_code` is the gateway's business status: `0` means the payment
/// succeeded and any other value means it did not. Sub-codes are not
/// interpreted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInfo {
    /// Transaction time as sent by the gateway.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_date_time: Option<String>,
    /// Business status code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<i32>,
    /// Human-readable status message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Identifier reusable for refund, void and collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_reference: Option<String>,
    /// Authorisation code from the card issuer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_code: Option<String>,
    /// Masked card number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_number: Option<String>,
    /// Card expiry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
    /// Card brand.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_type: Option<String>,
    /// Cardholder name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_name: Option<String>,
}

impl PaymentInfo {
    /// Returns `true` when the gateway reports status code `0`.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status_code == Some(0)
    }

    /// Parses `transaction_date_time` as an RFC 3339 timestamp.
    ///
    /// Returns `None` when the field is absent or not RFC 3339.
    #[must_use]
    pub fn transaction_timestamp(&self) -> Option<DateTime<FixedOffset>> {
        self.transaction_date_time.as_deref().and_then(|s| DateTime::parse_from_rfc3339(s).ok())
    }
}
