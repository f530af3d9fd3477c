//! Refund, void and collection against an earlier transaction.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Request body for `POST /cross-reference-payments/{token}`.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossReferencePaymentRequest {
    /// Cross reference of the transaction being acted on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_reference: Option<String>,
    /// Card security code, when the gateway asks for it.
    #[serde(default, with = "crate::model::secret", skip_serializing_if = "Option::is_none")]
    pub cv2: Option<SecretString>,
}

impl CrossReferencePaymentRequest {
    /// Creates a request targeting `cross_reference` without a CV2.
    #[must_use]
    pub fn new(cross_reference: impl Into<String>) -> Self {
        Self { cross_reference: Some(cross_reference.into()), cv2: None }
    }

    /// Attaches a CV2.
    #[must_use]
    pub fn with_cv2(mut self, cv2: impl Into<String>) -> Self {
        self.cv2 = Some(SecretString::from(cv2.into()));
        self
    }
}

/// Response to a cross-reference payment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossReferencePaymentResponse {
    /// Business status code; `0` is success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<i32>,
    /// Authorisation code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_code: Option<String>,
    /// Human-readable status message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CrossReferencePaymentResponse {
    /// Returns `true` when the gateway reports status code `0`.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status_code == Some(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_without_cv2() {
        let json = serde_json::to_string(&CrossReferencePaymentRequest::new("xref-1")).unwrap();
        assert_eq!(json, r#"{"crossReference":"xref-1"}"#);
    }

    #[test]
    fn test_request_with_cv2() {
        let request = CrossReferencePaymentRequest::new("xref-1").with_cv2("123");
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"crossReference":"xref-1","cv2":"123"}"#);
        assert!(!format!("{request:?}").contains("123"));
    }

    #[test]
    fn test_response_status() {
        let ok: CrossReferencePaymentResponse =
            serde_json::from_str(r#"{"statusCode":0,"authCode":"A1","message":"Refunded"}"#)
                .unwrap();
        assert!(ok.is_success());
        assert_eq!(ok.auth_code.as_deref(), Some("A1"));

        let declined: CrossReferencePaymentResponse =
            serde_json::from_str(r#"{"statusCode":30}"#).unwrap();
        assert!(!declined.is_success());
    }
}
