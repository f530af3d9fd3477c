//! Endpoint resolution and response classification.

use serde::de::DeserializeOwned;
use tracing::warn;
use url::Url;

use super::validation::is_dot_segment;
use crate::{
    error::{PaymentsenseError, Result},
    transport::TransportResponse,
};

/// Appends `segments` to the API base URL.
///
/// Each segment is percent-encoded, so an identifier containing `/` or `?`
/// stays a single path segment.
///
/// # Errors
///
/// Returns [`PaymentsenseError::Transport`] if `base` is not a hierarchical
/// URL, or if a segment is `.` or `..`, which would be dropped from the path.
pub fn endpoint_url(base: &str, segments: &[&str]) -> Result<Url> {
    if let Some(segment) = segments.iter().find(|s| is_dot_segment(s)) {
        return Err(PaymentsenseError::Transport(format!(
            "path segment {segment:?} cannot be sent as part of a URL path"
        )));
    }

    let mut url = Url::parse(base)
        .map_err(|e| PaymentsenseError::Transport(format!("invalid API base URL {base}: {e}")))?;

    url.path_segments_mut()
        .map_err(|()| {
            PaymentsenseError::Transport(format!("API base URL cannot be a base: {base}"))
        })?
        .pop_if_empty()
        .extend(segments);

    Ok(url)
}

/// Maps a raw response onto the operation's result type.
///
/// Only the HTTP status is considered: `200` is decoded as `R`, `401` and
/// `403` become [`PaymentsenseError::Authentication`], and every other status
/// becomes [`PaymentsenseError::Api`] carrying the raw body. Business status
/// codes inside a 200 body are left for the caller.
///
/// # Errors
///
/// See above; a 200 body that does not decode as `R` yields
/// [`PaymentsenseError::Deserialization`].
pub fn classify_response<R: DeserializeOwned>(response: TransportResponse) -> Result<R> {
    let TransportResponse { status, body } = response;
    match status {
        200 => serde_json::from_str(&body).map_err(PaymentsenseError::Deserialization),
        401 | 403 => {
            warn!(status, "authentication rejected by gateway");
            Err(PaymentsenseError::Authentication { status, message: body })
        }
        _ => {
            warn!(status, "gateway returned an error status");
            Err(PaymentsenseError::Api { status, body })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PaymentTokenResponse;

    fn response(status: u16, body: &str) -> TransportResponse {
        TransportResponse { status, body: body.to_owned() }
    }

    #[test]
    fn test_endpoint_url() {
        let url = endpoint_url("https://e.test.connect.paymentsense.cloud/v1", &["access-tokens"])
            .unwrap();
        assert_eq!(url.as_str(), "https://e.test.connect.paymentsense.cloud/v1/access-tokens");

        let url = endpoint_url("http://127.0.0.1:1234/", &["payments", "pay_1"]).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:1234/payments/pay_1");
    }

    #[test]
    fn test_endpoint_url_trailing_slash() {
        let url = endpoint_url("https://api.example/v1/", &["payments", "p"]).unwrap();
        assert_eq!(url.path(), "/v1/payments/p");
    }

    #[test]
    fn test_endpoint_url_encodes_segments() {
        let url = endpoint_url("https://api.example/v1", &["payments", "a/b?c"]).unwrap();
        assert_eq!(url.path(), "/v1/payments/a%2Fb%3Fc");
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_endpoint_url_never_drops_dot_segments() {
        for id in [".", ".."] {
            let err = endpoint_url("https://api.example/v1", &["payments", id]).unwrap_err();
            assert!(matches!(err, PaymentsenseError::Transport(_)), "{id:?} accepted");
        }

        let url = endpoint_url("https://api.example/v1", &["payments", "..."]).unwrap();
        assert_eq!(url.path(), "/v1/payments/...");
    }

    #[test]
    fn test_endpoint_url_rejects_non_base() {
        let err = endpoint_url("mailto:ops@example.com", &["x"]).unwrap_err();
        assert!(matches!(err, PaymentsenseError::Transport(_)));
    }

    #[test]
    fn test_success_deserializes() {
        let parsed: PaymentTokenResponse =
            classify_response(response(200, r#"{"id":"tok_123","expiresAt":1700000000}"#)).unwrap();
        assert_eq!(parsed.id, "tok_123");
        assert_eq!(parsed.expires_at, Some(1_700_000_000));
    }

    #[test]
    fn test_success_with_bad_body() {
        let err = classify_response::<PaymentTokenResponse>(response(200, "<html>")).unwrap_err();
        assert!(matches!(err, PaymentsenseError::Deserialization(_)));
    }

    #[test]
    fn test_authentication_statuses() {
        for status in [401, 403] {
            let err = classify_response::<PaymentTokenResponse>(response(status, r#"{"id":"x"}"#))
                .unwrap_err();
            assert!(err.is_authentication());
            assert_eq!(err.status(), Some(status));
        }
    }

    #[test]
    fn test_other_statuses_are_api_errors() {
        for status in [201, 204, 400, 404, 422, 500, 503] {
            let err =
                classify_response::<PaymentTokenResponse>(response(status, "boom")).unwrap_err();
            assert!(err.is_api(), "status {status}");
            assert_eq!(err.status(), Some(status));
            assert!(err.to_string().contains("boom"));
        }
    }
}
