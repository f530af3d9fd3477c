//! Transport abstraction between the request service and the network.
//!
//! The [`Transport`] trait is sealed: the service only ever talks to
//! [`HttpTransport`] in production and to in-crate doubles in tests. A
//! transport moves bytes; it never interprets status codes. Classification
//! of the response happens in the service layer.
//!
//! # Examples
//!
//! ```rust,no_run
//! use connecte::{
//!     config::{ClientConfig, Environment},
//!     transport::{Header, HttpTransport, RequestContext, Transport},
//! };
//! use url::Url;
//!
//! # async fn example() -> connecte::Result<()> {
//! let config = ClientConfig::builder().api_key("sk_test").environment(Environment::Test).build()?;
//! let transport = HttpTransport::with_config(&config)?;
//!
//! let url = Url::parse("https://e.test.connect.paymentsense.cloud/v1/payments/abc").unwrap();
//! let headers = [Header::new("Content-Type", "application/json")];
//! let response = transport.get(RequestContext { url: &url, headers: &headers }).await?;
//! println!("Status: {}", response.status);
//! # Ok(())
//! # }
//! ```

use std::fmt;
#[allow(
    redundant_imports,
    reason = "Future needed for RPITIT despite being in Edition 2024 prelude"
)]
use std::future::Future;

use url::Url;

use crate::error::Result;

pub mod http;
pub(crate) mod sealed;

pub use http::HttpTransport;

/// One outbound HTTP header.
///
/// Sensitive values (the bearer token) are masked in `Debug` output and
/// flagged as sensitive on the wire so that HTTP/2 header compression
/// never indexes them.
#[derive(Clone, PartialEq, Eq)]
pub struct Header {
    /// Header name.
    pub name: &'static str,
    /// Header value.
    pub value: String,
    /// Whether the value must be kept out of logs.
    pub sensitive: bool,
}

impl Header {
    /// Creates a non-sensitive header.
    #[must_use]
    pub fn new(name: &'static str, value: impl Into<String>) -> Self {
        Self { name, value: value.into(), sensitive: false }
    }

    /// Creates a header whose value is masked in logs.
    #[must_use]
    pub fn sensitive(name: &'static str, value: impl Into<String>) -> Self {
        Self { name, value: value.into(), sensitive: true }
    }
}

impl fmt::Debug for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = if self.sensitive { "[REDACTED]" } else { self.value.as_str() };
        f.debug_struct("Header").field("name", &self.name).field("value", &value).finish()
    }
}

/// Everything a transport needs to issue one request.
#[derive(Debug, Clone, Copy)]
pub struct RequestContext<'a> {
    /// Fully resolved endpoint URL.
    pub url: &'a Url,
    /// Headers to send, in order.
    pub headers: &'a [Header],
}

/// Raw response: status code and body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body decoded as UTF-8.
    pub body: String,
}

/// Async HTTP transport.
///
/// Implementations return `Ok` for every response the server sends,
/// whatever its status. `Err` is reserved for requests that never produced a
/// response: connection failures, timeouts, or headers that cannot be encoded.
pub trait Transport: sealed::private::Sealed + Send + Sync {
    /// Executes a GET request.
    ///
    /// # Errors
    ///
    /// Returns [`PaymentsenseError::Http`](crate::PaymentsenseError::Http) on
    /// network failure and
    /// [`PaymentsenseError::Transport`](crate::PaymentsenseError::Transport)
    /// for malformed headers.
    fn get<'a>(
        &'a self,
        ctx: RequestContext<'a>,
    ) -> impl Future<Output = Result<TransportResponse>> + Send + 'a;

    /// Executes a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    fn post<'a>(
        &'a self,
        ctx: RequestContext<'a>,
        body: String,
    ) -> impl Future<Output = Result<TransportResponse>> + Send + 'a;

    /// Protocol name for logging.
    fn protocol_name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_debug_masks_sensitive_value() {
        let header = Header::sensitive("Authorization", "Bearer sk_live_secret");
        let debug = format!("{header:?}");
        assert!(debug.contains("Authorization"));
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("sk_live_secret"));
    }

    #[test]
    fn test_header_debug_shows_plain_value() {
        let header = Header::new("IS-SANDBOX", "true");
        assert!(!header.sensitive);
        assert!(format!("{header:?}").contains("true"));
    }

    #[test]
    fn test_request_context_is_copy() {
        let url = Url::parse("https://example.com/v1/access-tokens").unwrap();
        let headers = [Header::new("Content-Type", "application/json")];
        let ctx = RequestContext { url: &url, headers: &headers };

        let copy = ctx;
        assert_eq!(ctx.url.path(), "/v1/access-tokens");
        assert_eq!(copy.headers.len(), 1);
    }
}
