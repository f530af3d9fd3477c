//! HTTP transport backed by reqwest.

use std::time::Duration;

use reqwest::{
    Client, Method,
    header::{HeaderMap, HeaderName, HeaderValue},
};
use tracing::{debug, instrument};

use crate::{
    config::ClientConfig,
    error::{PaymentsenseError, Result},
    transport::{Header, RequestContext, Transport, TransportResponse, sealed},
};

/// Upper bound for establishing a TCP/TLS connection.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Rejects control characters that would allow header injection.
fn validate_header(name: &str, value: &str) -> Result<()> {
    if name.contains(['\r', '\n', '\0']) {
        return Err(PaymentsenseError::Transport(
            "Invalid header name: control characters not allowed".to_owned(),
        ));
    }
    if value.contains(['\r', '\n', '\0']) {
        return Err(PaymentsenseError::Transport(format!(
            "Invalid value for header {name}: control characters not allowed"
        )));
    }
    Ok(())
}

fn header_map(headers: &[Header]) -> Result<HeaderMap> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for header in headers {
        validate_header(header.name, &header.value)?;
        let name = HeaderName::from_bytes(header.name.as_bytes()).map_err(|e| {
            PaymentsenseError::Transport(format!("Invalid header name {}: {e}", header.name))
        })?;
        let mut value = HeaderValue::from_str(&header.value).map_err(|e| {
            PaymentsenseError::Transport(format!("Invalid value for header {}: {e}", header.name))
        })?;
        value.set_sensitive(header.sensitive);
        map.insert(name, value);
    }
    Ok(map)
}

/// HTTP/1.1 and HTTP/2 transport using reqwest.
///
/// Cloning is cheap: clones share one connection pool.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use connecte::{
///     config::{ClientConfig, Environment},
///     transport::{HttpTransport, Transport},
/// };
///
/// let config = ClientConfig::builder()
///     .api_key("sk_test")
///     .environment(Environment::Test)
///     .timeout(Duration::from_secs(5))
///     .build()?;
///
/// let transport = HttpTransport::with_config(&config)?;
/// assert_eq!(transport.protocol_name(), "http");
/// # Ok::<(), connecte::PaymentsenseError>(())
/// ```
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl sealed::private::Sealed for HttpTransport {}

impl HttpTransport {
    /// Creates a transport whose requests time out after the configured
    /// duration.
    ///
    /// # Errors
    ///
    /// Returns [`PaymentsenseError::Http`] if the TLS backend cannot be
    /// initialised.
    pub fn with_config(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(CONNECT_TIMEOUT.min(config.timeout()))
            .user_agent(concat!("connecte-rust/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(PaymentsenseError::Http)?;

        Ok(Self { client })
    }

    #[instrument(skip(self, ctx, method, body), fields(url = %ctx.url, method = %method))]
    async fn execute_request(
        &self,
        ctx: RequestContext<'_>,
        method: Method,
        body: Option<String>,
    ) -> Result<TransportResponse> {
        let headers = header_map(ctx.headers)?;

        let mut request = self.client.request(method, ctx.url.clone()).headers(headers);
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        debug!(status, body_len = body.len(), "response received");

        Ok(TransportResponse { status, body })
    }
}

impl Transport for HttpTransport {
    async fn get<'a>(&'a self, ctx: RequestContext<'a>) -> Result<TransportResponse> {
        self.execute_request(ctx, Method::GET, None).await
    }

    async fn post<'a>(
        &'a self,
        ctx: RequestContext<'a>,
        body: String,
    ) -> Result<TransportResponse> {
        self.execute_request(ctx, Method::POST, Some(body)).await
    }

    fn protocol_name(&self) -> &'static str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::*;
    use crate::config::Environment;

    fn config() -> ClientConfig {
        ClientConfig::builder().api_key("sk_test").environment(Environment::Test).build().unwrap()
    }

    #[test]
    fn test_with_config() {
        let transport = HttpTransport::with_config(&config()).unwrap();
        assert_eq!(transport.protocol_name(), "http");
        assert!(format!("{transport:?}").contains("HttpTransport"));
    }

    #[test]
    fn test_http2_enabled() {
        let client = Client::builder().http2_prior_knowledge().build();
        assert!(client.is_ok());
    }

    #[test]
    fn test_validate_header_valid() {
        assert!(validate_header("Content-Type", "application/json").is_ok());
        assert!(validate_header("X-Forwarded-For", "203.0.113.7").is_ok());
    }

    #[test]
    fn test_validate_header_crlf_injection_blocked() {
        let result = validate_header("X-Evil\r\n", "value");
        assert!(matches!(result.unwrap_err(), PaymentsenseError::Transport(_)));

        let result = validate_header("X-Forwarded-For", "1.2.3.4\r\nEvil-Header: injected");
        assert!(matches!(result.unwrap_err(), PaymentsenseError::Transport(_)));

        assert!(validate_header("X-Evil\0", "value").is_err());
        assert!(validate_header("X-Custom", "value\0evil").is_err());
    }

    #[test]
    fn test_header_map_marks_sensitive_values() {
        let headers = [
            Header::sensitive("Authorization", "Bearer sk_test"),
            Header::new("IS-SANDBOX", "true"),
        ];

        let map = header_map(&headers).unwrap();
        assert_eq!(map.len(), 2);
        assert!(map["authorization"].is_sensitive());
        assert!(!map["is-sandbox"].is_sensitive());
        assert_eq!(map["is-sandbox"], "true");
    }

    #[test]
    fn test_header_map_rejects_non_ascii_value() {
        let headers = [Header::new("X-Forwarded-For", "bad\u{7f}value")];
        let err = header_map(&headers).unwrap_err();
        assert!(matches!(err, PaymentsenseError::Transport(_)));
    }

    #[tokio::test]
    async fn test_crlf_header_fails_before_sending() {
        let transport = HttpTransport::with_config(&config()).unwrap();
        let url = Url::parse("https://e.test.connect.paymentsense.cloud/v1/payments/x").unwrap();
        let headers = [Header::new("X-Forwarded-For", "1.1.1.1\r\nX-Injected: 1")];

        let result = transport.get(RequestContext { url: &url, headers: &headers }).await;
        assert!(matches!(result.unwrap_err(), PaymentsenseError::Transport(_)));
    }

    #[tokio::test]
    async fn test_connection_refused_maps_to_http_error() {
        let transport = HttpTransport::with_config(&config()).unwrap();
        let url = Url::parse("http://127.0.0.1:9/v1/payments/x").unwrap();

        let result = transport.get(RequestContext { url: &url, headers: &[] }).await;
        assert!(matches!(result.unwrap_err(), PaymentsenseError::Http(_)));
    }
}
