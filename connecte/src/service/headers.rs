//! Outbound header composition.

use secrecy::ExposeSecret;

use crate::{config::ClientConfig, transport::Header};

/// Bearer token header.
pub const AUTHORIZATION: &str = "Authorization";
/// Body media type header.
pub const CONTENT_TYPE: &str = "Content-Type";
/// Sandbox switch understood by Connect-E.
pub const IS_SANDBOX: &str = "IS-SANDBOX";
/// End-user IP forwarded to the gateway's fraud checks.
pub const X_FORWARDED_FOR: &str = "X-Forwarded-For";

/// Builds the headers sent with every request issued under `config`.
///
/// `Authorization` and `Content-Type` are always present. `IS-SANDBOX: true`
/// is added only in sandbox mode and `X-Forwarded-For` only when a non-empty
/// user IP is configured; neither is ever sent with an empty or `false`
/// value.
///
/// # Examples
///
/// ```
/// use connecte::{config::{ClientConfig, Environment}, service::build_headers};
///
/// let config = ClientConfig::builder()
///     .api_key("sk_test")
///     .environment(Environment::Test)
///     .sandbox(true)
///     .build()?;
///
/// let names: Vec<_> = build_headers(&config).iter().map(|h| h.name).collect();
/// assert_eq!(names, ["Authorization", "Content-Type", "IS-SANDBOX"]);
/// # Ok::<(), connecte::PaymentsenseError>(())
/// ```
#[must_use]
pub fn build_headers(config: &ClientConfig) -> Vec<Header> {
    [
        Some(Header::sensitive(
            AUTHORIZATION,
            format!("Bearer {}", config.api_key().expose_secret()),
        )),
        Some(Header::new(CONTENT_TYPE, "application/json")),
        config.is_sandbox().then(|| Header::new(IS_SANDBOX, "true")),
        config
            .user_ip_address()
            .filter(|ip| !ip.is_empty())
            .map(|ip| Header::new(X_FORWARDED_FOR, ip)),
    ]
    .into_iter()
    .flatten()
    .collect()
}
