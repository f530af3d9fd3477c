//! Client configuration and its builder.

use std::{path::Path, time::Duration};

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use url::Url;

use super::Environment;
use crate::error::{PaymentsenseError, Result};

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Immutable settings shared by every request a client issues.
///
/// A `ClientConfig` can only be obtained through [`ClientConfig::builder`],
/// [`ClientConfig::from_toml`] or [`ClientConfig::from_file`], all of which
/// validate it. Once built it never changes.
///
/// The API key and the gateway password are held as [`SecretString`] and are
/// redacted from `Debug` output.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use connecte::config::{ClientConfig, Environment};
///
/// let config = ClientConfig::builder()
///     .api_key("sk_test_123")
///     .environment(Environment::Test)
///     .timeout(Duration::from_secs(10))
///     .sandbox(true)
///     .build()?;
///
/// assert!(config.is_sandbox());
/// assert_eq!(config.api_url(), "https://e.test.connect.paymentsense.cloud/v1");
/// # Ok::<(), connecte::PaymentsenseError>(())
/// ```
#[derive(Debug)]
pub struct ClientConfig {
    api_key: SecretString,
    environment: Environment,
    timeout: Duration,
    sandbox: bool,
    gateway_username: Option<String>,
    gateway_password: Option<SecretString>,
    merchant_url: Option<String>,
    webhook_url: Option<String>,
    user_ip_address: Option<String>,
    api_base_url: Option<String>,
}

impl ClientConfig {
    /// Starts building a configuration.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Parses and validates a configuration from TOML.
    ///
    /// The API key may be given inline (`api_key`) or read from the
    /// environment variable named by `api_key_env`.
    ///
    /// ```toml
    /// api_key_env = "CONNECTE_API_KEY"
    /// environment = "production"
    /// timeout_secs = 20
    /// sandbox = false
    /// webhook_url = "https://shop.example.com/hooks/connecte"
    /// user_ip_address = "203.0.113.7"
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`PaymentsenseError::Configuration`] if the TOML is malformed,
    /// the key source is ambiguous or missing, or validation fails.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let raw: RawClientConfig = toml::from_str(toml_str)
            .map_err(|e| PaymentsenseError::Configuration(format!("invalid TOML config: {e}")))?;

        let api_key = match (raw.api_key, raw.api_key_env) {
            (Some(_), Some(_)) => {
                return Err(PaymentsenseError::Configuration(
                    "set either api_key or api_key_env, not both".to_owned(),
                ));
            }
            (Some(key), None) => Some(key),
            (None, Some(var)) => {
                validate_env_var_name(&var)?;
                let key = std::env::var(&var).map_err(|_| {
                    PaymentsenseError::Configuration(format!(
                        "environment variable {var} is not set"
                    ))
                })?;
                Some(key)
            }
            (None, None) => None,
        };

        let mut builder = ClientConfigBuilder {
            api_key: api_key.map(SecretString::from),
            environment: raw.environment,
            timeout: Duration::from_secs(raw.timeout_secs),
            sandbox: raw.sandbox,
            gateway_username: raw.gateway_username,
            gateway_password: raw.gateway_password.map(SecretString::from),
            merchant_url: raw.merchant_url,
            webhook_url: raw.webhook_url,
            user_ip_address: raw.user_ip_address,
            api_base_url: None,
        };
        if let Some(url) = raw.api_base_url {
            builder = builder.api_base_url(url);
        }
        builder.build()
    }

    /// Reads and validates a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or [`ClientConfig::from_toml`]
    /// fails.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            PaymentsenseError::Configuration(format!(
                "cannot read config file {}: {e}",
                path.as_ref().display()
            ))
        })?;
        Self::from_toml(&content)
    }

    /// API key sent as the bearer token.
    #[must_use]
    pub const fn api_key(&self) -> &SecretString {
        &self.api_key
    }

    /// Selected environment.
    #[must_use]
    pub const fn environment(&self) -> Environment {
        self.environment
    }

    /// Timeout applied to each request.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Whether requests carry `IS-SANDBOX: true`.
    #[must_use]
    pub const fn is_sandbox(&self) -> bool {
        self.sandbox
    }

    /// Default gateway username for non-default gateways.
    #[must_use]
    pub fn gateway_username(&self) -> Option<&str> {
        self.gateway_username.as_deref()
    }

    /// Default gateway password for non-default gateways.
    #[must_use]
    pub const fn gateway_password(&self) -> Option<&SecretString> {
        self.gateway_password.as_ref()
    }

    /// Merchant URL configured for this client.
    ///
    /// Informational only: payment tokens must carry their own `merchantUrl`.
    #[must_use]
    pub fn merchant_url(&self) -> Option<&str> {
        self.merchant_url.as_deref()
    }

    /// Default webhook URL for payment notifications.
    #[must_use]
    pub fn webhook_url(&self) -> Option<&str> {
        self.webhook_url.as_deref()
    }

    /// End-user IP address forwarded as `X-Forwarded-For`.
    #[must_use]
    pub fn user_ip_address(&self) -> Option<&str> {
        self.user_ip_address.as_deref()
    }

    /// REST API base URL: the override if one was configured, otherwise the
    /// environment's.
    #[must_use]
    pub fn api_url(&self) -> &str {
        self.api_base_url.as_deref().unwrap_or_else(|| self.environment.api_url())
    }

    /// Web SDK base URL for the environment.
    #[must_use]
    pub const fn web_url(&self) -> &'static str {
        self.environment.web_url()
    }

    /// CDN base URL for the environment.
    #[must_use]
    pub const fn cdn_url(&self) -> &'static str {
        self.environment.cdn_url()
    }

    /// Returns a builder pre-filled with these settings, for deriving a
    /// modified configuration.
    #[must_use]
    pub fn into_builder(self) -> ClientConfigBuilder {
        ClientConfigBuilder {
            api_key: Some(self.api_key),
            environment: Some(self.environment),
            timeout: self.timeout,
            sandbox: self.sandbox,
            gateway_username: self.gateway_username,
            gateway_password: self.gateway_password,
            merchant_url: self.merchant_url,
            webhook_url: self.webhook_url,
            user_ip_address: self.user_ip_address,
            api_base_url: self.api_base_url,
        }
    }
}

/// Builder for [`ClientConfig`].
///
/// Setters consume and return the builder. [`build`](Self::build) validates
/// the collected settings and freezes them.
#[derive(Debug)]
pub struct ClientConfigBuilder {
    api_key: Option<SecretString>,
    environment: Option<Environment>,
    timeout: Duration,
    sandbox: bool,
    gateway_username: Option<String>,
    gateway_password: Option<SecretString>,
    merchant_url: Option<String>,
    webhook_url: Option<String>,
    user_ip_address: Option<String>,
    api_base_url: Option<String>,
}

impl Default for ClientConfigBuilder {
    fn default() -> Self {
        Self {
            api_key: None,
            environment: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            sandbox: false,
            gateway_username: None,
            gateway_password: None,
            merchant_url: None,
            webhook_url: None,
            user_ip_address: None,
            api_base_url: None,
        }
    }
}

impl ClientConfigBuilder {
    /// Sets the API key (JWT issued by Connect-E).
    #[must_use]
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(api_key.into()));
        self
    }

    /// Sets the environment.
    #[must_use]
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Sets the per-request timeout (default 30 seconds).
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Enables or disables sandbox mode.
    #[must_use]
    pub fn sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = sandbox;
        self
    }

    /// Sets the default gateway username.
    #[must_use]
    pub fn gateway_username(mut self, username: impl Into<String>) -> Self {
        self.gateway_username = Some(username.into());
        self
    }

    /// Sets the default gateway password.
    #[must_use]
    pub fn gateway_password(mut self, password: impl Into<String>) -> Self {
        self.gateway_password = Some(SecretString::from(password.into()));
        self
    }

    /// Sets the merchant URL.
    #[must_use]
    pub fn merchant_url(mut self, url: impl Into<String>) -> Self {
        self.merchant_url = Some(url.into());
        self
    }

    /// Sets the default webhook URL.
    #[must_use]
    pub fn webhook_url(mut self, url: impl Into<String>) -> Self {
        self.webhook_url = Some(url.into());
        self
    }

    /// Sets the end-user IP address forwarded with each request.
    #[must_use]
    pub fn user_ip_address(mut self, ip: impl Into<String>) -> Self {
        self.user_ip_address = Some(ip.into());
        self
    }

    /// Overrides the REST API base URL of the environment.
    ///
    /// Meant for egress proxies and test doubles. Web and CDN URLs still come
    /// from the environment.
    #[must_use]
    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = Some(url.into());
        self
    }

    /// Validates the settings and returns the frozen configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PaymentsenseError::Configuration`] if:
    /// - the API key is missing or blank
    /// - no environment was chosen
    /// - the timeout is zero
    /// - the API base URL override is not an `http`/`https` URL
    /// - the API key or user IP address holds characters that cannot be
    ///   sent in an HTTP header
    pub fn build(self) -> Result<ClientConfig> {
        let api_key = match self.api_key {
            Some(key) if !key.expose_secret().trim().is_empty() => key,
            _ => return Err(PaymentsenseError::Configuration("API key is required".to_owned())),
        };

        let environment = self.environment.ok_or_else(|| {
            PaymentsenseError::Configuration("Environment is required".to_owned())
        })?;

        validate_header_value("api_key", api_key.expose_secret())?;
        if let Some(ref ip) = self.user_ip_address {
            validate_header_value("user_ip_address", ip)?;
        }

        if self.timeout.is_zero() {
            return Err(PaymentsenseError::Configuration(
                "timeout must be greater than zero".to_owned(),
            ));
        }

        if let Some(ref url) = self.api_base_url {
            validate_api_base_url(url)?;
        }

        Ok(ClientConfig {
            api_key,
            environment,
            timeout: self.timeout,
            sandbox: self.sandbox,
            gateway_username: self.gateway_username,
            gateway_password: self.gateway_password,
            merchant_url: self.merchant_url,
            webhook_url: self.webhook_url,
            user_ip_address: self.user_ip_address,
            api_base_url: self.api_base_url,
        })
    }
}

/// TOML shape of [`ClientConfig`].
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawClientConfig {
    api_key: Option<String>,
    api_key_env: Option<String>,
    environment: Option<Environment>,
    #[serde(default = "default_timeout_secs")]
    timeout_secs: u64,
    #[serde(default)]
    sandbox: bool,
    gateway_username: Option<String>,
    gateway_password: Option<String>,
    merchant_url: Option<String>,
    webhook_url: Option<String>,
    user_ip_address: Option<String>,
    api_base_url: Option<String>,
}

const fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Validates an environment variable name.
fn validate_env_var_name(name: &str) -> Result<()> {
    let Some(first_char) = name.chars().next() else {
        return Err(PaymentsenseError::Configuration(
            "environment variable name cannot be empty".to_owned(),
        ));
    };

    if !first_char.is_ascii_alphabetic() && first_char != '_' {
        return Err(PaymentsenseError::Configuration(format!(
            "environment variable name must start with letter or underscore: {name}"
        )));
    }

    if let Some(ch) = name.chars().find(|ch| !ch.is_ascii_alphanumeric() && *ch != '_') {
        return Err(PaymentsenseError::Configuration(format!(
            "environment variable name contains invalid character '{ch}': {name}"
        )));
    }

    Ok(())
}

/// Accepts visible ASCII, space and tab: what an HTTP header value may carry.
fn validate_header_value(setting: &str, value: &str) -> Result<()> {
    if value.bytes().all(|b| b == b'\t' || (b' '..=b'~').contains(&b)) {
        return Ok(());
    }
    Err(PaymentsenseError::Configuration(format!(
        "{setting} contains characters not allowed in an HTTP header"
    )))
}

fn validate_api_base_url(url: &str) -> Result<()> {
    let parsed = Url::parse(url).map_err(|e| {
        PaymentsenseError::Configuration(format!("invalid api_base_url '{url}': {e}"))
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(PaymentsenseError::Configuration(format!(
            "api_base_url must use http or https, got: {}",
            parsed.scheme()
        )));
    }

    if parsed.cannot_be_a_base() {
        return Err(PaymentsenseError::Configuration(format!(
            "api_base_url cannot be used as a base: {url}"
        )));
    }

    Ok(())
}
