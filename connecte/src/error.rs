//! Error types for the Connect-E client.
//!
//! Every fallible operation in this crate returns [`Result<T>`], whose error
//! type is [`PaymentsenseError`]. All variants implement [`std::error::Error`]
//! via [`thiserror::Error`].
//!
//! # Error Categories
//!
//! - **Local errors** ([`PaymentsenseError::Configuration`],
//!   [`PaymentsenseError::Validation`]): detected before any network call
//! - **Remote errors** ([`PaymentsenseError::Authentication`],
//!   [`PaymentsenseError::Api`]): the gateway answered with a non-200 status
//! - **Wrapped errors** ([`PaymentsenseError::Http`],
//!   [`PaymentsenseError::Serialization`],
//!   [`PaymentsenseError::Deserialization`], [`PaymentsenseError::Transport`]):
//!   network or codec failures that keep their underlying cause
//!
//! # Examples
//!
//! ```
//! use connecte::error::{PaymentsenseError, Result};
//!
//! fn require_order_id(order_id: &str) -> Result<()> {
//!     if order_id.is_empty() {
//!         return Err(PaymentsenseError::validation("orderId", "is required and cannot be empty"));
//!     }
//!     Ok(())
//! }
//!
//! let err = require_order_id("").unwrap_err();
//! assert_eq!(err.code(), Some("VALIDATION_ERROR"));
//! assert_eq!(err.status(), Some(400));
//! ```

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, PaymentsenseError>;

/// Symbolic code carried by validation failures.
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
/// Symbolic code carried by 401/403 rejections.
pub const AUTHENTICATION_FAILED: &str = "AUTHENTICATION_FAILED";
/// Symbolic code carried by every other non-200 response.
pub const API_ERROR: &str = "API_ERROR";

/// Errors that can occur while talking to the Connect-E API.
///
/// # Error Recovery
///
/// None of these errors are retried by the client.
///
/// - **Configuration** ([`Configuration`](Self::Configuration)): fix the
///   settings and rebuild the client
/// - **Validation** ([`Validation`](Self::Validation)): correct the request and
///   call again
/// - **Authentication** ([`Authentication`](Self::Authentication)): check the
///   API key and gateway credentials
/// - **API** ([`Api`](Self::Api)): inspect the raw body returned by the gateway
/// - **Network** ([`Http`](Self::Http)): may be retried by the caller with its
///   own backoff policy
#[must_use = "errors should be handled, propagated, or explicitly panicked"]
#[derive(Debug, Error)]
pub enum PaymentsenseError {
    /// Client configuration is invalid.
    ///
    /// Raised while building a [`ClientConfig`](crate::config::ClientConfig),
    /// for example when the API key is blank or the TOML file cannot be read.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// A request failed local validation before any network call.
    ///
    /// Carries the wire name of the offending field. Maps to
    /// [`VALIDATION_ERROR`] with status 400.
    ///
    /// # Examples
    ///
    /// ```
    /// use connecte::error::PaymentsenseError;
    ///
    /// let err = PaymentsenseError::validation("amount", "must be numeric");
    /// assert_eq!(err.to_string(), "Validation failed for field 'amount': must be numeric");
    /// ```
    #[error("Validation failed for field '{field}': {message}")]
    Validation {
        /// Wire name of the rejected field.
        field: &'static str,
        /// Why the field was rejected.
        message: String,
    },

    /// The gateway rejected the credentials (HTTP 401 or 403).
    ///
    /// Usually an invalid, expired, or missing API key.
    #[error("Authentication failed: {message}")]
    Authentication {
        /// HTTP status returned by the gateway.
        status: u16,
        /// Raw response body.
        message: String,
    },

    /// The gateway answered with a status other than 200, 401 or 403.
    #[error("API request failed: {body}")]
    Api {
        /// HTTP status returned by the gateway.
        status: u16,
        /// Raw response body, kept verbatim for inspection.
        body: String,
    },

    /// Network failure: connection refused, DNS, TLS, or timeout.
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    /// A request payload could not be encoded as JSON.
    #[error("Failed to serialize request: {0}")]
    Serialization(#[source] serde_json::Error),

    /// A 200 response body could not be decoded into the expected type.
    #[error("Failed to deserialize response: {0}")]
    Deserialization(#[source] serde_json::Error),

    /// A request could not be assembled (bad URL, illegal header value).
    #[error("Transport error: {0}")]
    Transport(String),
}

impl PaymentsenseError {
    /// Builds a field-scoped validation error.
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation { field, message: message.into() }
    }

    /// Returns the symbolic error code, if this kind carries one.
    #[must_use]
    pub const fn code(&self) -> Option<&'static str> {
        match self {
            Self::Validation { .. } => Some(VALIDATION_ERROR),
            Self::Authentication { .. } => Some(AUTHENTICATION_FAILED),
            Self::Api { .. } => Some(API_ERROR),
            _ => None,
        }
    }

    /// Returns the HTTP status associated with this error, if any.
    ///
    /// Validation errors report 400; remote errors report the status the
    /// gateway sent.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Validation { .. } => Some(400),
            Self::Authentication { status, .. } | Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns `true` for local validation failures.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Returns `true` for 401/403 rejections.
    #[must_use]
    pub const fn is_authentication(&self) -> bool {
        matches!(self, Self::Authentication { .. })
    }

    /// Returns `true` for non-200 responses other than 401/403.
    #[must_use]
    pub const fn is_api(&self) -> bool {
        matches!(self, Self::Api { .. })
    }
}
