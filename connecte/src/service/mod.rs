//! Request orchestration: validation, default merging, header composition,
//! dispatch and response classification.
//!
//! [`PaymentService`] is the engine behind
//! [`PaymentsenseClient`](crate::PaymentsenseClient). Each operation is one
//! request and one response; nothing is retried or cached.
//!
//! # Pipeline
//!
//! 1. Token requests are checked by [`validate_payment_token`] and completed
//!    by [`apply_config_defaults`]
//! 2. The body is serialized with unset fields omitted
//! 3. The URL is resolved by [`endpoint_url`] and sent with the headers from
//!    [`build_headers`]
//! 4. [`classify_response`] turns the status and body into a typed result

mod defaults;
mod headers;
mod response;
mod validation;

#[cfg(test)]
#[path = "tests/proptest_validation.rs"]
mod proptest_validation;

use std::sync::Arc;

pub use defaults::apply_config_defaults;
pub use headers::{AUTHORIZATION, CONTENT_TYPE, IS_SANDBOX, X_FORWARDED_FOR, build_headers};
pub use response::{classify_response, endpoint_url};
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument};
use url::Url;
pub use validation::{
    is_currency_code, is_dot_segment, is_minor_units, validate_path_id, validate_payment_token,
};

use crate::{
    config::ClientConfig,
    error::{PaymentsenseError, Result},
    model::{
        CrossReferencePaymentRequest, CrossReferencePaymentResponse, PaymentInfo, PaymentToken,
        PaymentTokenResponse,
    },
    transport::{Header, HttpTransport, RequestContext, Transport},
};

const ACCESS_TOKENS: &str = "access-tokens";
const PAYMENTS: &str = "payments";
const CROSS_REFERENCE_PAYMENTS: &str = "cross-reference-payments";

/// Validates a token request and fills in configured defaults.
///
/// # Errors
///
/// Returns [`PaymentsenseError::Validation`] from
/// [`validate_payment_token`]; defaults are only merged into valid tokens.
pub fn prepare_payment_token(token: PaymentToken, config: &ClientConfig) -> Result<PaymentToken> {
    validate_payment_token(&token)?;
    Ok(apply_config_defaults(token, config))
}

/// Issues Connect-E requests over a [`Transport`].
///
/// Holds the shared configuration and the headers derived from it. Both are
/// read-only, so a service can be cloned and used from many tasks at once.
#[derive(Debug, Clone)]
pub struct PaymentService<T = HttpTransport> {
    config: Arc<ClientConfig>,
    headers: Arc<[Header]>,
    transport: T,
}

impl PaymentService<HttpTransport> {
    /// Creates a service backed by reqwest.
    ///
    /// # Errors
    ///
    /// Returns [`PaymentsenseError::Http`] if the HTTP client cannot be built.
    pub fn new(config: Arc<ClientConfig>) -> Result<Self> {
        let transport = HttpTransport::with_config(&config)?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: Transport> PaymentService<T> {
    pub(crate) fn with_transport(config: Arc<ClientConfig>, transport: T) -> Self {
        let headers = build_headers(&config).into();
        Self { config, headers, transport }
    }

    #[cfg(test)]
    pub(crate) const fn transport(&self) -> &T {
        &self.transport
    }

    /// Configuration shared by all requests.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// `POST /access-tokens`.
    ///
    /// # Errors
    ///
    /// Returns a validation error before any network call if a required field
    /// is missing or malformed; otherwise any error from dispatch or
    /// [`classify_response`].
    #[instrument(
        skip(self, token),
        fields(
            order_id = token.order_id.as_deref().unwrap_or_default(),
            environment = %self.config.environment()
        )
    )]
    pub async fn create_payment_token(&self, token: PaymentToken) -> Result<PaymentTokenResponse> {
        info!("creating payment token");

        let token = prepare_payment_token(token, &self.config)?;
        let body = serde_json::to_string(&token).map_err(PaymentsenseError::Serialization)?;
        let url = self.endpoint(&[ACCESS_TOKENS])?;

        let response: PaymentTokenResponse = self.post(&url, body).await?;
        info!(expires_at = ?response.expires_at, "payment token created");
        Ok(response)
    }

    /// `GET /payments/{payment_id}`.
    ///
    /// The id is only checked for `.` and `..`, which cannot be sent as a
    /// path segment; the gateway rejects unknown ids.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a dot-segment id; otherwise any error
    /// from dispatch or [`classify_response`].
    #[instrument(skip(self), fields(environment = %self.config.environment()))]
    pub async fn get_payment_info(&self, payment_id: &str) -> Result<PaymentInfo> {
        info!("retrieving payment info");

        validate_path_id("paymentId", payment_id)?;
        let url = self.endpoint(&[PAYMENTS, payment_id])?;
        let info: PaymentInfo = self.get(&url).await?;

        info!(status_code = ?info.status_code, "payment info retrieved");
        Ok(info)
    }

    /// `POST /cross-reference-payments/{payment_token}`.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `payment_token` is `.` or `..`;
    /// otherwise any error from serialization, dispatch or
    /// [`classify_response`].
    #[instrument(skip(self, request), fields(environment = %self.config.environment()))]
    pub async fn execute_cross_reference_payment(
        &self,
        payment_token: &str,
        request: &CrossReferencePaymentRequest,
    ) -> Result<CrossReferencePaymentResponse> {
        info!(has_cv2 = request.cv2.is_some(), "executing cross-reference payment");

        validate_path_id("paymentToken", payment_token)?;
        let body = serde_json::to_string(request).map_err(PaymentsenseError::Serialization)?;
        let url = self.endpoint(&[CROSS_REFERENCE_PAYMENTS, payment_token])?;

        let response: CrossReferencePaymentResponse = self.post(&url, body).await?;
        info!(status_code = ?response.status_code, "cross-reference payment completed");
        Ok(response)
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        endpoint_url(self.config.api_url(), segments)
    }

    fn context<'a>(&'a self, url: &'a Url) -> RequestContext<'a> {
        debug!(
            %url,
            protocol = self.transport.protocol_name(),
            sandbox = self.config.is_sandbox(),
            forwarded_for = self.headers.iter().any(|h| h.name == X_FORWARDED_FOR),
            "dispatching request"
        );
        RequestContext { url, headers: &self.headers }
    }

    async fn get<R: DeserializeOwned>(&self, url: &Url) -> Result<R> {
        let response = self.transport.get(self.context(url)).await?;
        classify_response(response)
    }

    async fn post<R: DeserializeOwned>(&self, url: &Url, body: String) -> Result<R> {
        let response = self.transport.post(self.context(url), body).await?;
        classify_response(response)
    }
}
