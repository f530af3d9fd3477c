//! Public entry point.

use std::sync::Arc;

use tracing::instrument;

use crate::{
    config::ClientConfig,
    error::Result,
    model::{
        CrossReferencePaymentRequest, CrossReferencePaymentResponse, PaymentInfo, PaymentToken,
        PaymentTokenResponse,
    },
    service::PaymentService,
    transport::{HttpTransport, Transport},
};

/// Client for the Paymentsense Connect-E REST API.
///
/// Cloning is cheap and clones share configuration and connection pool, so
/// one client can serve any number of concurrent tasks.
///
/// # Examples
///
/// ```rust,no_run
/// use connecte::{
///     PaymentsenseClient,
///     config::{ClientConfig, Environment},
///     model::{CurrencyCode, PaymentToken, TransactionType},
/// };
///
/// # async fn example() -> connecte::Result<()> {
/// let config = ClientConfig::builder()
///     .api_key(std::env::var("CONNECTE_API_KEY").unwrap_or_default())
///     .environment(Environment::Test)
///     .build()?;
/// let client = PaymentsenseClient::new(config)?;
///
/// let token = PaymentToken::new(
///     "1000",
///     CurrencyCode::Gbp,
///     TransactionType::Sale,
///     "ORD-1001",
///     "https://shop.example.com",
/// );
/// let response = client.create_payment_token(token).await?;
/// println!("token {} expires at {:?}", response.id, response.expires_at_datetime());
///
/// let refund = client.refund_payment(&response.id, "240501123000ABCD").await?;
/// assert!(refund.is_success());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PaymentsenseClient<T = HttpTransport> {
    service: PaymentService<T>,
}

impl PaymentsenseClient<HttpTransport> {
    /// Creates a client from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PaymentsenseError::Http`](crate::PaymentsenseError::Http) if
    /// the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self { service: PaymentService::new(Arc::new(config))? })
    }
}

impl<T: Transport> PaymentsenseClient<T> {
    #[cfg(test)]
    pub(crate) fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { service: PaymentService::with_transport(Arc::new(config), transport) }
    }

    /// Configuration this client was built with.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        self.service.config()
    }

    /// Creates a payment token for the web SDK.
    ///
    /// # Errors
    ///
    /// Returns a validation error without contacting the gateway when a
    /// required field is missing or malformed, an authentication error on
    /// 401/403, and an API error on any other non-200 status.
    pub async fn create_payment_token(&self, token: PaymentToken) -> Result<PaymentTokenResponse> {
        self.service.create_payment_token(token).await
    }

    /// Retrieves the outcome of a payment.
    ///
    /// # Errors
    ///
    /// Returns an authentication error on 401/403 and an API error on any
    /// other non-200 status.
    pub async fn get_payment_info(&self, payment_id: &str) -> Result<PaymentInfo> {
        self.service.get_payment_info(payment_id).await
    }

    /// Refunds, voids or collects against an earlier transaction.
    ///
    /// # Errors
    ///
    /// Same as [`get_payment_info`](Self::get_payment_info).
    pub async fn execute_cross_reference_payment(
        &self,
        payment_token_id: &str,
        request: &CrossReferencePaymentRequest,
    ) -> Result<CrossReferencePaymentResponse> {
        self.service.execute_cross_reference_payment(payment_token_id, request).await
    }

    /// Refunds the transaction identified by `cross_reference`.
    ///
    /// Shorthand for [`execute_cross_reference_payment`] with a request that
    /// carries no CV2.
    ///
    /// # Errors
    ///
    /// Same as [`execute_cross_reference_payment`].
    ///
    /// [`execute_cross_reference_payment`]: Self::execute_cross_reference_payment
    #[instrument(skip(self))]
    pub async fn refund_payment(
        &self,
        payment_token_id: &str,
        cross_reference: &str,
    ) -> Result<CrossReferencePaymentResponse> {
        let request = CrossReferencePaymentRequest::new(cross_reference);
        self.execute_cross_reference_payment(payment_token_id, &request).await
    }
}
