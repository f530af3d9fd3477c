//! Connect-E: async client for the Paymentsense Connect-E payment gateway.
//!
//! Connect-E is a REST API for card payments. A merchant backend creates a
//! short-lived payment token, hands it to the browser-side web SDK, and later
//! asks the gateway how the payment went. Refunds, voids and collections are
//! executed against the cross reference of an earlier transaction.
//!
//! This crate covers the backend half of that flow:
//!
//! - **Token creation**: `POST /access-tokens`, with local validation of the
//!   required fields and configured defaults for webhook and gateway
//!   credentials
//! - **Payment status**: `GET /payments/{id}`
//! - **Cross-reference payments**: `POST /cross-reference-payments/{token}`,
//!   plus a refund shorthand
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────┐
//! │  PaymentsenseClient  │  facade, cheap to clone
//! └──────────┬───────────┘
//!            │
//! ┌──────────▼───────────┐
//! │    PaymentService    │  validate → merge defaults → headers → classify
//! └──────────┬───────────┘
//!            │ Transport (sealed)
//! ┌──────────▼───────────┐
//! │    HttpTransport     │  reqwest, per-request timeout
//! └──────────┬───────────┘
//!            │ HTTPS + Bearer token
//! ┌──────────▼───────────┐
//! │      Connect-E       │
//! └──────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use connecte::{
//!     PaymentsenseClient,
//!     config::{ClientConfig, Environment},
//!     model::{CurrencyCode, PaymentToken, TransactionType},
//! };
//!
//! # async fn example() -> connecte::Result<()> {
//! let config = ClientConfig::builder()
//!     .api_key("sk_test_...")
//!     .environment(Environment::Test)
//!     .webhook_url("https://shop.example.com/hooks/connecte")
//!     .build()?;
//! let client = PaymentsenseClient::new(config)?;
//!
//! let token = PaymentToken::new(
//!     "2500",
//!     CurrencyCode::Gbp,
//!     TransactionType::Sale,
//!     "ORD-1001",
//!     "https://shop.example.com",
//! )
//! .with_order_description("Annual subscription");
//!
//! let response = client.create_payment_token(token).await?;
//! println!("token: {}", response.id);
//!
//! let info = client.get_payment_info("payment-id-from-webhook").await?;
//! if info.is_success() {
//!     println!("paid, cross reference {:?}", info.cross_reference);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! ```rust,no_run
//! use connecte::{PaymentsenseClient, PaymentsenseError};
//!
//! # async fn example(client: PaymentsenseClient) {
//! match client.get_payment_info("pay_123").await {
//!     Ok(info) => println!("status code: {:?}", info.status_code),
//!     Err(PaymentsenseError::Authentication { status, .. }) => {
//!         eprintln!("credentials rejected ({status})");
//!     }
//!     Err(PaymentsenseError::Api { status, body }) => {
//!         eprintln!("gateway error {status}: {body}");
//!     }
//!     Err(e) => eprintln!("other error: {e}"),
//! }
//! # }
//! ```
//!
//! # Logging
//!
//! Operations emit [`tracing`] spans and events. The crate never installs a
//! subscriber, and API keys, gateway passwords and CV2 values are never
//! recorded.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![allow(
    clippy::multiple_crate_versions,
    reason = "transitive dependencies from reqwest and criterion"
)]

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod service;
pub mod transport;

pub use client::PaymentsenseClient;
pub use config::{ClientConfig, Environment};
pub use error::{PaymentsenseError, Result};
