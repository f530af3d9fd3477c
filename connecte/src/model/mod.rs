//! Request and response records exchanged with Connect-E.
//!
//! Field names follow the gateway's camelCase wire format. Optional fields
//! that are `None` are left out of serialized payloads, and unknown fields in
//! responses are ignored.

mod address;
mod cof;
mod cross_reference;
mod enums;
mod payment;
pub(crate) mod secret;
mod token;

pub use address::{Address, ShippingDetails};
pub use cof::CofSetup;
pub use cross_reference::{CrossReferencePaymentRequest, CrossReferencePaymentResponse};
pub use enums::{CofType, CurrencyCode, TransactionType};
pub use payment::PaymentInfo;
pub use token::{PaymentToken, PaymentTokenResponse};
