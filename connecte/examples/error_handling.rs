//! Shows how each error kind surfaces and what to do about it.
//!
//! # Running this example
//!
//! ```bash
//! export CONNECTE_API_KEY=<test environment key>
//! cargo run --example error_handling -- <payment-id>
//! ```

#![allow(
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::uninlined_format_args,
    clippy::use_debug,
    reason = "examples are allowed to use println and simple formatting"
)]

use std::env;

use connecte::{
    PaymentsenseClient, PaymentsenseError,
    config::{ClientConfig, Environment},
    model::{CurrencyCode, PaymentToken, TransactionType},
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ClientConfig::builder()
        .api_key(env::var("CONNECTE_API_KEY").unwrap_or_default())
        .environment(Environment::Test)
        .build();

    // A blank key is rejected before a client exists.
    let config = match config {
        Ok(config) => config,
        Err(PaymentsenseError::Configuration(reason)) => {
            eprintln!("Configuration error: {reason}");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    let client = PaymentsenseClient::new(config)?;

    println!("1. Invalid amount, rejected locally:");
    let token = PaymentToken::new(
        "19.99",
        CurrencyCode::Gbp,
        TransactionType::Sale,
        "ORD-1",
        "https://shop.example.com",
    );
    match client.create_payment_token(token).await {
        Err(PaymentsenseError::Validation { field, message }) => {
            println!("   field {field}: {message}");
        }
        other => println!("   unexpected: {other:?}"),
    }

    println!("\n2. Payment lookup:");
    let payment_id = env::args().nth(1).unwrap_or_else(|| "unknown-payment".to_owned());
    match client.get_payment_info(&payment_id).await {
        Ok(info) if info.is_success() => {
            println!("   paid, cross reference {:?}", info.cross_reference);
        }
        Ok(info) => println!("   not paid: status {:?}, {:?}", info.status_code, info.message),
        Err(PaymentsenseError::Authentication { status, .. }) => {
            println!("   credentials rejected ({status}); check CONNECTE_API_KEY");
        }
        Err(PaymentsenseError::Api { status, body }) => {
            println!("   gateway error {status}: {body}");
        }
        Err(PaymentsenseError::Http(e)) if e.is_timeout() => {
            println!("   timed out; safe to retry with backoff");
        }
        Err(e) => println!("   {e}"),
    }

    Ok(())
}
