//! Creates a payment token and prints what the web SDK needs.
//!
//! # Running this example
//!
//! ```bash
//! export CONNECTE_API_KEY=<test environment key>
//! cargo run --example create_payment_token
//! ```

#![allow(
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::uninlined_format_args,
    reason = "examples are allowed to use println and simple formatting"
)]

use std::env;

use connecte::{
    PaymentsenseClient,
    config::{ClientConfig, Environment},
    model::{Address, CurrencyCode, PaymentToken, TransactionType},
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = env::var("CONNECTE_API_KEY")
        .map_err(|_| "CONNECTE_API_KEY environment variable not set")?;

    let config = ClientConfig::builder()
        .api_key(api_key)
        .environment(Environment::Test)
        .sandbox(true)
        .build()?;
    let web_url = config.web_url();
    let client = PaymentsenseClient::new(config)?;

    let billing = Address {
        address1: Some("1 High Street".to_owned()),
        city: Some("London".to_owned()),
        postcode: Some("EC1A 1BB".to_owned()),
        country_code: Some("GB".to_owned()),
        ..Address::default()
    };

    let token = PaymentToken::new(
        "1999",
        CurrencyCode::Gbp,
        TransactionType::Sale,
        "ORD-EXAMPLE-1",
        "https://shop.example.com",
    )
    .with_order_description("Example order")
    .with_user_address(&billing)
    .with_meta_data("channel", "example");

    let response = client.create_payment_token(token).await?;

    println!("Token:      {}", response.id);
    println!("Expires at: {:?}", response.expires_at_datetime());
    println!("Web SDK:    {}", web_url);
    Ok(())
}
