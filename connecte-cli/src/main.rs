//! `connecte`: command-line front end for the Connect-E client.
//!
//! Reads a TOML client configuration, performs one API call and prints the
//! response as pretty JSON on stdout. Failures are logged to stderr and the
//! process exits with status 1. `RUST_LOG` sets the log level.
//!
//! ```text
//! connecte --config connecte.toml create-token --amount 1000 --currency GBP \
//!     --order-id ORD-1 --merchant-url https://shop.example.com
//! connecte --config connecte.toml payment-info pay_123
//! connecte --config connecte.toml refund tok_123 240501123000ABCD
//! ```

#![allow(
    clippy::multiple_crate_versions,
    reason = "transitive dependencies from reqwest and clap"
)]

mod observability;

use std::{path::PathBuf, process::ExitCode};

use clap::{Args, Parser, Subcommand};
use connecte::{
    ClientConfig, PaymentsenseClient, PaymentsenseError, Result,
    model::{CrossReferencePaymentRequest, CurrencyCode, PaymentToken, TransactionType},
};
use serde::Serialize;
use tracing::{error, info};

use crate::observability::{LogFormat, init_observability};

/// Command-line interface.
#[derive(Debug, Parser)]
#[command(name = "connecte", version, about = "Paymentsense Connect-E API client")]
struct Cli {
    /// Path to the TOML client configuration.
    #[arg(long, short, env = "CONNECTE_CONFIG", default_value = "connecte.toml")]
    config: PathBuf,

    /// Send requests in sandbox mode regardless of the configuration file.
    #[arg(long)]
    sandbox: bool,

    /// Log output format on stderr.
    #[arg(long, env = "LOG_FORMAT", value_enum, ignore_case = true, default_value_t)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create a payment token for the web SDK.
    CreateToken(CreateTokenArgs),

    /// Show the status of a payment.
    PaymentInfo {
        /// Payment identifier.
        payment_id: String,
    },

    /// Refund, void or collect against an earlier transaction.
    CrossReference {
        /// Payment token the operation belongs to.
        payment_token: String,
        /// Cross reference of the earlier transaction.
        #[arg(long)]
        cross_reference: String,
        /// Card security code, if the gateway requires one.
        #[arg(long)]
        cv2: Option<String>,
    },

    /// Refund an earlier transaction.
    Refund {
        /// Payment token the refund belongs to.
        payment_token: String,
        /// Cross reference of the transaction to refund.
        cross_reference: String,
    },
}

#[derive(Debug, Args)]
struct CreateTokenArgs {
    /// Amount in minor units (pence, cents).
    #[arg(long)]
    amount: String,
    /// Currency symbol (GBP) or numeric code (826).
    #[arg(long, default_value = "GBP")]
    currency: CurrencyCode,
    /// Merchant order reference.
    #[arg(long)]
    order_id: String,
    /// URL of the site hosting the payment form.
    #[arg(long)]
    merchant_url: String,
    /// SALE, PREAUTH, REFUND, COLLECTION or VOID.
    #[arg(long, default_value = "SALE")]
    transaction_type: TransactionType,
    /// Order description shown to the cardholder.
    #[arg(long)]
    description: Option<String>,
    /// Webhook URL overriding the configured default.
    #[arg(long)]
    webhook_url: Option<String>,
}

impl CreateTokenArgs {
    fn into_token(self) -> PaymentToken {
        let token = PaymentToken::new(
            self.amount,
            self.currency,
            self.transaction_type,
            self.order_id,
            self.merchant_url,
        );
        let token = match self.description {
            Some(description) => token.with_order_description(description),
            None => token,
        };
        match self.webhook_url {
            Some(url) => token.with_webhook_url(url),
            None => token,
        }
    }
}

fn load_config(cli: &Cli) -> Result<ClientConfig> {
    let config = ClientConfig::from_file(&cli.config)?;
    if cli.sandbox && !config.is_sandbox() {
        return config.into_builder().sandbox(true).build();
    }
    Ok(config)
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(PaymentsenseError::Serialization)
}

async fn run(cli: Cli) -> Result<String> {
    let config = load_config(&cli)?;
    info!(environment = %config.environment(), sandbox = config.is_sandbox(), "client configured");
    let client = PaymentsenseClient::new(config)?;

    match cli.command {
        Command::CreateToken(args) => {
            to_json(&client.create_payment_token(args.into_token()).await?)
        }
        Command::PaymentInfo { payment_id } => {
            to_json(&client.get_payment_info(&payment_id).await?)
        }
        Command::CrossReference { payment_token, cross_reference, cv2 } => {
            let request = CrossReferencePaymentRequest::new(cross_reference);
            let request = match cv2 {
                Some(cv2) => request.with_cv2(cv2),
                None => request,
            };
            to_json(&client.execute_cross_reference_payment(&payment_token, &request).await?)
        }
        Command::Refund { payment_token, cross_reference } => {
            to_json(&client.refund_payment(&payment_token, &cross_reference).await?)
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_observability(cli.log_format);
    match run(cli).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, code = e.code(), status = e.status(), "request failed");
            ExitCode::FAILURE
        }
    }
}
