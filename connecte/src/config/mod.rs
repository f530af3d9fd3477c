//! Client configuration.
//!
//! A [`ClientConfig`] holds everything a client needs besides the request
//! itself: credentials, the target [`Environment`], the timeout, the sandbox
//! flag and the defaults merged into payment tokens. It is validated once when
//! built and is read-only afterwards.
//!
//! # Examples
//!
//! Loading from TOML, with the API key taken from the environment:
//!
//! ```no_run
//! use connecte::config::ClientConfig;
//!
//! let config = ClientConfig::from_file("connecte.toml")?;
//! println!("talking to {}", config.api_url());
//! # Ok::<(), connecte::PaymentsenseError>(())
//! ```

mod client;
mod environment;

pub use client::{ClientConfig, ClientConfigBuilder, DEFAULT_TIMEOUT_SECS};
pub use environment::Environment;
