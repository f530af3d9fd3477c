//! Connect-E environment table.

use std::fmt;

use serde::Deserialize;

/// Connect-E deployment a client talks to.
///
/// Each environment fixes the REST API base URL, the web SDK base URL and the
/// CDN base URL. There are no other environments.
///
/// # Examples
///
/// ```
/// use connecte::config::Environment;
///
/// assert_eq!(Environment::Test.api_url(), "https://e.test.connect.paymentsense.cloud/v1");
/// assert_eq!(Environment::Production.cdn_url(), "https://cdn.dojo.tech");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    /// Live environment, real payments.
    #[serde(alias = "PRODUCTION")]
    Production,
    /// Test environment for integration and development.
    #[serde(alias = "TEST")]
    Test,
}

impl Environment {
    /// Base URL for the Connect-E REST API.
    #[must_use]
    pub const fn api_url(self) -> &'static str {
        match self {
            Self::Production => "https://e.connect.paymentsense.cloud/v1",
            Self::Test => "https://e.test.connect.paymentsense.cloud/v1",
        }
    }

    /// Base URL for the Connect-E web SDK scripts.
    #[must_use]
    pub const fn web_url(self) -> &'static str {
        match self {
            Self::Production => "https://web.e.connect.paymentsense.cloud",
            Self::Test => "https://web.e.test.connect.paymentsense.cloud",
        }
    }

    /// Base URL for the Dojo CDN.
    #[must_use]
    pub const fn cdn_url(self) -> &'static str {
        match self {
            Self::Production => "https://cdn.dojo.tech",
            Self::Test => "https://cdn.dojo.tech/test",
        }
    }

    /// Lower-case name used in configuration files and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Test => "test",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
