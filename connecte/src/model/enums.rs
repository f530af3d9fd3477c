//! Closed enumerations used by the request and response records.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{PaymentsenseError, Result};

/// ISO 4217 currencies supported by Connect-E.
///
/// Payment tokens transmit the numeric code as a string (`"826"`); this enum
/// is a lookup over those codes.
///
/// # Examples
///
/// ```
/// use connecte::model::CurrencyCode;
///
/// assert_eq!(CurrencyCode::Gbp.code(), "826");
/// assert_eq!(CurrencyCode::from_code("978")?, CurrencyCode::Eur);
/// assert_eq!("usd".parse::<CurrencyCode>()?, CurrencyCode::Usd);
/// # Ok::<(), connecte::PaymentsenseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurrencyCode {
    /// British pound sterling.
    #[serde(rename = "826")]
    Gbp,
    /// Euro.
    #[serde(rename = "978")]
    Eur,
    /// United States dollar.
    #[serde(rename = "840")]
    Usd,
}

impl CurrencyCode {
    const TABLE: [(Self, &'static str, &'static str); 3] =
        [(Self::Gbp, "GBP", "826"), (Self::Eur, "EUR", "978"), (Self::Usd, "USD", "840")];

    /// Three-digit numeric code sent on the wire.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Gbp => "826",
            Self::Eur => "978",
            Self::Usd => "840",
        }
    }

    /// Alphabetic ISO 4217 symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Gbp => "GBP",
            Self::Eur => "EUR",
            Self::Usd => "USD",
        }
    }

    /// Looks up a currency by its numeric code.
    ///
    /// # Errors
    ///
    /// Returns a validation error for codes Connect-E does not support.
    pub fn from_code(code: &str) -> Result<Self> {
        Self::TABLE
            .iter()
            .find(|(_, _, numeric)| *numeric == code)
            .map(|(currency, _, _)| *currency)
            .ok_or_else(|| {
                PaymentsenseError::validation(
                    "currencyCode",
                    format!("unsupported currency code: {code}"),
                )
            })
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Accepts either the alphabetic symbol (any case) or the numeric code.
impl FromStr for CurrencyCode {
    type Err = PaymentsenseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::TABLE
            .iter()
            .find(|(_, symbol, _)| symbol.eq_ignore_ascii_case(s))
            .map(|(currency, _, _)| *currency)
            .map_or_else(|| Self::from_code(s), Ok)
    }
}

/// Kind of transaction a payment token is created for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    /// Immediate charge; the amount is captured at once.
    Sale,
    /// Reserve the amount for a later collection.
    Preauth,
    /// Return funds for a previous transaction.
    Refund,
    /// Collect a previously pre-authorised amount.
    Collection,
    /// Cancel a previous transaction before settlement.
    Void,
}

impl TransactionType {
    const ALL: [Self; 5] = [Self::Sale, Self::Preauth, Self::Refund, Self::Collection, Self::Void];

    /// Wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sale => "SALE",
            Self::Preauth => "PREAUTH",
            Self::Refund => "REFUND",
            Self::Collection => "COLLECTION",
            Self::Void => "VOID",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = PaymentsenseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL.into_iter().find(|t| t.as_str().eq_ignore_ascii_case(s)).ok_or_else(|| {
            PaymentsenseError::validation(
                "transactionType",
                format!("unknown transaction type: {s}"),
            )
        })
    }
}

/// Card-on-file agreement type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CofType {
    /// Regular charges, e.g. a monthly subscription.
    Recurring,
    /// A purchase split over several charges.
    Installment,
    /// Merchant-initiated charges without a fixed schedule.
    Unscheduled,
}

impl CofType {
    /// Wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Recurring => "RECURRING",
            Self::Installment => "INSTALLMENT",
            Self::Unscheduled => "UNSCHEDULED",
        }
    }
}

impl fmt::Display for CofType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_code_table() {
        assert_eq!(CurrencyCode::Gbp.code(), "826");
        assert_eq!(CurrencyCode::Eur.code(), "978");
        assert_eq!(CurrencyCode::Usd.code(), "840");
        assert_eq!(CurrencyCode::Usd.symbol(), "USD");
    }

    #[test]
    fn test_currency_code_reverse_lookup() {
        for currency in [CurrencyCode::Gbp, CurrencyCode::Eur, CurrencyCode::Usd] {
            assert_eq!(CurrencyCode::from_code(currency.code()).unwrap(), currency);
        }
    }

    #[test]
    fn test_currency_code_unsupported() {
        let err = CurrencyCode::from_code("392").unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("unsupported currency code: 392"));
    }

    #[test]
    fn test_currency_code_from_str() {
        assert_eq!("GBP".parse::<CurrencyCode>().unwrap(), CurrencyCode::Gbp);
        assert_eq!("eur".parse::<CurrencyCode>().unwrap(), CurrencyCode::Eur);
        assert_eq!("840".parse::<CurrencyCode>().unwrap(), CurrencyCode::Usd);
        assert!("JPY".parse::<CurrencyCode>().is_err());
    }

    #[test]
    fn test_currency_code_serializes_as_numeric() {
        assert_eq!(serde_json::to_string(&CurrencyCode::Gbp).unwrap(), "\"826\"");
        assert_eq!(CurrencyCode::Gbp.to_string(), "826");
    }

    #[test]
    fn test_transaction_type_wire_names() {
        assert_eq!(serde_json::to_string(&TransactionType::Sale).unwrap(), "\"SALE\"");
        assert_eq!(serde_json::to_string(&TransactionType::Preauth).unwrap(), "\"PREAUTH\"");
        assert_eq!(serde_json::to_string(&TransactionType::Collection).unwrap(), "\"COLLECTION\"");
        let parsed: TransactionType = serde_json::from_str("\"VOID\"").unwrap();
        assert_eq!(parsed, TransactionType::Void);
    }

    #[test]
    fn test_transaction_type_from_str() {
        assert_eq!("refund".parse::<TransactionType>().unwrap(), TransactionType::Refund);
        let err = "CAPTURE".parse::<TransactionType>().unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_cof_type_wire_names() {
        assert_eq!(serde_json::to_string(&CofType::Installment).unwrap(), "\"INSTALLMENT\"");
        assert_eq!(CofType::Unscheduled.to_string(), "UNSCHEDULED");
    }
}
