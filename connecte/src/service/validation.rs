//! Local checks run on a payment token before it is sent.

use crate::{
    error::{PaymentsenseError, Result},
    model::PaymentToken,
};

/// Returns `true` for exactly three ASCII digits.
#[must_use]
pub fn is_currency_code(code: &str) -> bool {
    code.len() == 3 && code.bytes().all(|b| b.is_ascii_digit())
}

/// Returns `true` for one or more ASCII digits: no sign, no decimal point.
#[must_use]
pub fn is_minor_units(amount: &str) -> bool {
    !amount.is_empty() && amount.bytes().all(|b| b.is_ascii_digit())
}

fn require<'a>(field: &'static str, value: Option<&'a str>) -> Result<&'a str> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(PaymentsenseError::validation(field, "is required and cannot be empty")),
    }
}

/// Validates the required fields of a token request.
///
/// Checks run in a fixed order and stop at the first failure:
/// `merchantUrl`, `currencyCode`, `amount`, `transactionType`, `orderId`.
/// Optional fields are not inspected.
///
/// # Errors
///
/// Returns [`PaymentsenseError::Validation`] naming the first offending field.
///
/// # Examples
///
/// ```
/// use connecte::{
///     model::{CurrencyCode, PaymentToken, TransactionType},
///     service::validate_payment_token,
/// };
///
/// let mut token =
///     PaymentToken::new("10.00", CurrencyCode::Gbp, TransactionType::Sale, "ORD-1", "https://m");
/// let err = validate_payment_token(&token).unwrap_err();
/// assert!(err.to_string().contains("'amount'"));
///
/// token.amount = Some("1000".to_owned());
/// assert!(validate_payment_token(&token).is_ok());
/// ```
pub fn validate_payment_token(token: &PaymentToken) -> Result<()> {
    require("merchantUrl", token.merchant_url.as_deref())?;

    let currency_code = require("currencyCode", token.currency_code.as_deref())?;
    if !is_currency_code(currency_code) {
        return Err(PaymentsenseError::validation(
            "currencyCode",
            "must be a 3-digit ISO 4217 numeric code (e.g., 826 for GBP)",
        ));
    }

    let amount = require("amount", token.amount.as_deref())?;
    if !is_minor_units(amount) {
        return Err(PaymentsenseError::validation(
            "amount",
            "must be numeric in minor currency units (e.g., pence)",
        ));
    }

    if token.transaction_type.is_none() {
        return Err(PaymentsenseError::validation("transactionType", "is required"));
    }

    require("orderId", token.order_id.as_deref())?;

    Ok(())
}

/// Returns `true` for `.` and `..`, which URL normalisation removes from a
/// path instead of sending them as segments.
#[must_use]
pub fn is_dot_segment(segment: &str) -> bool {
    matches!(segment, "." | "..")
}

/// Rejects an identifier that cannot be carried as a URL path segment.
///
/// Any other value, empty included, is sent as-is and left for the gateway to
/// judge.
///
/// # Errors
///
/// Returns [`PaymentsenseError::Validation`] for `.` and `..`.
pub fn validate_path_id(field: &'static str, id: &str) -> Result<()> {
    if is_dot_segment(id) {
        return Err(PaymentsenseError::validation(field, "cannot be '.' or '..'"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CurrencyCode, TransactionType};

    fn valid_token() -> PaymentToken {
        PaymentToken::new(
            "1000",
            CurrencyCode::Gbp,
            TransactionType::Sale,
            "ORD-1",
            "https://shop.example",
        )
    }

    fn failing_field(token: &PaymentToken) -> &'static str {
        match validate_payment_token(token).unwrap_err() {
            PaymentsenseError::Validation { field, .. } => field,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_token_passes() {
        assert!(validate_payment_token(&valid_token()).is_ok());
    }

    #[test]
    fn test_each_required_field() {
        let cases: [(&str, fn(&mut PaymentToken)); 5] = [
            ("merchantUrl", |t| t.merchant_url = None),
            ("currencyCode", |t| t.currency_code = None),
            ("amount", |t| t.amount = None),
            ("transactionType", |t| t.transaction_type = None),
            ("orderId", |t| t.order_id = None),
        ];

        for (field, clear) in cases {
            let mut token = valid_token();
            clear(&mut token);
            assert_eq!(failing_field(&token), field);
        }
    }

    #[test]
    fn test_empty_strings_rejected() {
        let mut token = valid_token();
        token.order_id = Some(String::new());
        assert_eq!(failing_field(&token), "orderId");

        let mut token = valid_token();
        token.merchant_url = Some(String::new());
        assert_eq!(failing_field(&token), "merchantUrl");
    }

    #[test]
    fn test_validation_order() {
        assert_eq!(failing_field(&PaymentToken::default()), "merchantUrl");

        let token = PaymentToken {
            merchant_url: Some("https://m".to_owned()),
            amount: Some("-5".to_owned()),
            ..PaymentToken::default()
        };
        assert_eq!(failing_field(&token), "currencyCode");

        let token = PaymentToken {
            merchant_url: Some("https://m".to_owned()),
            currency_code: Some("826".to_owned()),
            amount: Some("-5".to_owned()),
            ..PaymentToken::default()
        };
        assert_eq!(failing_field(&token), "amount");
    }

    #[test]
    fn test_currency_code_format() {
        for bad in ["82", "GBP", "8266", "82a", " 826"] {
            let mut token = valid_token();
            token.currency_code = Some(bad.to_owned());
            assert_eq!(failing_field(&token), "currencyCode", "{bad:?} accepted");
        }
    }

    #[test]
    fn test_amount_format() {
        for bad in ["10.00", "-5", "+5", "1e3", "1 000"] {
            let mut token = valid_token();
            token.amount = Some(bad.to_owned());
            assert_eq!(failing_field(&token), "amount", "{bad:?} accepted");
        }

        let mut token = valid_token();
        token.amount = Some("0".to_owned());
        assert!(validate_payment_token(&token).is_ok());
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        assert!(!is_currency_code("٨٢٦"));
        assert!(!is_minor_units("１００"));
    }

    #[test]
    fn test_error_message() {
        let mut token = valid_token();
        token.currency_code = Some("GBP".to_owned());
        let err = validate_payment_token(&token).unwrap_err();
        assert_eq!(err.status(), Some(400));
        assert_eq!(
            err.to_string(),
            "Validation failed for field 'currencyCode': must be a 3-digit ISO 4217 numeric code (e.g., 826 for GBP)"
        );
    }

    #[test]
    fn test_path_id_rejects_dot_segments() {
        for id in [".", ".."] {
            let err = validate_path_id("paymentId", id).unwrap_err();
            assert!(matches!(err, PaymentsenseError::Validation { field: "paymentId", .. }));
        }
    }

    #[test]
    fn test_path_id_accepts_other_values() {
        for id in ["pay_123", "...", ".a", "a.", "", "a/b", "%2E"] {
            assert!(validate_path_id("paymentId", id).is_ok(), "{id:?} rejected");
        }
    }
}
