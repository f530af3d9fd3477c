//! Payment token request and response records.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use super::{Address, CofSetup, CurrencyCode, TransactionType};

/// Request body for `POST /access-tokens`.
///
/// `amount`, `currency_code`, `transaction_type`, `order_id` and
/// `merchant_url` are required by the gateway; they are checked before the
/// request is sent. Every field left as `None` is omitted from the JSON body.
///
/// # Examples
///
/// ```
/// use connecte::model::{CurrencyCode, PaymentToken, TransactionType};
///
/// let token =
///     PaymentToken::new("1000", CurrencyCode::Gbp, TransactionType::Sale, "ORD-1", "https://m")
///         .with_order_description("Two widgets")
///         .with_meta_data("basket", "b-42");
///
/// assert_eq!(token.currency_code.as_deref(), Some("826"));
/// ```
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentToken {
    /// Amount in minor units, digits only (`"1000"` is 10.00).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    /// ISO 4217 numeric currency code (`"826"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
    /// Kind of transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<TransactionType>,
    /// `MOTO` for mail/telephone orders; unset for e-commerce.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_source: Option<String>,
    /// Merchant order reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// Free-text order description shown to the cardholder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_description: Option<String>,
    /// Cardholder email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_email_address: Option<String>,
    /// Cardholder phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_phone_number: Option<String>,
    /// Cardholder IP address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_ip_address: Option<String>,
    /// Cardholder browser user agent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    /// Gateway account for non-default gateways.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_username: Option<String>,
    /// Gateway password paired with `gateway_username`.
    #[serde(default, with = "crate::model::secret", skip_serializing_if = "Option::is_none")]
    pub gateway_password: Option<SecretString>,
    /// URL of the merchant site hosting the payment form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_url: Option<String>,
    /// Merchant-side transaction reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_transaction_id: Option<String>,
    /// Transaction a refund, void or collection relates to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_transaction_id: Option<String>,
    /// Customer identifier for stored payment methods.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    /// Stored payment method to charge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_id: Option<String>,
    /// URL the gateway notifies when the payment completes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    /// Billing address line 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_address1: Option<String>,
    /// Billing address line 2.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_address2: Option<String>,
    /// Billing address line 3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_address3: Option<String>,
    /// Billing address line 4.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_address4: Option<String>,
    /// Billing city.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_city: Option<String>,
    /// Billing state or province.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_state: Option<String>,
    /// Billing postal code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_postcode: Option<String>,
    /// Billing country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_country_code: Option<String>,
    /// Hold the transaction until the merchant confirms it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_pre_execute: Option<bool>,
    /// Arbitrary merchant metadata echoed back by the gateway.
    #[serde(rename = "metaData", skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<HashMap<String, String>>,
    /// Card-on-file agreement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cof_setup: Option<CofSetup>,
}

impl PaymentToken {
    /// Creates a token request with every required field set.
    #[must_use]
    pub fn new(
        amount: impl Into<String>,
        currency: CurrencyCode,
        transaction_type: TransactionType,
        order_id: impl Into<String>,
        merchant_url: impl Into<String>,
    ) -> Self {
        Self {
            amount: Some(amount.into()),
            transaction_type: Some(transaction_type),
            order_id: Some(order_id.into()),
            merchant_url: Some(merchant_url.into()),
            ..Self::default()
        }
        .with_currency(currency)
    }

    /// Sets `currency_code` to the numeric code of `currency`.
    #[must_use]
    pub fn with_currency(mut self, currency: CurrencyCode) -> Self {
        self.currency_code = Some(currency.code().to_owned());
        self
    }

    /// Sets the order description.
    #[must_use]
    pub fn with_order_description(mut self, description: impl Into<String>) -> Self {
        self.order_description = Some(description.into());
        self
    }

    /// Sets the webhook URL, taking precedence over the configured default.
    #[must_use]
    pub fn with_webhook_url(mut self, url: impl Into<String>) -> Self {
        self.webhook_url = Some(url.into());
        self
    }

    /// Sets both gateway credentials.
    #[must_use]
    pub fn with_gateway_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.gateway_username = Some(username.into());
        self.gateway_password = Some(SecretString::from(password.into()));
        self
    }

    /// Adds one metadata entry, replacing any previous value for `key`.
    #[must_use]
    pub fn with_meta_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.meta_data.get_or_insert_with(HashMap::new).insert(key.into(), value.into());
        self
    }

    /// Attaches card-on-file terms.
    #[must_use]
    pub fn with_cof_setup(mut self, cof_setup: CofSetup) -> Self {
        self.cof_setup = Some(cof_setup);
        self
    }

    /// Copies `address` into the flat `user*` billing fields.
    ///
    /// Lines that are `None` in `address` clear the matching field.
    #[must_use]
    pub fn with_user_address(mut self, address: &Address) -> Self {
        self.user_address1.clone_from(&address.address1);
        self.user_address2.clone_from(&address.address2);
        self.user_address3.clone_from(&address.address3);
        self.user_address4.clone_from(&address.address4);
        self.user_city.clone_from(&address.city);
        self.user_state.clone_from(&address.state);
        self.user_postcode.clone_from(&address.postcode);
        self.user_country_code.clone_from(&address.country_code);
        self
    }
}

/// Response to `POST /access-tokens`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentTokenResponse {
    /// Token identifier passed to the web SDK and to cross-reference calls.
    pub id: String,
    /// Expiry as a Unix timestamp in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
}

impl PaymentTokenResponse {
    /// Expiry as a UTC date-time, if present and representable.
    #[must_use]
    pub fn expires_at_datetime(&self) -> Option<DateTime<Utc>> {
        self.expires_at.and_then(|secs| DateTime::from_timestamp(secs, 0))
    }
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn test_new_sets_required_fields() {
        let token = PaymentToken::new(
            "1000",
            CurrencyCode::Eur,
            TransactionType::Preauth,
            "ORD-7",
            "https://shop.example",
        );

        assert_eq!(token.amount.as_deref(), Some("1000"));
        assert_eq!(token.currency_code.as_deref(), Some("978"));
        assert_eq!(token.transaction_type, Some(TransactionType::Preauth));
        assert_eq!(token.order_id.as_deref(), Some("ORD-7"));
        assert_eq!(token.merchant_url.as_deref(), Some("https://shop.example"));
    }

    #[test]
    fn test_unset_fields_are_omitted() {
        let token = PaymentToken::new(
            "100",
            CurrencyCode::Gbp,
            TransactionType::Sale,
            "ORD-1",
            "https://m",
        );

        let json = serde_json::to_value(&token).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "amount": "100",
                "currencyCode": "826",
                "transactionType": "SALE",
                "orderId": "ORD-1",
                "merchantUrl": "https://m"
            })
        );
    }

    #[test]
    fn test_empty_token_serializes_to_empty_object() {
        let json = serde_json::to_string(&PaymentToken::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_wire_names() {
        let token = PaymentToken {
            user_address1: Some("1 Road".to_owned()),
            wait_pre_execute: Some(true),
            merchant_transaction_id: Some("m-1".to_owned()),
            ..PaymentToken::default()
        }
        .with_meta_data("k", "v")
        .with_gateway_credentials("gw-user", "gw-pass");

        let json = serde_json::to_value(&token).unwrap();
        assert_eq!(json["userAddress1"], "1 Road");
        assert_eq!(json["waitPreExecute"], true);
        assert_eq!(json["merchantTransactionId"], "m-1");
        assert_eq!(json["metaData"]["k"], "v");
        assert_eq!(json["gatewayUsername"], "gw-user");
        assert_eq!(json["gatewayPassword"], "gw-pass");
    }

    #[test]
    fn test_gateway_password_redacted_in_debug() {
        let token = PaymentToken::default().with_gateway_credentials("user", "hunter2");
        let debug = format!("{token:?}");
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_deserialize_secret_and_unknown_fields() {
        let token: PaymentToken = serde_json::from_str(
            r#"{"orderId":"o","gatewayPassword":"pw","somethingNew":1}"#,
        )
        .unwrap();
        assert_eq!(token.order_id.as_deref(), Some("o"));
        assert_eq!(token.gateway_password.as_ref().map(|p| p.expose_secret()), Some("pw"));
    }

    #[test]
    fn test_with_user_address_copies_lines() {
        let address = Address {
            address1: Some("Flat 2".to_owned()),
            address2: Some("10 Long Lane".to_owned()),
            city: Some("Bristol".to_owned()),
            postcode: Some("BS1 4DJ".to_owned()),
            country_code: Some("GB".to_owned()),
            ..Address::default()
        };

        let token = PaymentToken::default().with_user_address(&address);
        assert_eq!(token.user_address1.as_deref(), Some("Flat 2"));
        assert_eq!(token.user_address2.as_deref(), Some("10 Long Lane"));
        assert_eq!(token.user_address3, None);
        assert_eq!(token.user_city.as_deref(), Some("Bristol"));
        assert_eq!(token.user_postcode.as_deref(), Some("BS1 4DJ"));
        assert_eq!(token.user_country_code.as_deref(), Some("GB"));
    }

    #[test]
    fn test_token_response_parses() {
        let response: PaymentTokenResponse =
            serde_json::from_str(r#"{"id":"tok_123","expiresAt":1700000000}"#).unwrap();
        assert_eq!(response.id, "tok_123");
        assert_eq!(response.expires_at, Some(1_700_000_000));

        let expiry = response.expires_at_datetime().unwrap();
        assert_eq!(expiry.to_rfc3339(), "2023-11-14T22:13:20+00:00");
    }

    #[test]
    fn test_token_response_without_expiry() {
        let response: PaymentTokenResponse = serde_json::from_str(r#"{"id":"tok_1"}"#).unwrap();
        assert_eq!(response.expires_at, None);
        assert_eq!(response.expires_at_datetime(), None);
    }
}
