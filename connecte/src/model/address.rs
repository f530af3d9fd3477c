//! Postal address records.

use serde::{Deserialize, Serialize};

/// Postal address.
///
/// Unset lines are omitted from the JSON payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Address line 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,
    /// Address line 2.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    /// Address line 3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address3: Option<String>,
    /// Address line 4.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address4: Option<String>,
    /// City.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// State or province.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Postal code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
    /// ISO 3166-1 alpha-2 country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
}

/// Shipping recipient and destination.
///
/// Connect-E spells these two keys with a leading capital.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingDetails {
    /// Recipient name.
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Destination address.
    #[serde(rename = "Address", skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_omits_unset_fields() {
        let address = Address {
            address1: Some("1 High Street".to_owned()),
            postcode: Some("EC1A 1BB".to_owned()),
            country_code: Some("GB".to_owned()),
            ..Default::default()
        };

        let json = serde_json::to_value(&address).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "address1": "1 High Street",
                "postcode": "EC1A 1BB",
                "countryCode": "GB"
            })
        );
    }

    #[test]
    fn test_address_ignores_unknown_fields() {
        let address: Address =
            serde_json::from_str(r#"{"city":"Leeds","latitude":53.8}"#).unwrap();
        assert_eq!(address.city.as_deref(), Some("Leeds"));
    }

    #[test]
    fn test_shipping_details_capitalised_keys() {
        let details = ShippingDetails {
            name: Some("A. Shopper".to_owned()),
            address: Some(Address { city: Some("York".to_owned()), ..Default::default() }),
        };

        let json = serde_json::to_string(&details).unwrap();
        assert_eq!(json, r#"{"Name":"A. Shopper","Address":{"city":"York"}}"#);
    }
}
