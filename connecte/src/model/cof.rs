//! Card-on-file setup terms.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::CofType;

/// Terms for future unattended charges against a stored card.
///
/// Dates are encoded as ISO 8601 local date-times (`2025-01-31T09:00:00`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CofSetup {
    /// Expected amount of future charges, in minor units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intended_amount: Option<String>,
    /// When the first future charge is expected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intended_execution_date: Option<NaiveDateTime>,
    /// When the agreement lapses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<NaiveDateTime>,
    /// Agreement type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub cof_type: Option<CofType>,
    /// Terms shown to the cardholder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms: Option<String>,
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn test_cof_setup_iso8601_dates() {
        let execution = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap().and_hms_opt(9, 30, 0).unwrap();
        let setup = CofSetup {
            intended_amount: Some("999".to_owned()),
            intended_execution_date: Some(execution),
            cof_type: Some(CofType::Recurring),
            ..Default::default()
        };

        let json = serde_json::to_value(&setup).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "intendedAmount": "999",
                "intendedExecutionDate": "2025-03-01T09:30:00",
                "type": "RECURRING"
            })
        );
    }

    #[test]
    fn test_cof_setup_parses_dates() {
        let setup: CofSetup = serde_json::from_str(
            r#"{"expiryDate":"2026-12-31T23:59:59","type":"UNSCHEDULED","terms":"t&c"}"#,
        )
        .unwrap();

        let expiry =
            NaiveDate::from_ymd_opt(2026, 12, 31).unwrap().and_hms_opt(23, 59, 59).unwrap();
        assert_eq!(setup.expiry_date, Some(expiry));
        assert_eq!(setup.cof_type, Some(CofType::Unscheduled));
        assert_eq!(setup.terms.as_deref(), Some("t&c"));
    }
}
