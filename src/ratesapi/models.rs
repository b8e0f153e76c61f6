use serde::Deserialize;
use std::collections::BTreeMap;

// availability response
//  ├── error
//  ├── message
//  └── payload
//       └── avalabilityData          (upstream's own spelling)
//            ├── unit_id
//            └── availabilityData
//                 └── "YYYY-MM-DD"
//                      ├── minStay
//                      ├── AvailableYesNo
//                      ├── AvailableAMYesNo
//                      ├── AvailablePMYesNo
//                      ├── AvailableCheckInYesNo
//                      └── changeOver

#[derive(Debug, Deserialize)]
pub struct AvailabilityResponse {
    #[serde(default)]
    pub error: bool,
    pub message: Option<String>,
    pub payload: Option<AvailabilityPayload>,
}

#[derive(Debug, Deserialize)]
pub struct AvailabilityPayload {
    #[serde(rename = "list_id")]
    pub list_id: Option<String>,
    #[serde(rename = "avalabilityData")]
    pub availability: Option<UnitAvailability>,
}

#[derive(Debug, Deserialize)]
pub struct UnitAvailability {
    #[serde(rename = "unit_id")]
    pub unit_id: Option<String>,
    /// Keyed by ISO date string; unparseable keys are skipped downstream.
    #[serde(rename = "availabilityData", default)]
    pub days: BTreeMap<String, DayFlags>,
}

/// The four Yes/No flags (plus extras we carry through) for one calendar day.
/// Values other than "Yes"/"No" are possible on bad upstream days and are
/// resolved by the classifier's fallback rule, never by failing the fetch.
#[derive(Debug, Clone, Deserialize)]
pub struct DayFlags {
    #[serde(rename = "minStay")]
    pub min_stay: Option<String>,
    #[serde(rename = "AvailableYesNo", default)]
    pub available: String,
    #[serde(rename = "AvailableAMYesNo", default)]
    pub available_am: String,
    #[serde(rename = "AvailablePMYesNo", default)]
    pub available_pm: String,
    #[serde(rename = "AvailableCheckInYesNo", default)]
    pub available_checkin: String,
    #[serde(rename = "changeOver")]
    pub change_over: Option<String>,
}

/// A money field as the rates app actually sends it: sometimes a number,
/// sometimes a string like "450.00".
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MoneyValue {
    Number(f64),
    Text(String),
}

impl MoneyValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            MoneyValue::Number(n) => Some(*n),
            MoneyValue::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RateResponse {
    #[serde(default)]
    pub error: bool,
    #[serde(default)]
    pub available: bool,
    #[serde(rename = "Price")]
    pub price: Option<MoneyValue>,
    #[serde(rename = "securityDeposit")]
    pub security_deposit: Option<MoneyValue>,
    #[serde(rename = "providerMessages", default)]
    pub provider_messages: Vec<String>,
    // Only the debug endpoint fills these two in.
    #[serde(rename = "base_price")]
    pub base_price: Option<MoneyValue>,
    #[serde(rename = "commission")]
    pub commission: Option<MoneyValue>,
    #[serde(rename = "sourceRateDetails", default)]
    pub source_rate_details: serde_json::Value,
    #[serde(rename = "satisfiedRule", default)]
    pub satisfied_rule: serde_json::Value,
}

/// One raw record from `showPropertyDetails.php`. The endpoint returns far
/// more fields than this; we only keep what the quote gates need, and keep
/// them loose because upstream mixes numbers and numeric strings.
#[derive(Debug, Deserialize)]
pub struct PropertyRecord {
    #[serde(rename = "list_id")]
    pub list_id: Option<serde_json::Value>,
    pub status: Option<serde_json::Value>,
    #[serde(rename = "RATE_AVAILABLE")]
    pub rate_available: Option<serde_json::Value>,
    #[serde(rename = "DataSourceCde")]
    pub data_source_code: Option<String>,
}
