// src/config.rs

use std::time::Duration;

pub const RATES_APP_BASE_URL: &str = "https://api.destinique.com/ratesapp4website/";
pub const USER_API_BASE_URL: &str = "https://api.destinique.com/api-user/";

/// Per-request timeout for both endpoints.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Upper bound on a candidate stay, in nights. Covers a full leap year and
/// bounds the day-by-day validity scan.
pub const MAX_RANGE_NIGHTS: i64 = 366;

/// The one data source we can live-quote; everything else goes to the phones.
pub const LIVE_QUOTE_SOURCE_CODE: &str = "AK";

pub const BOOKING_PHONE: &str = "850-312-5400";

/// Rates-app endpoint base, overridable for staging.
pub fn rates_app_base_url() -> String {
    std::env::var("RATES_APP_BASE_URL").unwrap_or_else(|_| RATES_APP_BASE_URL.to_string())
}

/// User-api endpoint base (property details), overridable for staging.
pub fn user_api_base_url() -> String {
    std::env::var("USER_API_BASE_URL").unwrap_or_else(|_| USER_API_BASE_URL.to_string())
}
