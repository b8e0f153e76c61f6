// src/quote/outcome.rs

use crate::config::BOOKING_PHONE;
use chrono::NaiveDate;

/// What a quote attempt resolved to. Exactly one of these is handed to the
/// presenter per attempt; none of them are errors.
#[derive(Debug, Clone, PartialEq)]
pub enum QuoteOutcome {
    /// A business gate routed the visitor to a phone inquiry before any
    /// network call. Empty messages mean the presenter's standing
    /// rate-not-available copy applies.
    NeedsManualCall(Vec<String>),
    /// The provider answered but had no computable rate. A price of exactly
    /// zero is never a free stay.
    ZeroPriceAlternate(Vec<String>),
    /// The provider rejected the dates; the message embeds the literal
    /// requested check-in and check-out.
    DatesUnavailable(Vec<String>),
    Priced(PricedQuote),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PricedQuote {
    pub price: f64,
    pub security_deposit: f64,
    pub breakdown: RateBreakdown,
}

/// Pricing detail carried through opaquely for display or audit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RateBreakdown {
    pub base_price: Option<f64>,
    pub commission: Option<f64>,
    pub source_rate_details: serde_json::Value,
    pub satisfied_rule: serde_json::Value,
}

pub(crate) fn call_for_rates_message() -> String {
    "Unfortunately, this property requires that we call for rates. \
     Please submit your inquiry and one of our travel advisors will send you a \
     quote with rates as soon as possible."
        .to_string()
}

pub(crate) fn dates_unavailable_message(sdate: NaiveDate, edate: NaiveDate) -> String {
    format!(
        "Unfortunately, your dates from {} to {} are not available. \
         Please check the Availability Section for alternate dates or click on the \
         button below to request alternate options. For immediate assistance, \
         please call {}. Thank you.",
        sdate.format("%Y-%m-%d"),
        edate.format("%Y-%m-%d"),
        BOOKING_PHONE
    )
}
