pub mod availability;
pub mod config;
pub mod errors;
pub mod picker;
pub mod property;
pub mod quote;
pub mod ratesapi;

#[cfg(test)]
mod tests;

pub use availability::{AvailabilityMap, AvailabilityStore, DateStatus};
pub use errors::{NetworkFailure, PropertyError, QuoteError};
pub use picker::{DualCalendarNavigator, SelectionState};
pub use property::{PropertyLookup, PropertySummary};
pub use quote::{PricedQuote, QuoteOutcome, RateBreakdown, RateQuoteOrchestrator};
pub use ratesapi::{RatesApi, RatesAppClient};
