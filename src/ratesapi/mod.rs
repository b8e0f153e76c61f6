mod client;
mod models;

pub use client::{RatesApi, RatesAppClient};
pub use models::{
    AvailabilityPayload, AvailabilityResponse, DayFlags, MoneyValue, PropertyRecord, RateResponse,
    UnitAvailability,
};
