use crate::errors::NetworkFailure;
use crate::property::PropertySummary;
use crate::ratesapi::{AvailabilityResponse, PropertyRecord, RateResponse, RatesApi};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Scripted stand-in for the rates endpoints. Responses pop in FIFO order
/// and every call is counted, so tests can assert the manual-call gates
/// never touch the network. An optional gate parks the *first* call of an
/// endpoint until notified, which lets tests interleave overlapping
/// requests deterministically.
pub struct ScriptedApi {
    availability: Mutex<VecDeque<Result<AvailabilityResponse, NetworkFailure>>>,
    rates: Mutex<VecDeque<Result<RateResponse, NetworkFailure>>>,
    properties: Mutex<VecDeque<Result<Vec<PropertyRecord>, NetworkFailure>>>,
    hold_first_availability: Mutex<Option<Arc<Notify>>>,
    hold_first_rate: Mutex<Option<Arc<Notify>>>,
    pub availability_calls: AtomicUsize,
    pub rate_calls: AtomicUsize,
    pub property_calls: AtomicUsize,
    pub last_sleeps: Mutex<Option<u32>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self {
            availability: Mutex::new(VecDeque::new()),
            rates: Mutex::new(VecDeque::new()),
            properties: Mutex::new(VecDeque::new()),
            hold_first_availability: Mutex::new(None),
            hold_first_rate: Mutex::new(None),
            availability_calls: AtomicUsize::new(0),
            rate_calls: AtomicUsize::new(0),
            property_calls: AtomicUsize::new(0),
            last_sleeps: Mutex::new(None),
        }
    }

    pub fn push_availability(&self, resp: Result<AvailabilityResponse, NetworkFailure>) {
        self.availability.lock().unwrap().push_back(resp);
    }

    pub fn push_rate(&self, resp: Result<RateResponse, NetworkFailure>) {
        self.rates.lock().unwrap().push_back(resp);
    }

    pub fn push_property(&self, resp: Result<Vec<PropertyRecord>, NetworkFailure>) {
        self.properties.lock().unwrap().push_back(resp);
    }

    /// Parks the next availability call on `gate` until it is notified.
    pub fn hold_first_availability(&self, gate: Arc<Notify>) {
        *self.hold_first_availability.lock().unwrap() = Some(gate);
    }

    /// Parks the next rate call on `gate` until it is notified.
    pub fn hold_first_rate(&self, gate: Arc<Notify>) {
        *self.hold_first_rate.lock().unwrap() = Some(gate);
    }
}

#[async_trait]
impl RatesApi for ScriptedApi {
    async fn fetch_availability(
        &self,
        _list_id: &str,
    ) -> Result<AvailabilityResponse, NetworkFailure> {
        self.availability_calls.fetch_add(1, Ordering::SeqCst);

        // Pop at call arrival so responses pair with calls in issue order,
        // even when this call then parks on the gate.
        let resp = self
            .availability
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted availability response left");

        let gate = self.hold_first_availability.lock().unwrap().take();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        resp
    }

    async fn fetch_rate(
        &self,
        _list_id: &str,
        _sdate: NaiveDate,
        _edate: NaiveDate,
        sleeps: u32,
    ) -> Result<RateResponse, NetworkFailure> {
        self.rate_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_sleeps.lock().unwrap() = Some(sleeps);

        let resp = self
            .rates
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted rate response left");

        let gate = self.hold_first_rate.lock().unwrap().take();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        resp
    }

    async fn fetch_property(&self, _prop_id: &str) -> Result<Vec<PropertyRecord>, NetworkFailure> {
        self.property_calls.fetch_add(1, Ordering::SeqCst);

        self.properties
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted property response left")
    }
}

pub fn d(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Builds an availability response through the real wire shape, so the
/// serde renames get exercised too. Each entry is
/// (date, overall, am, pm, checkin).
pub fn availability_response(
    days: &[(&str, &str, &str, &str, &str)],
) -> AvailabilityResponse {
    let mut day_map = serde_json::Map::new();
    for (date, overall, am, pm, checkin) in days {
        day_map.insert(
            date.to_string(),
            json!({
                "minStay": null,
                "AvailableYesNo": overall,
                "AvailableAMYesNo": am,
                "AvailablePMYesNo": pm,
                "AvailableCheckInYesNo": checkin,
                "changeOver": "O",
            }),
        );
    }

    serde_json::from_value(json!({
        "error": false,
        "payload": {
            "list_id": "1",
            "avalabilityData": {
                "unit_id": "u1",
                "availabilityData": day_map,
            }
        }
    }))
    .unwrap()
}

pub fn rate_response(
    error: bool,
    available: bool,
    price: Value,
    deposit: Value,
    messages: &[&str],
) -> RateResponse {
    serde_json::from_value(json!({
        "error": error,
        "available": available,
        "Price": price,
        "securityDeposit": deposit,
        "providerMessages": messages,
        "sourceRateDetails": { "nights": 4 },
        "satisfiedRule": "base",
    }))
    .unwrap()
}

pub fn property_record(status: Value, rate_available: Value, source: &str) -> PropertyRecord {
    serde_json::from_value(json!({
        "list_id": 17,
        "status": status,
        "RATE_AVAILABLE": rate_available,
        "DataSourceCde": source,
    }))
    .unwrap()
}

/// An online property summary with the given gate inputs.
pub fn summary(list_id: &str, rate_available: bool, source: &str) -> PropertySummary {
    PropertySummary {
        list_id: list_id.to_string(),
        online: true,
        rate_available,
        data_source_code: source.to_string(),
    }
}
