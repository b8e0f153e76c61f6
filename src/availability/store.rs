// src/availability/store.rs

use crate::availability::classify::{classify_day, DateStatus};
use crate::errors::NetworkFailure;
use crate::ratesapi::{AvailabilityResponse, RatesApi};
use chrono::NaiveDate;
use log::warn;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// Every classified day for one property. Replaced wholesale on each fetch,
/// never patched. Days missing from the map are simply unknown (and in
/// particular are not Unavailable).
pub type AvailabilityMap = BTreeMap<NaiveDate, DateStatus>;

/// Owns the availability snapshot for one property's detail view.
///
/// Fetches may overlap; a fetch that completes after a newer one was issued,
/// or after `close()`, leaves the retained snapshot alone (last-issued-wins).
pub struct AvailabilityStore {
    api: Arc<dyn RatesApi>,
    list_id: String,
    issued: AtomicU64,
    closed: AtomicBool,
    retained: Mutex<Retained>,
}

struct Retained {
    generation: u64,
    map: Arc<AvailabilityMap>,
}

impl AvailabilityStore {
    pub fn new(api: Arc<dyn RatesApi>, list_id: impl Into<String>) -> Self {
        Self {
            api,
            list_id: list_id.into(),
            issued: AtomicU64::new(0),
            closed: AtomicBool::new(false),
            retained: Mutex::new(Retained {
                generation: 0,
                map: Arc::new(AvailabilityMap::new()),
            }),
        }
    }

    /// Fetches and classifies the property's calendar. Returns this fetch's
    /// own snapshot; the *retained* snapshot only advances when no newer
    /// fetch has been issued in the meantime.
    pub async fn fetch(&self) -> Result<Arc<AvailabilityMap>, NetworkFailure> {
        let generation = self.issued.fetch_add(1, Ordering::SeqCst) + 1;

        let resp = self.api.fetch_availability(&self.list_id).await?;
        let map = Arc::new(build_map(resp));

        if !self.closed.load(Ordering::SeqCst) {
            let mut retained = self.retained.lock().unwrap_or_else(|e| e.into_inner());
            if generation > retained.generation {
                retained.generation = generation;
                retained.map = Arc::clone(&map);
            }
        }

        Ok(map)
    }

    /// The most recently retained snapshot (empty until a fetch lands).
    pub fn snapshot(&self) -> Arc<AvailabilityMap> {
        let retained = self.retained.lock().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&retained.map)
    }

    /// View teardown: in-flight fetches finish as no-ops from here on.
    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }
}

fn build_map(resp: AvailabilityResponse) -> AvailabilityMap {
    let mut map = AvailabilityMap::new();

    let days = resp
        .payload
        .and_then(|p| p.availability)
        .map(|a| a.days)
        .unwrap_or_default();

    for (date_str, flags) in days {
        match NaiveDate::parse_from_str(&date_str, "%Y-%m-%d") {
            Ok(date) => {
                map.insert(date, classify_day(&flags));
            }
            Err(e) => {
                warn!("skipping unparseable availability date {date_str:?}: {e}");
            }
        }
    }

    map
}
