// src/property.rs

use crate::errors::PropertyError;
use crate::ratesapi::{PropertyRecord, RatesApi};
use serde_json::Value;
use std::sync::Arc;

/// The slice of a property record the quote flow actually needs, cleaned up.
/// This is the anti-corruption layer between the raw endpoint record and the
/// orchestrator's gates.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertySummary {
    pub list_id: String,
    pub online: bool,
    /// Gate 1 input; upstream `RATE_AVAILABLE`, where only an explicit zero
    /// closes the gate.
    pub rate_available: bool,
    /// Gate 2 input; upstream `DataSourceCde`.
    pub data_source_code: String,
}

impl PropertySummary {
    /// Builds a summary from the first record the endpoint returned.
    /// Upstream mixes numbers and numeric strings for its 0/1 fields, and a
    /// garbled value must not take a property offline by accident.
    pub fn from_record(prop_id: &str, rec: &PropertyRecord) -> Self {
        let list_id = rec
            .list_id
            .as_ref()
            .and_then(loose_string)
            .unwrap_or_else(|| prop_id.to_string());

        Self {
            list_id,
            online: loose_int(&rec.status) != Some(0),
            rate_available: loose_int(&rec.rate_available) != Some(0),
            data_source_code: rec.data_source_code.clone().unwrap_or_default(),
        }
    }
}

/// Fetches the property summary whose fields seed the quote gates.
pub struct PropertyLookup {
    api: Arc<dyn RatesApi>,
}

impl PropertyLookup {
    pub fn new(api: Arc<dyn RatesApi>) -> Self {
        Self { api }
    }

    /// An empty result set or an explicit zero status both mean the property
    /// is no longer online.
    pub async fn fetch(&self, prop_id: &str) -> Result<PropertySummary, PropertyError> {
        let records = self.api.fetch_property(prop_id).await?;

        let Some(first) = records.first() else {
            return Err(PropertyError::Offline);
        };

        let summary = PropertySummary::from_record(prop_id, first);
        if !summary.online {
            return Err(PropertyError::Offline);
        }

        Ok(summary)
    }
}

fn loose_int(value: &Option<Value>) -> Option<i64> {
    match value {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

fn loose_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
