use crate::errors::{NetworkFailure, PropertyError};
use crate::property::PropertyLookup;
use crate::tests::utils::{property_record, ScriptedApi};
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn an_empty_result_set_means_offline() {
    let api = Arc::new(ScriptedApi::new());
    api.push_property(Ok(vec![]));
    let lookup = PropertyLookup::new(api.clone());

    let result = lookup.fetch("17").await;

    assert!(matches!(result, Err(PropertyError::Offline)));
}

#[tokio::test]
async fn a_zero_status_means_offline_even_as_a_string() {
    let api = Arc::new(ScriptedApi::new());
    api.push_property(Ok(vec![property_record(json!("0"), json!(1), "AK")]));
    let lookup = PropertyLookup::new(api.clone());

    let result = lookup.fetch("17").await;

    assert!(matches!(result, Err(PropertyError::Offline)));
}

#[tokio::test]
async fn an_online_record_yields_the_gate_inputs() {
    let api = Arc::new(ScriptedApi::new());
    api.push_property(Ok(vec![property_record(json!(1), json!(0), "AK")]));
    let lookup = PropertyLookup::new(api.clone());

    let summary = lookup.fetch("17").await.unwrap();

    assert_eq!(summary.list_id, "17");
    assert!(!summary.rate_available);
    assert_eq!(summary.data_source_code, "AK");
}

#[tokio::test]
async fn transport_failures_propagate() {
    let api = Arc::new(ScriptedApi::new());
    api.push_property(Err(NetworkFailure::Status(503, String::new())));
    let lookup = PropertyLookup::new(api.clone());

    let result = lookup.fetch("17").await;

    assert!(matches!(
        result,
        Err(PropertyError::Network(NetworkFailure::Status(503, _)))
    ));
}
