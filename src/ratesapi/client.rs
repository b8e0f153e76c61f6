// client.rs
use crate::config;
use crate::errors::NetworkFailure;
use crate::ratesapi::models::{AvailabilityResponse, PropertyRecord, RateResponse};
use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

/// The two upstream collaborators the quote flow needs: the rates app
/// (availability + live rates) and the property-details endpoint. Behind a
/// trait so the store and the orchestrator can be driven by a test double.
#[async_trait]
pub trait RatesApi: Send + Sync {
    async fn fetch_availability(&self, list_id: &str)
        -> Result<AvailabilityResponse, NetworkFailure>;

    async fn fetch_rate(
        &self,
        list_id: &str,
        sdate: NaiveDate,
        edate: NaiveDate,
        sleeps: u32,
    ) -> Result<RateResponse, NetworkFailure>;

    async fn fetch_property(&self, prop_id: &str) -> Result<Vec<PropertyRecord>, NetworkFailure>;
}

pub struct RatesAppClient {
    client: Client,
    rates_base: Url,
    user_base: Url,
}

impl RatesAppClient {
    pub fn new() -> Result<Self, NetworkFailure> {
        Self::with_bases(&config::rates_app_base_url(), &config::user_api_base_url())
    }

    pub fn with_bases(rates_base: &str, user_base: &str) -> Result<Self, NetworkFailure> {
        let client = Client::builder()
            .timeout(config::REQUEST_TIMEOUT)
            .build()
            .map_err(|e| NetworkFailure::Transport(e.to_string()))?;

        let rates_base = Url::parse(rates_base)
            .map_err(|e| NetworkFailure::Transport(format!("bad rates base url: {e}")))?;
        let user_base = Url::parse(user_base)
            .map_err(|e| NetworkFailure::Transport(format!("bad user base url: {e}")))?;

        Ok(Self {
            client,
            rates_base,
            user_base,
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        params: &[(&str, String)],
    ) -> Result<T, NetworkFailure> {
        let resp = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(map_transport)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(NetworkFailure::Status(status.as_u16(), body));
        }

        resp.json::<T>()
            .await
            .map_err(|e| NetworkFailure::Decode(e.to_string()))
    }
}

fn map_transport(e: reqwest::Error) -> NetworkFailure {
    if e.is_timeout() {
        NetworkFailure::Timeout
    } else {
        NetworkFailure::Transport(e.to_string())
    }
}

#[async_trait]
impl RatesApi for RatesAppClient {
    async fn fetch_availability(
        &self,
        list_id: &str,
    ) -> Result<AvailabilityResponse, NetworkFailure> {
        debug!("fetching availability for list_id={list_id}");
        self.get_json(
            self.rates_base.clone(),
            &[
                ("task", "get_avails".to_string()),
                ("list_id", list_id.to_string()),
            ],
        )
        .await
    }

    async fn fetch_rate(
        &self,
        list_id: &str,
        sdate: NaiveDate,
        edate: NaiveDate,
        sleeps: u32,
    ) -> Result<RateResponse, NetworkFailure> {
        let mut params = vec![
            ("task", "get_rate".to_string()),
            ("list_id", list_id.to_string()),
            ("SDATE", sdate.format("%Y-%m-%d").to_string()),
            ("EDATE", edate.format("%Y-%m-%d").to_string()),
        ];
        if sleeps > 0 {
            params.push(("sleeps", sleeps.to_string()));
        }

        debug!("fetching rates for list_id={list_id} {sdate}..{edate} sleeps={sleeps}");
        self.get_json(self.rates_base.clone(), &params).await
    }

    async fn fetch_property(&self, prop_id: &str) -> Result<Vec<PropertyRecord>, NetworkFailure> {
        let url = self
            .user_base
            .join("showPropertyDetails.php")
            .map_err(|e| NetworkFailure::Transport(format!("bad property url: {e}")))?;

        debug!("fetching property details for propId={prop_id}");
        self.get_json(url, &[("propId", prop_id.to_string())]).await
    }
}
