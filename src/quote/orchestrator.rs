// src/quote/orchestrator.rs

use crate::config::LIVE_QUOTE_SOURCE_CODE;
use crate::errors::QuoteError;
use crate::property::PropertySummary;
use crate::quote::outcome::{
    call_for_rates_message, dates_unavailable_message, PricedQuote, QuoteOutcome, RateBreakdown,
};
use crate::ratesapi::{MoneyValue, RatesApi};
use chrono::NaiveDate;
use log::debug;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

/// Runs the gate → fetch → parse pipeline for one property.
///
/// The two manual-call gates short-circuit before any network traffic; a
/// successful HTTP response still branches three ways on its price and
/// availability fields. Requests carry a monotonically increasing
/// generation, so a response that lands after a newer request was issued
/// resolves to `QuoteError::Superseded` instead of a presentable outcome
/// (last-issued-wins, not last-arrived-wins).
pub struct RateQuoteOrchestrator {
    api: Arc<dyn RatesApi>,
    property: PropertySummary,
    issued: AtomicU64,
    closed: AtomicBool,
}

impl RateQuoteOrchestrator {
    pub fn new(api: Arc<dyn RatesApi>, property: PropertySummary) -> Self {
        Self {
            api,
            property,
            issued: AtomicU64::new(0),
            closed: AtomicBool::new(false),
        }
    }

    pub fn property(&self) -> &PropertySummary {
        &self.property
    }

    /// View teardown: every in-flight request resolves `Superseded` from
    /// here on and mutates nothing.
    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    pub async fn request_quote(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        occupancy: u32,
    ) -> Result<QuoteOutcome, QuoteError> {
        if end <= start {
            return Err(QuoteError::InvalidRange);
        }
        // A malformed submit must not supersede a request already in flight,
        // so the generation is only issued once the range is valid.
        let generation = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        let sleeps = occupancy.max(1);

        // Gate 1: the property does not live-quote at all.
        if !self.property.rate_available {
            self.ensure_current(generation)?;
            return Ok(QuoteOutcome::NeedsManualCall(Vec::new()));
        }

        // Gate 2: only one data source supports live quoting.
        if self.property.data_source_code != LIVE_QUOTE_SOURCE_CODE {
            self.ensure_current(generation)?;
            return Ok(QuoteOutcome::NeedsManualCall(vec![call_for_rates_message()]));
        }

        let resp = self
            .api
            .fetch_rate(&self.property.list_id, start, end, sleeps)
            .await?;
        self.ensure_current(generation)?;

        if !resp.available {
            return Ok(QuoteOutcome::DatesUnavailable(vec![
                dates_unavailable_message(start, end),
            ]));
        }

        // Provider flagged an error without denying availability: nothing
        // priceable came back.
        if resp.error {
            return Ok(QuoteOutcome::ZeroPriceAlternate(resp.provider_messages));
        }

        let price = money(&resp.price);
        if price == 0.0 {
            debug!("provider returned a zero price for {start}..{end}");
            return Ok(QuoteOutcome::ZeroPriceAlternate(resp.provider_messages));
        }

        Ok(QuoteOutcome::Priced(PricedQuote {
            price,
            security_deposit: money(&resp.security_deposit),
            breakdown: RateBreakdown {
                base_price: resp.base_price.as_ref().and_then(MoneyValue::as_f64),
                commission: resp.commission.as_ref().and_then(MoneyValue::as_f64),
                source_rate_details: resp.source_rate_details,
                satisfied_rule: resp.satisfied_rule,
            },
        }))
    }

    fn ensure_current(&self, generation: u64) -> Result<(), QuoteError> {
        if self.closed.load(Ordering::SeqCst) || self.issued.load(Ordering::SeqCst) != generation {
            return Err(QuoteError::Superseded);
        }
        Ok(())
    }
}

/// A missing or unparsable amount reads as zero, which the zero-price branch
/// then treats as "no computable rate".
fn money(value: &Option<MoneyValue>) -> f64 {
    value.as_ref().and_then(MoneyValue::as_f64).unwrap_or(0.0)
}
