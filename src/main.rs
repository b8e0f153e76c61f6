use chrono::NaiveDate;
use clap::Parser;
use ratesapp::{
    config, AvailabilityStore, PropertyLookup, QuoteOutcome, RateQuoteOrchestrator, RatesApi,
    RatesAppClient, SelectionState,
};
use std::process;
use std::sync::Arc;

/// Fetches a property's availability calendar, validates the requested stay
/// range against it, and prints the rate-quote outcome.
#[derive(Parser)]
#[command(name = "ratesapp")]
struct Args {
    /// Property id (list id)
    property_id: String,

    /// Check-in date, YYYY-MM-DD
    #[arg(long)]
    checkin: NaiveDate,

    /// Check-out date, YYYY-MM-DD
    #[arg(long)]
    checkout: NaiveDate,

    /// Guest count
    #[arg(long, default_value_t = 1)]
    sleeps: u32,
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let args = Args::parse();

    let api: Arc<dyn RatesApi> = match RatesAppClient::new() {
        Ok(client) => Arc::new(client),
        Err(e) => {
            eprintln!("❌ Client init failed: {e}");
            process::exit(1);
        }
    };

    // 1️⃣ Property summary (carries the quote gate inputs)
    let summary = match PropertyLookup::new(Arc::clone(&api)).fetch(&args.property_id).await {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("❌ {e}. Please call {} for further assistance.", config::BOOKING_PHONE);
            process::exit(1);
        }
    };

    // 2️⃣ Availability calendar
    let store = AvailabilityStore::new(Arc::clone(&api), summary.list_id.clone());
    let availability = match store.fetch().await {
        Ok(map) => map,
        Err(e) => {
            eprintln!("❌ Could not load availability: {e}");
            process::exit(1);
        }
    };

    // 3️⃣ Walk the picker through the requested range
    let state = SelectionState::Empty
        .click(args.checkin, &availability)
        .click(args.checkout, &availability);

    let SelectionState::RangeComplete(start, end) = state else {
        eprintln!(
            "Dates {} to {} are not selectable; the range crosses an unavailable day.",
            args.checkin, args.checkout
        );
        process::exit(1);
    };

    // 4️⃣ Quote
    let orchestrator = RateQuoteOrchestrator::new(Arc::clone(&api), summary);
    match orchestrator.request_quote(start, end, args.sleeps).await {
        Ok(outcome) => print_outcome(&outcome),
        Err(e) => {
            eprintln!("Error loading rates. Please try again. ({e})");
            process::exit(1);
        }
    }
}

fn print_outcome(outcome: &QuoteOutcome) {
    match outcome {
        QuoteOutcome::Priced(quote) => {
            println!("✅ Total: ${:.2}", quote.price);
            println!("   Security deposit: ${:.2}", quote.security_deposit);
            if let Some(base) = quote.breakdown.base_price {
                println!("   Base price: ${base:.2}");
            }
            if let Some(commission) = quote.breakdown.commission {
                println!("   Commission: ${commission:.2}");
            }
        }
        QuoteOutcome::NeedsManualCall(messages) => {
            println!("📞 Please call {} for rates.", config::BOOKING_PHONE);
            for message in messages {
                println!("   {message}");
            }
        }
        QuoteOutcome::ZeroPriceAlternate(messages) => {
            println!("No instant rate could be computed for these dates.");
            for message in messages {
                println!("   {message}");
            }
        }
        QuoteOutcome::DatesUnavailable(messages) => {
            for message in messages {
                println!("{message}");
            }
        }
    }
}
