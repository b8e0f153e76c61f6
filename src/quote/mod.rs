mod orchestrator;
mod outcome;

pub use orchestrator::RateQuoteOrchestrator;
pub use outcome::{PricedQuote, QuoteOutcome, RateBreakdown};
