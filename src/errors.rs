// errors.rs
use std::fmt;

/// Transport-level failures from the rates-app or property endpoints.
/// None of these retry automatically; the user has to resubmit.
#[derive(Debug)]
pub enum NetworkFailure {
    /// The request exceeded the client timeout.
    Timeout,
    Transport(String),
    /// Non-2xx HTTP status, body included when the server sent one.
    Status(u16, String),
    Decode(String),
}

impl fmt::Display for NetworkFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkFailure::Timeout => write!(f, "Request timed out"),
            NetworkFailure::Transport(msg) => write!(f, "Network error: {msg}"),
            NetworkFailure::Status(code, msg) => write!(f, "Server error: {code} - {msg}"),
            NetworkFailure::Decode(msg) => write!(f, "Response decode error: {msg}"),
        }
    }
}

impl std::error::Error for NetworkFailure {}

/// Errors from the quote pipeline. A manual-call gate is *not* an error,
/// it is a `QuoteOutcome`; these are the cases where there is no outcome
/// to present at all.
#[derive(Debug)]
pub enum QuoteError {
    /// Check-out not strictly after check-in.
    InvalidRange,
    /// A newer quote request was issued (or the view was torn down)
    /// while this one was in flight. Never present this result.
    Superseded,
    Network(NetworkFailure),
}

impl fmt::Display for QuoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuoteError::InvalidRange => {
                write!(f, "Check-out date must be after check-in date")
            }
            QuoteError::Superseded => write!(f, "Quote request superseded by a newer one"),
            QuoteError::Network(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for QuoteError {}

impl From<NetworkFailure> for QuoteError {
    fn from(e: NetworkFailure) -> Self {
        QuoteError::Network(e)
    }
}

/// Errors from the property-summary lookup.
#[derive(Debug)]
pub enum PropertyError {
    /// The property record is missing or flagged offline upstream.
    Offline,
    Network(NetworkFailure),
}

impl fmt::Display for PropertyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyError::Offline => write!(f, "This property is no longer online"),
            PropertyError::Network(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for PropertyError {}

impl From<NetworkFailure> for PropertyError {
    fn from(e: NetworkFailure) -> Self {
        PropertyError::Network(e)
    }
}
