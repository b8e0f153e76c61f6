mod classify;
mod store;

pub use classify::{classify_day, DateStatus};
pub use store::{AvailabilityMap, AvailabilityStore};
