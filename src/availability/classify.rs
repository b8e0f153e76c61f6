// src/availability/classify.rs

use crate::ratesapi::DayFlags;
use log::warn;

/// How a single calendar day may be booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStatus {
    /// Bookable with no AM/PM split.
    Available,
    /// Fully blocked.
    Unavailable,
    /// Changeover day bookable for the morning half only.
    AmOnly,
    /// Changeover day bookable for the evening half only.
    PmOnly,
    /// A continuing night of an existing stay, not a valid arrival day.
    NoCheckin,
}

/// Classifies one day from its upstream flags.
///
/// The rules are an ordered table, first match wins. The order determines
/// precedence: a day that is "Yes"/"Yes"/"Yes" is Available even when its
/// check-in flag says "No", because rule 1 fires before rule 5.
///
/// The final fallback keys on `AvailableYesNo` alone, so classification
/// never fails; malformed flag combinations degrade to a safe default
/// instead of erroring.
pub fn classify_day(flags: &DayFlags) -> DateStatus {
    let overall = flags.available.as_str();
    let am = flags.available_am.as_str();
    let pm = flags.available_pm.as_str();

    match (overall, am, pm) {
        // 1. Both halves open.
        ("Yes", "Yes", "Yes") => return DateStatus::Available,
        // 2. Both halves blocked.
        ("No", "No", "No") => return DateStatus::Unavailable,
        // 3. Morning blocked, evening open.
        ("Yes", "No", "Yes") => return DateStatus::PmOnly,
        // 4. Morning open, evening blocked, in either overall reading.
        ("Yes", "Yes", "No") | ("No", "Yes", "No") => return DateStatus::AmOnly,
        _ => {}
    }

    // 5. Open overall but not an arrival day.
    if overall == "Yes" && flags.available_checkin == "No" {
        return DateStatus::NoCheckin;
    }

    // 6. Nothing matched: fall back to the overall flag alone.
    warn!(
        "unexpected availability flags (overall={:?} am={:?} pm={:?} checkin={:?}), using overall flag",
        flags.available, flags.available_am, flags.available_pm, flags.available_checkin
    );
    if overall == "Yes" {
        DateStatus::Available
    } else {
        DateStatus::Unavailable
    }
}
