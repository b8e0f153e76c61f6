// src/picker/selection.rs

use crate::availability::{AvailabilityMap, DateStatus};
use crate::config::MAX_RANGE_NIGHTS;
use chrono::NaiveDate;

/// The date-range picker's whole state. Threaded through the pure `click`
/// transition so the selection logic tests without any widget behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Empty,
    /// Check-in picked, waiting on a check-out.
    StartSelected(NaiveDate),
    /// Check-in and check-out picked; the picker should auto-dismiss.
    RangeComplete(NaiveDate, NaiveDate),
}

impl SelectionState {
    /// Transition on a day click.
    ///
    /// Unavailable days are a no-op in every state. Invalid candidates
    /// (check-out before check-in resolved by restarting, a span crossing an
    /// Unavailable day, a zero-night same-day range, or a span past the
    /// maximum length) never raise; the click just doesn't advance the state.
    pub fn click(self, day: NaiveDate, availability: &AvailabilityMap) -> SelectionState {
        if is_unavailable(day, availability) {
            return self;
        }

        match self {
            SelectionState::Empty => SelectionState::StartSelected(day),

            SelectionState::StartSelected(start) => {
                // Clicking an earlier day restarts check-in there.
                if day < start {
                    return SelectionState::StartSelected(day);
                }
                // A check-out equal to check-in would be a zero-night stay.
                if day == start {
                    return self;
                }
                if !range_is_open(start, day, availability) {
                    return self;
                }
                SelectionState::RangeComplete(start, day)
            }

            // A third click starts a brand-new range.
            SelectionState::RangeComplete(_, _) => SelectionState::StartSelected(day),
        }
    }

    pub fn clear(self) -> SelectionState {
        SelectionState::Empty
    }

    pub fn start(&self) -> Option<NaiveDate> {
        match self {
            SelectionState::Empty => None,
            SelectionState::StartSelected(s) => Some(*s),
            SelectionState::RangeComplete(s, _) => Some(*s),
        }
    }

    pub fn end(&self) -> Option<NaiveDate> {
        match self {
            SelectionState::RangeComplete(_, e) => Some(*e),
            _ => None,
        }
    }

    pub fn is_range_start(&self, day: NaiveDate) -> bool {
        self.start() == Some(day)
    }

    pub fn is_range_end(&self, day: NaiveDate) -> bool {
        self.end() == Some(day)
    }

    /// Strictly between check-in and check-out; used by both calendar panes
    /// so a range straddling the pane boundary highlights consistently.
    pub fn is_inside_range(&self, day: NaiveDate) -> bool {
        match self {
            SelectionState::RangeComplete(s, e) => day > *s && day < *e,
            _ => false,
        }
    }

    /// "MM/DD/YYYY - MM/DD/YYYY" once complete, a prompt while half-picked.
    pub fn summary_text(&self) -> String {
        match self {
            SelectionState::Empty => String::new(),
            SelectionState::StartSelected(s) => {
                format!("{} - Select checkout", format_day(*s))
            }
            SelectionState::RangeComplete(s, e) => {
                format!("{} - {}", format_day(*s), format_day(*e))
            }
        }
    }

    pub fn placeholder_text(&self) -> String {
        match self {
            SelectionState::StartSelected(s) => {
                format!("{} - Choose checkout date", format_day(*s))
            }
            _ => "Please choose checkin-checkout date".to_string(),
        }
    }
}

fn is_unavailable(day: NaiveDate, availability: &AvailabilityMap) -> bool {
    matches!(availability.get(&day), Some(DateStatus::Unavailable))
}

/// Walks [start, end) day by day and refuses the candidate if any visited
/// day is Unavailable. AM-only, PM-only and no-checkin days are passable;
/// they constrain half days, not whole nights. The end day itself is not
/// visited: checking out of a day that starts someone else's stay is fine.
fn range_is_open(start: NaiveDate, end: NaiveDate, availability: &AvailabilityMap) -> bool {
    if (end - start).num_days() > MAX_RANGE_NIGHTS {
        return false;
    }

    let mut current = start;
    while current < end {
        if is_unavailable(current, availability) {
            return false;
        }
        let Some(next) = current.succ_opt() else {
            return false;
        };
        current = next;
    }
    true
}

fn format_day(day: NaiveDate) -> String {
    day.format("%m/%d/%Y").to_string()
}
