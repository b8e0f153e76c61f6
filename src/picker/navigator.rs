// src/picker/navigator.rs

use chrono::{Datelike, Months, NaiveDate};

/// Two side-by-side month panes with the right pane always one month after
/// the left. Navigating either pane recomputes the other. Purely structural;
/// what gets drawn into the panes is someone else's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DualCalendarNavigator {
    /// First day of the left pane's month.
    left: NaiveDate,
}

impl DualCalendarNavigator {
    pub fn starting_at(today: NaiveDate) -> Self {
        Self {
            left: first_of_month(today),
        }
    }

    pub fn left_month(&self) -> NaiveDate {
        self.left
    }

    pub fn right_month(&self) -> NaiveDate {
        add_months(self.left, 1)
    }

    /// The user navigated the left pane to `month`.
    pub fn navigate_left(&mut self, month: NaiveDate) {
        self.left = first_of_month(month);
    }

    /// The user navigated the right pane to `month`; the left pane snaps to
    /// one month earlier.
    pub fn navigate_right(&mut self, month: NaiveDate) {
        self.left = sub_months(first_of_month(month), 1);
    }

    /// Page both panes forward one month.
    pub fn advance(&mut self) {
        self.left = add_months(self.left, 1);
    }

    /// Page both panes back one month.
    pub fn retreat(&mut self) {
        self.left = sub_months(self.left, 1);
    }

    /// Whether `day` falls inside either visible pane.
    pub fn shows(&self, day: NaiveDate) -> bool {
        let pane = first_of_month(day);
        pane == self.left_month() || pane == self.right_month()
    }
}

fn first_of_month(day: NaiveDate) -> NaiveDate {
    day.with_day(1).unwrap_or(day)
}

fn add_months(day: NaiveDate, n: u32) -> NaiveDate {
    day.checked_add_months(Months::new(n)).unwrap_or(day)
}

fn sub_months(day: NaiveDate, n: u32) -> NaiveDate {
    day.checked_sub_months(Months::new(n)).unwrap_or(day)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn starts_on_the_current_month_pair() {
        let nav = DualCalendarNavigator::starting_at(ymd(2026, 6, 17));
        assert_eq!(nav.left_month(), ymd(2026, 6, 1));
        assert_eq!(nav.right_month(), ymd(2026, 7, 1));
    }

    #[test]
    fn navigating_left_drags_right_along() {
        let mut nav = DualCalendarNavigator::starting_at(ymd(2026, 6, 1));
        nav.navigate_left(ymd(2026, 9, 1));
        assert_eq!(nav.left_month(), ymd(2026, 9, 1));
        assert_eq!(nav.right_month(), ymd(2026, 10, 1));
    }

    #[test]
    fn navigating_right_drags_left_along() {
        let mut nav = DualCalendarNavigator::starting_at(ymd(2026, 6, 1));
        nav.navigate_right(ymd(2026, 3, 15));
        assert_eq!(nav.left_month(), ymd(2026, 2, 1));
        assert_eq!(nav.right_month(), ymd(2026, 3, 1));
    }

    #[test]
    fn paging_wraps_the_year_boundary() {
        let mut nav = DualCalendarNavigator::starting_at(ymd(2026, 12, 5));
        assert_eq!(nav.right_month(), ymd(2027, 1, 1));

        nav.advance();
        assert_eq!(nav.left_month(), ymd(2027, 1, 1));
        assert_eq!(nav.right_month(), ymd(2027, 2, 1));

        nav.retreat();
        nav.retreat();
        assert_eq!(nav.left_month(), ymd(2026, 11, 1));
        assert_eq!(nav.right_month(), ymd(2026, 12, 1));
    }

    #[test]
    fn shows_both_panes_and_nothing_else() {
        let nav = DualCalendarNavigator::starting_at(ymd(2026, 6, 1));
        assert!(nav.shows(ymd(2026, 6, 30)));
        assert!(nav.shows(ymd(2026, 7, 1)));
        assert!(!nav.shows(ymd(2026, 5, 31)));
        assert!(!nav.shows(ymd(2026, 8, 1)));
    }
}
