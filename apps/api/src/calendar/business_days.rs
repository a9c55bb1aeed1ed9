//! Business-day arithmetic for payment and submission deadlines.
//!
//! A business day is a weekday whose `MM-DD` is not in the holiday set.
//! Holidays are stored without a year, so the same dates repeat every year.

use std::collections::HashSet;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::Serialize;

/// Company operating calendar, observed dates for 2026. Minor federal holidays
/// on which the company works are intentionally absent.
pub const DEFAULT_HOLIDAYS: &[&str] = &[
    "01-01", // New Year's Day
    "05-25", // Memorial Day
    "07-04", // Independence Day
    "09-07", // Labor Day
    "11-26", // Thanksgiving
    "12-25", // Christmas
];

pub const STANDARD_PAYMENT_DAYS: i64 = 3;
pub const CALIFORNIA_PAYMENT_DAYS: i64 = 5;
pub const MAX_SUBMISSION_CALENDAR_DAYS: u64 = 35;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayCalendar {
    holidays: HashSet<String>,
}

impl Default for HolidayCalendar {
    fn default() -> Self {
        Self::new(DEFAULT_HOLIDAYS.iter().copied())
    }
}

impl HolidayCalendar {
    pub fn new<I, S>(holidays: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            holidays: holidays.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(&date.format("%m-%d").to_string())
    }

    pub fn is_business_day(&self, date: NaiveDate) -> bool {
        !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) && !self.is_holiday(date)
    }

    /// Returns the date on which the `target_days`-th business day falls,
    /// counting `start` itself as day 1 when it is a business day.
    /// `target_days <= 0` returns `start` unchanged.
    ///
    /// `None` when the walk runs off the end of the representable calendar.
    /// Loops forever if no business day is ever reachable; the holiday set
    /// must leave weekdays open.
    pub fn add_business_days(&self, start: NaiveDate, target_days: i64) -> Option<NaiveDate> {
        if target_days <= 0 {
            return Some(start);
        }

        let mut current = start;
        let mut counted = 0;
        loop {
            if self.is_business_day(current) {
                counted += 1;
                if counted == target_days {
                    return Some(current);
                }
            }
            current = current.succ_opt()?;
        }
    }

    /// `start + calendar_days`, moved back to the nearest business day so the
    /// deadline never lands past the limit.
    pub fn max_submission_date(&self, start: NaiveDate, calendar_days: u64) -> Option<NaiveDate> {
        let mut target = start.checked_add_days(Days::new(calendar_days))?;
        while !self.is_business_day(target) {
            target = target.pred_opt()?;
        }
        Some(target)
    }

    /// All three dashboard deadlines for `today`, or `None` if any of them
    /// falls outside the representable calendar.
    pub fn workspace_dates(&self, today: NaiveDate) -> Option<PaymentDates> {
        Some(PaymentDates {
            standard: format_display_date(self.add_business_days(today, STANDARD_PAYMENT_DAYS)?),
            california: format_display_date(
                self.add_business_days(today, CALIFORNIA_PAYMENT_DAYS)?,
            ),
            max_date: format_display_date(
                self.max_submission_date(today, MAX_SUBMISSION_CALENDAR_DAYS)?,
            ),
        })
    }
}

/// Deadlines shown on the agent dashboard, formatted `MM/DD/YYYY`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentDates {
    pub standard: String,
    pub california: String,
    pub max_date: String,
}

/// `MM/DD/YYYY`, independent of locale.
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%m/%d/%Y").to_string()
}
