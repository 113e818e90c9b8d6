//! Calendar system abstraction.
//!
//! A calendar system maps civil (ISO) days to its own (year, month, day)
//! triples. The engine itself only ever steps whole civil days; everything
//! the user sees goes through a `CalendarSystem`.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::clock::Clock;
use crate::error::ScheduleResult;

pub mod jalali;

/// Identifier of a calendar system (e.g. "jalali").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CalendarSystemId(pub &'static str);

impl fmt::Display for CalendarSystemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A (year, month, day) triple in a specific calendar system.
///
/// Two dates are the same day iff all four fields are equal; comparisons
/// across systems are a caller bug and never succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CalendarDate {
    pub system: CalendarSystemId,
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Conversion and layout rules of one calendar system.
///
/// Weekday indices are in the system's own conventional numbering (for
/// Jalali: 0 = Saturday .. 6 = Friday); `default_week_start` names the index
/// that conventionally opens a week.
pub trait CalendarSystem {
    fn id(&self) -> CalendarSystemId;

    /// A (year, month, day) triple tagged with this system's id. Not
    /// validated; `from_calendar_date` is where invalid triples surface.
    fn date(&self, year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate {
            system: self.id(),
            year,
            month,
            day,
        }
    }

    /// Convert a civil day into this system's (year, month, day).
    fn to_calendar_date(&self, civil: NaiveDate) -> ScheduleResult<CalendarDate>;

    /// Convert a triple back into a civil day, validating it first.
    fn from_calendar_date(&self, date: &CalendarDate) -> ScheduleResult<NaiveDate>;

    /// Length of a month, accounting for leap years.
    fn days_in_month(&self, year: i32, month: u32) -> ScheduleResult<u32>;

    /// Weekday of a civil day, in this system's numbering.
    fn weekday_index(&self, civil: NaiveDate) -> u32;

    /// Index of the conventional first weekday of a week.
    fn default_week_start(&self) -> u32;

    /// Today's date per the injected clock.
    fn today(&self, clock: &dyn Clock) -> ScheduleResult<CalendarDate> {
        self.to_calendar_date(clock.now().date())
    }

    /// Display name of a month (1..=12).
    fn month_name(&self, month: u32) -> ScheduleResult<&'static str>;

    /// Short display name for a weekday index (taken modulo 7).
    fn weekday_short_name(&self, index: u32) -> &'static str;
}
