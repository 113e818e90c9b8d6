//! Error types for the taqvim scheduling engine.

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::calendar::CalendarSystemId;

/// Errors that can occur in scheduling operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Range ends at {end} before its start {start}")]
    InvalidRange {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Year {0} is outside the supported span of the calendar system")]
    UnsupportedYear(i32),

    #[error("Invalid month number {0} (expected 1..=12)")]
    InvalidMonth(u32),

    #[error("No such day: {year}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("Date belongs to calendar system '{got}', expected '{expected}'")]
    SystemMismatch {
        expected: CalendarSystemId,
        got: CalendarSystemId,
    },
}

/// Result type alias for scheduling operations.
pub type ScheduleResult<T> = Result<T, ScheduleError>;
