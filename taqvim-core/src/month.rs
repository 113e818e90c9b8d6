//! Reference month and navigation.

use serde::{Deserialize, Serialize};

use crate::calendar::{CalendarDate, CalendarSystem};
use crate::clock::Clock;
use crate::error::{ScheduleError, ScheduleResult};

/// A (year, month) pair in the active calendar system: the month a grid is
/// built for. Navigation is pure; the host holds the current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonthRef {
    pub year: i32,
    pub month: u32,
}

impl MonthRef {
    pub fn new(year: i32, month: u32) -> ScheduleResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(ScheduleError::InvalidMonth(month));
        }
        Ok(MonthRef { year, month })
    }

    /// The month containing "now".
    pub fn current(system: &dyn CalendarSystem, clock: &dyn Clock) -> ScheduleResult<Self> {
        let today = system.today(clock)?;
        Ok(MonthRef {
            year: today.year,
            month: today.month,
        })
    }

    /// The following month, rolling the year over after month 12.
    pub fn next(self) -> Self {
        if self.month == 12 {
            MonthRef {
                year: self.year + 1,
                month: 1,
            }
        } else {
            MonthRef {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// The preceding month, rolling the year back before month 1.
    pub fn prev(self) -> Self {
        if self.month == 1 {
            MonthRef {
                year: self.year - 1,
                month: 12,
            }
        } else {
            MonthRef {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// The first day of this month.
    pub fn first_day(&self, system: &dyn CalendarSystem) -> CalendarDate {
        CalendarDate {
            system: system.id(),
            year: self.year,
            month: self.month,
            day: 1,
        }
    }

    /// Whether `date` falls inside this month.
    pub fn contains(&self, date: &CalendarDate) -> bool {
        date.year == self.year && date.month == self.month
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::jalali::Jalali;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;

    #[test]
    fn rollover_forward_and_back() {
        let esfand = MonthRef::new(1403, 12).unwrap();
        assert_eq!(esfand.next(), MonthRef::new(1404, 1).unwrap());

        let farvardin = MonthRef::new(1404, 1).unwrap();
        assert_eq!(farvardin.prev(), MonthRef::new(1403, 12).unwrap());
    }

    #[test]
    fn next_and_prev_are_inverses() {
        let mut m = MonthRef::new(1400, 1).unwrap();
        for _ in 0..30 {
            assert_eq!(m.next().prev(), m);
            m = m.next();
        }
        assert_eq!(m, MonthRef::new(1402, 7).unwrap());
    }

    #[test]
    fn rejects_month_out_of_range() {
        assert_eq!(
            MonthRef::new(1403, 0),
            Err(ScheduleError::InvalidMonth(0))
        );
        assert_eq!(
            MonthRef::new(1403, 13),
            Err(ScheduleError::InvalidMonth(13))
        );
    }

    #[test]
    fn current_month_from_clock() {
        let clock = FixedClock(
            NaiveDate::from_ymd_opt(2024, 3, 20)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        );
        let m = MonthRef::current(&Jalali, &clock).unwrap();
        assert_eq!(m, MonthRef::new(1403, 1).unwrap());
    }
}
