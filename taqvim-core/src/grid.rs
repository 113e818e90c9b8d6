//! Month grid construction.
//!
//! A grid is a fixed six-week window: 42 consecutive civil days starting at
//! the first occurrence of the configured week-start day on or before the
//! 1st of the reference month. Six weeks always cover a full month: the
//! offset is at most 6 and no supported month exceeds 31 days.

use chrono::{Duration, NaiveDate};

use crate::calendar::{CalendarDate, CalendarSystem};
use crate::error::ScheduleResult;
use crate::month::MonthRef;

/// Number of cells in a month view: six full weeks.
pub const GRID_CELLS: usize = 42;

/// One day cell of a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    /// The underlying civil day, used for item classification.
    pub civil: NaiveDate,
    /// The same day in the active calendar system.
    pub date: CalendarDate,
    pub in_reference_month: bool,
    pub is_today: bool,
}

/// The 42-day sequence for one reference month. A pure projection,
/// recomputed (never mutated) when the reference month changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub month: MonthRef,
    pub week_start: u32,
    cells: Vec<GridCell>,
}

impl MonthGrid {
    /// Build the grid for `month`, starting each row on `week_start`
    /// (0..=6 in the system's weekday numbering, taken modulo 7).
    ///
    /// `today` is the civil day to flag, normally `clock.now().date()`.
    pub fn build(
        system: &dyn CalendarSystem,
        month: MonthRef,
        week_start: u32,
        today: NaiveDate,
    ) -> ScheduleResult<MonthGrid> {
        let week_start = week_start % 7;
        let first = system.from_calendar_date(&month.first_day(system))?;
        let offset = (system.weekday_index(first) + 7 - week_start) % 7;
        let grid_start = first - Duration::days(i64::from(offset));

        let mut cells = Vec::with_capacity(GRID_CELLS);
        for i in 0..GRID_CELLS {
            let civil = grid_start + Duration::days(i as i64);
            let date = system.to_calendar_date(civil)?;
            cells.push(GridCell {
                civil,
                date,
                in_reference_month: month.contains(&date),
                is_today: civil == today,
            });
        }

        Ok(MonthGrid {
            month,
            week_start,
            cells,
        })
    }

    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    /// Rows of seven cells, in display order.
    pub fn weeks(&self) -> impl Iterator<Item = &[GridCell]> {
        self.cells.chunks(7)
    }

    pub fn cell_for(&self, civil: NaiveDate) -> Option<&GridCell> {
        self.cells.iter().find(|c| c.civil == civil)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::jalali::Jalali;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 25).unwrap()
    }

    fn build(month: MonthRef, week_start: u32) -> MonthGrid {
        MonthGrid::build(&Jalali, month, week_start, today()).unwrap()
    }

    #[test]
    fn covers_every_month_for_every_week_start() {
        let sys = Jalali;
        // A 31-day month, a 30-day month, a leap Esfand and a short Esfand
        let months = [
            MonthRef::new(1403, 1).unwrap(),
            MonthRef::new(1403, 7).unwrap(),
            MonthRef::new(1403, 12).unwrap(),
            MonthRef::new(1402, 12).unwrap(),
        ];
        for month in months {
            let len = sys.days_in_month(month.year, month.month).unwrap();
            for week_start in 0..7 {
                let grid = build(month, week_start);
                assert_eq!(grid.cells().len(), GRID_CELLS);

                // Ascending, consecutive, no gaps
                for pair in grid.cells().windows(2) {
                    assert_eq!(pair[1].civil, pair[0].civil.succ_opt().unwrap());
                }

                // The reference month is a contiguous sub-range
                let in_month: Vec<_> = grid
                    .cells()
                    .iter()
                    .enumerate()
                    .filter(|(_, c)| c.in_reference_month)
                    .collect();
                assert_eq!(in_month.len() as u32, len, "{month:?} ws={week_start}");
                let first_idx = in_month[0].0;
                let last_idx = in_month[in_month.len() - 1].0;
                assert_eq!(last_idx - first_idx + 1, len as usize);
                assert_eq!(in_month[0].1.date.day, 1);

                // Each row starts on the configured weekday
                for week in grid.weeks() {
                    assert_eq!(sys.weekday_index(week[0].civil), week_start);
                }
            }
        }
    }

    #[test]
    fn deterministic_for_identical_inputs() {
        let month = MonthRef::new(1403, 6).unwrap();
        assert_eq!(build(month, 0), build(month, 0));
    }

    #[test]
    fn leading_and_trailing_days_flagged_out_of_month() {
        // Farvardin 1403 starts on a Wednesday (index 4), so a Saturday-first
        // grid leads with four days of Esfand 1402.
        let grid = build(MonthRef::new(1403, 1).unwrap(), 0);
        let cells = grid.cells();
        for cell in &cells[..4] {
            assert!(!cell.in_reference_month);
            assert_eq!(cell.date.month, 12);
            assert_eq!(cell.date.year, 1402);
        }
        assert!(cells[4].in_reference_month);
        assert_eq!(cells[4].date.day, 1);
    }

    #[test]
    fn today_is_flagged_exactly_once() {
        let grid = build(MonthRef::new(1403, 1).unwrap(), 0);
        let flagged: Vec<_> = grid.cells().iter().filter(|c| c.is_today).collect();
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].civil, today());

        // Out-of-window today is simply absent
        let far = build(MonthRef::new(1400, 1).unwrap(), 0);
        assert!(far.cells().iter().all(|c| !c.is_today));
    }

    #[test]
    fn cell_lookup_by_civil_day() {
        let grid = build(MonthRef::new(1403, 1).unwrap(), 0);
        let nowruz = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        let cell = grid.cell_for(nowruz).unwrap();
        assert_eq!(cell.date.day, 1);
        assert!(grid.cell_for(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()).is_none());
    }
}
