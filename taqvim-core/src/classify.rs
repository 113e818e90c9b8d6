//! Day classification: which items fall on which grid cells.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::grid::{GridCell, MonthGrid};
use crate::item::{CalendarItem, Occurrence};

/// Whether `item` occurs on the day of `cell`.
pub fn occurs_on(item: &CalendarItem, cell: &GridCell) -> bool {
    occurs_on_day(item, cell.civil)
}

/// Day-granularity occurrence test.
///
/// Point items match by calendar day, dropping time-of-day. Range items
/// match every day whose span intersects `[start, end]` inclusive, so both
/// boundary days count.
pub fn occurs_on_day(item: &CalendarItem, day: NaiveDate) -> bool {
    match &item.occurrence {
        Occurrence::Point(t) => t.date() == day,
        Occurrence::Range { start, end } => start.date() <= day && end.date() >= day,
    }
}

/// Items grouped by grid day. Derived for one grid snapshot, never stored.
///
/// Built in a single pass over items x cells; the grid is bounded at 42
/// cells, so no interval structure is needed at dashboard volumes.
#[derive(Debug, Default)]
pub struct DayIndex<'a> {
    by_day: HashMap<NaiveDate, Vec<&'a CalendarItem>>,
}

impl<'a> DayIndex<'a> {
    /// Index `items` against `grid`. Per-day order follows the order of
    /// `items`; a range item may land on many days, a point item on at most
    /// one.
    pub fn build(items: &'a [CalendarItem], grid: &MonthGrid) -> DayIndex<'a> {
        let mut by_day: HashMap<NaiveDate, Vec<&CalendarItem>> = HashMap::new();
        for item in items {
            for cell in grid.cells() {
                if occurs_on(item, cell) {
                    by_day.entry(cell.civil).or_default().push(item);
                }
            }
        }
        DayIndex { by_day }
    }

    pub fn items_on(&self, cell: &GridCell) -> &[&'a CalendarItem] {
        self.items_on_day(cell.civil)
    }

    pub fn items_on_day(&self, day: NaiveDate) -> &[&'a CalendarItem] {
        self.by_day.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn count_on(&self, cell: &GridCell) -> usize {
        self.items_on(cell).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::jalali::Jalali;
    use crate::grid::MonthGrid;
    use crate::item::{ItemKind, Occurrence};
    use crate::month::MonthRef;
    use chrono::NaiveDateTime;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn item(id: &str, occurrence: Occurrence) -> CalendarItem {
        CalendarItem {
            id: id.into(),
            kind: ItemKind::Meeting,
            title: format!("item {id}"),
            project_id: None,
            person_id: None,
            stage: None,
            occurrence,
            note: None,
        }
    }

    fn farvardin_grid() -> MonthGrid {
        let today = NaiveDate::from_ymd_opt(2024, 3, 25).unwrap();
        MonthGrid::build(&Jalali, MonthRef::new(1403, 1).unwrap(), 0, today).unwrap()
    }

    #[test]
    fn point_item_lands_on_exactly_one_cell() {
        let grid = farvardin_grid();
        let it = item("i1", Occurrence::Point(at(2024, 3, 22, 10)));
        let matching: Vec<_> = grid.cells().iter().filter(|c| occurs_on(&it, c)).collect();
        assert_eq!(matching.len(), 1);
        assert_eq!(
            matching[0].civil,
            NaiveDate::from_ymd_opt(2024, 3, 22).unwrap()
        );
    }

    #[test]
    fn point_time_of_day_is_ignored() {
        let grid = farvardin_grid();
        let morning = item("i1", Occurrence::Point(at(2024, 3, 22, 0)));
        let night = item("i2", Occurrence::Point(at(2024, 3, 22, 23)));
        let day = NaiveDate::from_ymd_opt(2024, 3, 22).unwrap();
        assert!(occurs_on_day(&morning, day));
        assert!(occurs_on_day(&night, day));
        assert_eq!(grid.cells().iter().filter(|c| occurs_on(&night, c)).count(), 1);
    }

    #[test]
    fn point_outside_grid_lands_nowhere() {
        let grid = farvardin_grid();
        let it = item("i1", Occurrence::Point(at(2023, 1, 1, 12)));
        assert!(grid.cells().iter().all(|c| !occurs_on(&it, c)));
    }

    #[test]
    fn range_covers_boundary_days_inclusive() {
        let grid = farvardin_grid();
        let it = item(
            "i1",
            Occurrence::Range {
                start: at(2024, 3, 21, 14),
                end: at(2024, 3, 24, 9),
            },
        );
        let matching: Vec<NaiveDate> = grid
            .cells()
            .iter()
            .filter(|c| occurs_on(&it, c))
            .map(|c| c.civil)
            .collect();
        let expect: Vec<NaiveDate> = (21..=24)
            .map(|d| NaiveDate::from_ymd_opt(2024, 3, d).unwrap())
            .collect();
        assert_eq!(matching, expect);
    }

    #[test]
    fn range_clipped_by_grid_window() {
        let grid = farvardin_grid();
        // Starts well before the window, ends on its second day
        let it = item(
            "i1",
            Occurrence::Range {
                start: at(2024, 1, 1, 0),
                end: at(2024, 3, 17, 12),
            },
        );
        let count = grid.cells().iter().filter(|c| occurs_on(&it, c)).count();
        // Window opens on 2024-03-16 (Saturday before Nowruz)
        assert_eq!(count, 2);
    }

    #[test]
    fn index_preserves_collection_order_per_day() {
        let grid = farvardin_grid();
        let items = vec![
            item("a", Occurrence::Point(at(2024, 3, 22, 18))),
            item(
                "b",
                Occurrence::Range {
                    start: at(2024, 3, 20, 0),
                    end: at(2024, 3, 23, 0),
                },
            ),
            item("c", Occurrence::Point(at(2024, 3, 22, 8))),
        ];
        let index = DayIndex::build(&items, &grid);

        let day = NaiveDate::from_ymd_opt(2024, 3, 22).unwrap();
        let ids: Vec<&str> = index
            .items_on_day(day)
            .iter()
            .map(|it| it.id.as_str())
            .collect();
        // Collection order, not chronological order
        assert_eq!(ids, ["a", "b", "c"]);

        // The range item shows up on each covered day
        for d in 20..=23 {
            let day = NaiveDate::from_ymd_opt(2024, 3, d).unwrap();
            assert!(
                index
                    .items_on_day(day)
                    .iter()
                    .any(|it| it.id == "b")
            );
        }

        let empty = NaiveDate::from_ymd_opt(2024, 4, 10).unwrap();
        assert!(index.items_on_day(empty).is_empty());
    }
}
