use anyhow::Result;
use owo_colors::OwoColorize;
use taqvim_core::{
    CalendarSystem, Clock, DayIndex, ItemKind, Jalali, MonthGrid, MonthRef, SystemClock,
    occurs_on,
};

use super::parse_month;
use crate::render::kind_dot;
use crate::store::Store;

pub fn run(store: &Store, month: Option<&str>, week_start: Option<u32>) -> Result<()> {
    let system = Jalali;
    let clock = SystemClock;

    let month = match month {
        Some(s) => parse_month(s)?,
        None => MonthRef::current(&system, &clock)?,
    };
    let week_start = week_start.unwrap_or_else(|| system.default_week_start()) % 7;
    let today = clock.now().date();

    let grid = MonthGrid::build(&system, month, week_start, today)?;
    let index = DayIndex::build(store.items(), &grid);

    println!(
        "{} {}",
        system.month_name(month.month)?.bold(),
        month.year.bold()
    );

    let header: String = (0..7)
        .map(|i| format!("{:>4}", system.weekday_short_name(week_start + i)))
        .collect();
    println!("{}", header.dimmed());

    for week in grid.weeks() {
        let mut row = String::new();
        for cell in week {
            let marker = if index.count_on(cell) > 0 { '*' } else { ' ' };
            let text = format!("{:>3}{}", cell.date.day, marker);
            let styled = if cell.is_today {
                text.bold().underline().to_string()
            } else if !cell.in_reference_month {
                text.dimmed().to_string()
            } else {
                text
            };
            row.push_str(&styled);
        }
        println!("{row}");
    }

    let in_month = store
        .items()
        .iter()
        .filter(|item| {
            grid.cells()
                .iter()
                .any(|cell| cell.in_reference_month && occurs_on(item, cell))
        })
        .count();
    let legend: String = ItemKind::ALL
        .iter()
        .map(|kind| format!("{} {}  ", kind_dot(*kind), kind.label()))
        .collect();
    println!();
    println!("{legend}");
    println!("{}", format!("{in_month} item(s) this month").dimmed());

    Ok(())
}
