use anyhow::Result;
use owo_colors::OwoColorize;
use taqvim_core::{CalendarSystem, Jalali, occurs_on_day};

use super::{format_occurrence, parse_jalali_datetime};
use crate::render::{Render, kind_dot};
use crate::store::Store;

pub fn run(store: &Store, date: &str) -> Result<()> {
    let day = parse_jalali_datetime(date)?.date();
    let jdate = Jalali.to_calendar_date(day)?;
    let weekday = Jalali.weekday_short_name(Jalali.weekday_index(day));
    println!("{} ({})", jdate.to_string().bold(), weekday);

    let items: Vec<_> = store
        .items()
        .iter()
        .filter(|item| occurs_on_day(item, day))
        .collect();

    if items.is_empty() {
        println!("{}", "No items on this day".dimmed());
        return Ok(());
    }

    for item in items {
        println!(
            "{} {} {}",
            kind_dot(item.kind),
            item.title.bold(),
            format!("({})", item.kind.label()).dimmed()
        );
        println!("   {}", format_occurrence(&item.occurrence)?);
        if let Some(id) = &item.project_id {
            let label = match store.project(id) {
                Some(p) => format!("{} ({})", p.title, p.code),
                None => format!("unknown ({id})"),
            };
            println!("   project: {label}");
        }
        if let Some(id) = &item.person_id {
            let label = match store.person(id) {
                Some(p) => format!("{} ({})", p.name, p.role),
                None => format!("unknown ({id})"),
            };
            println!("   owner: {label}");
        }
        if let Some(stage) = item.stage {
            println!("   stage: {}", stage.render());
        }
        if let Some(note) = &item.note {
            println!("   {}", note.dimmed());
        }
    }

    Ok(())
}
