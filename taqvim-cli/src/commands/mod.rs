//! CLI subcommands and shared Jalali parse/format helpers.

pub mod add;
pub mod agenda;
pub mod edit;
pub mod remove;
pub mod upcoming;
pub mod view;

use anyhow::{Context, Result, anyhow, bail};
use chrono::{NaiveDateTime, NaiveTime, Timelike};
use taqvim_core::{
    CalendarSystem, ItemKind, Jalali, MonthRef, Occurrence, Stage,
};

/// Parse a Jalali month argument, "YYYY-MM".
pub fn parse_month(s: &str) -> Result<MonthRef> {
    let (year, month) = s
        .split_once('-')
        .ok_or_else(|| anyhow!("Invalid month '{}'. Expected YYYY-MM", s))?;
    let year: i32 = year
        .parse()
        .with_context(|| format!("Invalid year in '{}'", s))?;
    let month: u32 = month
        .parse()
        .with_context(|| format!("Invalid month in '{}'", s))?;
    Ok(MonthRef::new(year, month)?)
}

/// Parse a Jalali date or date-time argument, "YYYY-MM-DD" or
/// "YYYY-MM-DDTHH:MM". Dates without a time land at midnight.
pub fn parse_jalali_datetime(s: &str) -> Result<NaiveDateTime> {
    let (date_part, time_part) = match s.split_once('T') {
        Some((d, t)) => (d, Some(t)),
        None => (s, None),
    };

    let mut fields = date_part.split('-');
    let (year, month, day) = match (fields.next(), fields.next(), fields.next(), fields.next()) {
        (Some(y), Some(m), Some(d), None) => (y, m, d),
        _ => bail!("Invalid date '{}'. Expected YYYY-MM-DD[THH:MM]", s),
    };
    let year: i32 = year
        .parse()
        .with_context(|| format!("Invalid year in '{}'", s))?;
    let month: u32 = month
        .parse()
        .with_context(|| format!("Invalid month in '{}'", s))?;
    let day: u32 = day
        .parse()
        .with_context(|| format!("Invalid day in '{}'", s))?;

    let civil = Jalali.from_calendar_date(&Jalali.date(year, month, day))?;

    let time = match time_part {
        Some(t) => NaiveTime::parse_from_str(t, "%H:%M")
            .with_context(|| format!("Invalid time '{}'. Expected HH:MM", t))?,
        None => NaiveTime::MIN,
    };

    Ok(civil.and_time(time))
}

pub fn parse_kind(s: &str) -> Result<ItemKind> {
    match normalize(s).as_str() {
        "meeting" => Ok(ItemKind::Meeting),
        "assignment" => Ok(ItemKind::Assignment),
        "deadline" => Ok(ItemKind::Deadline),
        "event" => Ok(ItemKind::Event),
        _ => bail!("Unknown kind '{}'. Expected meeting, assignment, deadline or event", s),
    }
}

pub fn parse_stage(s: &str) -> Result<Stage> {
    match normalize(s).as_str() {
        "registered" => Ok(Stage::Registered),
        "in review" => Ok(Stage::InReview),
        "returned for revision" => Ok(Stage::ReturnedForRevision),
        "preliminary approval" => Ok(Stage::PreliminaryApproval),
        "certificate issued" => Ok(Stage::CertificateIssued),
        _ => bail!("Unknown stage '{}'", s),
    }
}

fn normalize(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .replace(['-', '_'], " ")
}

/// Format an instant as a Jalali date, with the time appended when it is not
/// midnight.
pub fn format_datetime(t: NaiveDateTime) -> Result<String> {
    let date = Jalali.to_calendar_date(t.date())?;
    if t.time() == NaiveTime::MIN {
        Ok(date.to_string())
    } else {
        Ok(format!("{} {:02}:{:02}", date, t.hour(), t.minute()))
    }
}

pub fn format_occurrence(occurrence: &Occurrence) -> Result<String> {
    match occurrence {
        Occurrence::Point(t) => format_datetime(*t),
        Occurrence::Range { start, end } => Ok(format!(
            "{} -> {}",
            format_datetime(*start)?,
            format_datetime(*end)?
        )),
    }
}

/// Build an occurrence from the `--date` / `--start` / `--end` flags.
/// `None` when no flag was passed (keep the draft's current occurrence).
pub fn occurrence_from_flags(
    date: Option<&str>,
    start: Option<&str>,
    end: Option<&str>,
) -> Result<Option<Occurrence>> {
    match (date, start, end) {
        (Some(d), None, None) => Ok(Some(Occurrence::Point(parse_jalali_datetime(d)?))),
        (None, Some(s), Some(e)) => Ok(Some(Occurrence::Range {
            start: parse_jalali_datetime(s)?,
            end: parse_jalali_datetime(e)?,
        })),
        (None, None, None) => Ok(None),
        _ => bail!("Pass either --date or both --start and --end"),
    }
}
