//! The arithmetic Jalali (Solar Hijri) calendar.
//!
//! Uses the 33-year-cycle breaks table rather than astronomical equinox
//! computation, which is exact over the table's span. Months 1-6 have 31
//! days, 7-11 have 30, Esfand has 29 (30 in leap years). Weeks run
//! Saturday through Friday.

use chrono::{Datelike, NaiveDate};

use crate::calendar::{CalendarDate, CalendarSystem, CalendarSystemId};
use crate::error::{ScheduleError, ScheduleResult};

pub const JALALI: CalendarSystemId = CalendarSystemId("jalali");

/// Jalali years where the cycle break points change. Years outside
/// `BREAKS[0]..BREAKS[last]` are rejected as unsupported.
const BREAKS: [i64; 20] = [
    -61, 9, 38, 199, 426, 686, 756, 818, 1111, 1181, 1210, 1635, 2060, 2097, 2192, 2262, 2324,
    2394, 2456, 3178,
];

const MONTH_NAMES: [&str; 12] = [
    "Farvardin",
    "Ordibehesht",
    "Khordad",
    "Tir",
    "Mordad",
    "Shahrivar",
    "Mehr",
    "Aban",
    "Azar",
    "Dey",
    "Bahman",
    "Esfand",
];

const WEEKDAY_SHORT: [&str; 7] = ["Sat", "Sun", "Mon", "Tue", "Wed", "Thu", "Fri"];

/// Offset between chrono's day count (days since 0001-01-01 CE = 1) and the
/// Julian Day number used by the conversion arithmetic.
const JDN_OFFSET: i64 = 1_721_425;

/// The Jalali calendar system.
#[derive(Debug, Clone, Copy, Default)]
pub struct Jalali;

impl CalendarSystem for Jalali {
    fn id(&self) -> CalendarSystemId {
        JALALI
    }

    fn to_calendar_date(&self, civil: NaiveDate) -> ScheduleResult<CalendarDate> {
        let (year, month, day) = d2j(civil_to_jdn(civil))?;
        Ok(CalendarDate {
            system: JALALI,
            year: year as i32,
            month: month as u32,
            day: day as u32,
        })
    }

    fn from_calendar_date(&self, date: &CalendarDate) -> ScheduleResult<NaiveDate> {
        if date.system != JALALI {
            return Err(ScheduleError::SystemMismatch {
                expected: JALALI,
                got: date.system,
            });
        }
        let len = self.days_in_month(date.year, date.month)?;
        if date.day == 0 || date.day > len {
            return Err(ScheduleError::InvalidDate {
                year: date.year,
                month: date.month,
                day: date.day,
            });
        }
        let jdn = j2d(date.year as i64, date.month as i64, date.day as i64)?;
        jdn_to_civil(jdn).ok_or(ScheduleError::UnsupportedYear(date.year))
    }

    fn days_in_month(&self, year: i32, month: u32) -> ScheduleResult<u32> {
        match month {
            1..=6 => Ok(31),
            7..=11 => Ok(30),
            12 => Ok(if is_leap_year(year as i64)? { 30 } else { 29 }),
            _ => Err(ScheduleError::InvalidMonth(month)),
        }
    }

    fn weekday_index(&self, civil: NaiveDate) -> u32 {
        // chrono counts Sun=0..Sat=6; shift so Sat=0..Fri=6
        (civil.weekday().num_days_from_sunday() + 1) % 7
    }

    fn default_week_start(&self) -> u32 {
        0 // Saturday
    }

    fn month_name(&self, month: u32) -> ScheduleResult<&'static str> {
        MONTH_NAMES
            .get(month.wrapping_sub(1) as usize)
            .copied()
            .ok_or(ScheduleError::InvalidMonth(month))
    }

    fn weekday_short_name(&self, index: u32) -> &'static str {
        WEEKDAY_SHORT[(index % 7) as usize]
    }
}

/// Whether a Jalali year has a 30-day Esfand.
pub fn is_leap_year(jy: i64) -> ScheduleResult<bool> {
    Ok(jal_cal(jy)?.leap == 0)
}

fn civil_to_jdn(civil: NaiveDate) -> i64 {
    i64::from(civil.num_days_from_ce()) + JDN_OFFSET
}

fn jdn_to_civil(jdn: i64) -> Option<NaiveDate> {
    i32::try_from(jdn - JDN_OFFSET)
        .ok()
        .and_then(NaiveDate::from_num_days_from_ce_opt)
}

struct JalCal {
    /// Years into the leap cycle; 0 means a leap year.
    leap: i64,
    /// Gregorian year containing the 1st of Farvardin.
    gy: i64,
    /// March day of that Gregorian year on which the Jalali year starts.
    march: i64,
}

/// Leap status and Nowruz date for a Jalali year, per the breaks table.
fn jal_cal(jy: i64) -> ScheduleResult<JalCal> {
    if jy < BREAKS[0] || jy >= BREAKS[BREAKS.len() - 1] {
        return Err(ScheduleError::UnsupportedYear(jy as i32));
    }

    let gy = jy + 621;
    let mut leap_j: i64 = -14;
    let mut jp = BREAKS[0];
    let mut jump = 0;

    for &jm in &BREAKS[1..] {
        jump = jm - jp;
        if jy < jm {
            break;
        }
        leap_j += jump / 33 * 8 + (jump % 33) / 4;
        jp = jm;
    }

    let mut n = jy - jp;
    leap_j += n / 33 * 8 + ((n % 33) + 3) / 4;
    if jump % 33 == 4 && jump - n == 4 {
        leap_j += 1;
    }

    let leap_g = gy / 4 - (gy / 100 + 1) * 3 / 4 - 150;
    let march = 20 + leap_j - leap_g;

    if jump - n < 6 {
        n = n - jump + (jump + 4) / 33 * 33;
    }
    let mut leap = ((n + 1) % 33 - 1) % 4;
    if leap == -1 {
        leap = 4;
    }

    Ok(JalCal { leap, gy, march })
}

/// Julian Day number of a Jalali date.
fn j2d(jy: i64, jm: i64, jd: i64) -> ScheduleResult<i64> {
    let r = jal_cal(jy)?;
    Ok(g2d(r.gy, 3, r.march) + (jm - 1) * 31 - jm / 7 * (jm - 7) + jd - 1)
}

/// Jalali date of a Julian Day number.
fn d2j(jdn: i64) -> ScheduleResult<(i64, i64, i64)> {
    let (gy, _, _) = d2g(jdn);
    let mut jy = gy - 621;
    let r = jal_cal(jy)?;
    let first_of_year = g2d(r.gy, 3, r.march);

    let mut k = jdn - first_of_year;
    if k >= 0 {
        if k <= 185 {
            // First six 31-day months
            return Ok((jy, 1 + k / 31, k % 31 + 1));
        }
        k -= 186;
    } else {
        // Previous Jalali year
        jy -= 1;
        k += 179;
        if r.leap == 1 {
            k += 1;
        }
    }
    Ok((jy, 7 + k / 30, k % 30 + 1))
}

/// Julian Day number of a proleptic Gregorian date.
fn g2d(gy: i64, gm: i64, gd: i64) -> i64 {
    let d = (gy + (gm - 8) / 6 + 100100) * 1461 / 4 + (153 * ((gm + 9) % 12) + 2) / 5 + gd
        - 34840408;
    d - (gy + 100100 + (gm - 8) / 6) / 100 * 3 / 4 + 752
}

/// Proleptic Gregorian date of a Julian Day number.
fn d2g(jdn: i64) -> (i64, i64, i64) {
    let mut j = 4 * jdn + 139361631;
    j += (4 * jdn + 183187720) / 146097 * 3 / 4 * 4 - 3908;
    let i = j % 1461 / 4 * 5 + 308;
    let gd = i % 153 / 5 + 1;
    let gm = i / 153 % 12 + 1;
    let gy = j / 1461 - 100100 + (8 - gm) / 6;
    (gy, gm, gd)
}
