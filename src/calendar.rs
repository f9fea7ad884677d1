//! Calendar systems: the provider trait and the Gregorian implementation.

use chrono::{Datelike, Local, NaiveDateTime, Timelike};

use crate::types::Moment;

/// A pluggable calendar system behind the rendering pipeline.
///
/// Implementations supply the current date parts, the week shape, the
/// name tables, and the raw day-number grid; the formatter and clock
/// loop consume only this interface.
pub trait CalendarSystem {
    /// Read the current date and time through this calendar.
    fn current_moment(&self) -> Moment;

    /// Number of days in this calendar's week.
    fn week_length(&self) -> usize;

    /// Maximum width of the header line before the period name is shortened.
    fn max_header_width(&self) -> usize;

    /// Month or season name for the given moment.
    fn period_name(&self, moment: &Moment) -> String;

    /// Weekday abbreviations in week order.
    fn weekday_abbreviations(&self) -> &'static [&'static str];

    /// Day-number rows for the moment's period. The first and last rows
    /// may be shorter than the week length; middle rows never are.
    fn raw_month_grid(&self, moment: &Moment) -> Vec<Vec<u32>>;

    /// Day numbers that only ever appear in a period's final week. A short
    /// row containing one of these is the trailing week.
    fn final_week_days(&self) -> &'static [u32];

    /// Last day number of the period preceding the moment's, the starting
    /// point for leading fill.
    fn previous_period_last_day(&self, moment: &Moment) -> u32;

    /// (indent, tail) space counts around the time-of-day line.
    fn time_line_indent(&self) -> (usize, usize);
}

/// Read the wall clock, honoring `DATEANDTIME_TEST_TIME` for testing.
///
/// The override format is `%Y-%m-%d %H:%M`.
pub fn now_local() -> NaiveDateTime {
    if let Ok(test_time) = std::env::var("DATEANDTIME_TEST_TIME")
        && let Ok(dt) = NaiveDateTime::parse_from_str(&test_time, "%Y-%m-%d %H:%M")
    {
        return dt;
    }
    Local::now().naive_local()
}

/// Chunk a period's day numbers into week rows.
///
/// `offset` is the weekday index of day 1. The first row holds the days
/// left in its week; the last row holds whatever remains. Both may be
/// short, and both are exactly what the grid filler completes later.
pub fn build_raw_grid(offset: usize, period_days: u32, week_length: usize) -> Vec<Vec<u32>> {
    let mut rows = Vec::new();
    let mut row = Vec::with_capacity(week_length);
    let mut slot = offset;
    for day in 1..=period_days {
        row.push(day);
        slot += 1;
        if slot == week_length {
            rows.push(std::mem::take(&mut row));
            slot = 0;
        }
    }
    if !row.is_empty() {
        rows.push(row);
    }
    rows
}

/// The standard civil calendar with a Sunday-first week.
pub struct Gregorian;

/// Month names in year order.
pub const GREGORIAN_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Weekday abbreviations, Sunday first.
pub const GREGORIAN_WEEKDAY_ABBREVS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

const GREGORIAN_FINAL_WEEK_DAYS: [u32; 4] = [28, 29, 30, 31];

impl Gregorian {
    pub fn is_leap_year(year: i32) -> bool {
        (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
    }

    pub fn days_in_month(year: i32, month: u32) -> u32 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if Self::is_leap_year(year) => 29,
            2 => 28,
            _ => 30,
        }
    }

    /// Weekday of the first of a month via Zeller's congruence, as an
    /// offset from Sunday (0 = Sunday).
    pub fn first_weekday_offset(year: i32, month: u32) -> usize {
        let m = (if month < 3 { month + 12 } else { month }) as i32;
        let y = if month < 3 { year - 1 } else { year };
        let k = y % 100;
        let j = y / 100;
        let h = (1 + (13 * (m + 1)) / 5 + k + k / 4 + j / 4 - 2 * j).rem_euclid(7);
        // h: 0=Sat, 1=Sun, 2=Mon, ...
        ((h + 6) % 7) as usize
    }
}

impl CalendarSystem for Gregorian {
    fn current_moment(&self) -> Moment {
        let now = now_local();
        Moment {
            year: now.year(),
            month: now.month(),
            day: now.day(),
            hour: now.hour(),
            minute: now.minute(),
            weekday: now.weekday().num_days_from_sunday() as usize,
            day_of_period: now.day(),
        }
    }

    fn week_length(&self) -> usize {
        7
    }

    fn max_header_width(&self) -> usize {
        20
    }

    fn period_name(&self, moment: &Moment) -> String {
        GREGORIAN_MONTHS[(moment.month - 1) as usize].to_string()
    }

    fn weekday_abbreviations(&self) -> &'static [&'static str] {
        &GREGORIAN_WEEKDAY_ABBREVS
    }

    fn raw_month_grid(&self, moment: &Moment) -> Vec<Vec<u32>> {
        let offset = Self::first_weekday_offset(moment.year, moment.month);
        let days = Self::days_in_month(moment.year, moment.month);
        build_raw_grid(offset, days, self.week_length())
    }

    fn final_week_days(&self) -> &'static [u32] {
        &GREGORIAN_FINAL_WEEK_DAYS
    }

    fn previous_period_last_day(&self, moment: &Moment) -> u32 {
        let (year, month) = if moment.month == 1 {
            (moment.year - 1, 12)
        } else {
            (moment.year, moment.month - 1)
        };
        Self::days_in_month(year, month)
    }

    fn time_line_indent(&self) -> (usize, usize) {
        (6, 5)
    }
}
