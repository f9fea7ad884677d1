//! Discordian calendar support, backed by the `ddate` crate.
//!
//! The core never does Discordian epoch math; it adapts what `ddate`
//! reports into the [`CalendarSystem`] shape.

use chrono::{Datelike, Timelike};
use ddate::{DiscordianDate, SEASON_LENGTH, SEASONS, WEEK_LENGTH, WEEKDAY_ABBREVS};

use crate::calendar::{CalendarSystem, build_raw_grid, now_local};
use crate::types::Moment;

const FINAL_WEEK_DAYS: [u32; 4] = [70, 71, 72, 73];

/// Five seasons of 73 days on a five-day week.
pub struct Discordian;

impl CalendarSystem for Discordian {
    fn current_moment(&self) -> Moment {
        let now = now_local();
        let disco = DiscordianDate::from_gregorian(now.date());
        Moment {
            year: disco.year,
            month: disco.season as u32,
            // Rollover keys on the host clock, so St. Tib's Day sharing
            // Chaos 60 with 1 March never stalls the redraw.
            day: now.day(),
            hour: now.hour(),
            minute: now.minute(),
            weekday: disco.weekday,
            day_of_period: disco.day_of_season,
        }
    }

    fn week_length(&self) -> usize {
        WEEK_LENGTH
    }

    fn max_header_width(&self) -> usize {
        14
    }

    fn period_name(&self, moment: &Moment) -> String {
        SEASONS[moment.month as usize].to_string()
    }

    fn weekday_abbreviations(&self) -> &'static [&'static str] {
        &WEEKDAY_ABBREVS
    }

    fn raw_month_grid(&self, moment: &Moment) -> Vec<Vec<u32>> {
        let offset = ddate::season_first_weekday(moment.month as usize);
        build_raw_grid(offset, SEASON_LENGTH, WEEK_LENGTH)
    }

    fn final_week_days(&self) -> &'static [u32] {
        &FINAL_WEEK_DAYS
    }

    fn previous_period_last_day(&self, _moment: &Moment) -> u32 {
        SEASON_LENGTH
    }

    fn time_line_indent(&self) -> (usize, usize) {
        (3, 2)
    }
}
