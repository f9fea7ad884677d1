//! Discordian calendar date math.
//!
//! Five seasons of 73 days each, a five-day week, and St. Tib's Day
//! inserted every leap year between Chaos 59 and Chaos 60.

use chrono::{Datelike, NaiveDate};

/// Season names in year order.
pub const SEASONS: [&str; 5] = [
    "Chaos",
    "Discord",
    "Confusion",
    "Bureaucracy",
    "The Aftermath",
];

/// Weekday names in week order.
pub const WEEKDAYS: [&str; 5] = [
    "Sweetmorn",
    "Boomtime",
    "Pungenday",
    "Prickle-Prickle",
    "Setting Orange",
];

/// Two-letter weekday abbreviations in week order.
pub const WEEKDAY_ABBREVS: [&str; 5] = ["Sw", "Bo", "Pu", "Pr", "Se"];

/// Offset between a Gregorian year and the Year of Our Lady of Discord.
pub const YOLD_OFFSET: i32 = 1166;

/// Days per season.
pub const SEASON_LENGTH: u32 = 73;

/// Days per week.
pub const WEEK_LENGTH: usize = 5;

/// A Gregorian date expressed in the Discordian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscordianDate {
    /// Year of Our Lady of Discord.
    pub year: i32,
    /// Season index, 0 (Chaos) through 4 (The Aftermath).
    pub season: usize,
    /// Day within the season, 1-73.
    pub day_of_season: u32,
    /// Weekday index, 0 (Sweetmorn) through 4 (Setting Orange).
    pub weekday: usize,
    /// Whether the source date was St. Tib's Day (29 February).
    pub st_tibs: bool,
}

impl DiscordianDate {
    /// Convert a Gregorian date.
    ///
    /// The leap day is excised from the season count, so St. Tib's Day
    /// shares Chaos 60 with 1 March.
    pub fn from_gregorian(date: NaiveDate) -> Self {
        let leap = date.leap_year();
        let ordinal = date.ordinal();
        let st_tibs = leap && ordinal == 60;
        let yday = if leap && ordinal > 60 {
            ordinal - 2
        } else {
            ordinal - 1
        };
        DiscordianDate {
            year: date.year() + YOLD_OFFSET,
            season: (yday / SEASON_LENGTH) as usize,
            day_of_season: yday % SEASON_LENGTH + 1,
            weekday: (yday % WEEK_LENGTH as u32) as usize,
            st_tibs,
        }
    }

    /// Full weekday name.
    pub fn weekday_name(&self) -> &'static str {
        WEEKDAYS[self.weekday]
    }

    /// Full season name.
    pub fn season_name(&self) -> &'static str {
        SEASONS[self.season]
    }
}

/// Weekday index of the first day of a season.
///
/// 365 = 5 x 73, so every season starts on a fixed weekday.
pub fn season_first_weekday(season: usize) -> usize {
    season * SEASON_LENGTH as usize % WEEK_LENGTH
}
