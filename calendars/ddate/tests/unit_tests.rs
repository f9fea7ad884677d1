//! Unit tests for Discordian date conversion.

use chrono::NaiveDate;
use ddate::{DiscordianDate, SEASONS, WEEKDAY_ABBREVS, WEEKDAYS, season_first_weekday};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

// ---------------------------------------------------------------------------
// Conversion from Gregorian
// ---------------------------------------------------------------------------

#[test]
fn new_year_is_chaos_1_sweetmorn() {
    let d = DiscordianDate::from_gregorian(date(2021, 1, 1));
    assert_eq!(d.year, 3187);
    assert_eq!(d.season, 0);
    assert_eq!(d.day_of_season, 1);
    assert_eq!(d.weekday, 0);
    assert!(!d.st_tibs);
}

#[test]
fn year_end_is_aftermath_73_setting_orange() {
    let d = DiscordianDate::from_gregorian(date(2021, 12, 31));
    assert_eq!(d.season, 4);
    assert_eq!(d.day_of_season, 73);
    assert_eq!(d.weekday, 4);
}

#[test]
fn leap_year_end_unchanged() {
    // The excised leap day must not shift the rest of the year.
    let d = DiscordianDate::from_gregorian(date(2024, 12, 31));
    assert_eq!(d.season, 4);
    assert_eq!(d.day_of_season, 73);
    assert_eq!(d.weekday, 4);
}

#[test]
fn season_boundaries() {
    // 15 March is Chaos 73/74; the next day starts Discord.
    let last_chaos = DiscordianDate::from_gregorian(date(2021, 3, 14));
    assert_eq!(last_chaos.season, 0);
    assert_eq!(last_chaos.day_of_season, 73);

    let first_discord = DiscordianDate::from_gregorian(date(2021, 3, 15));
    assert_eq!(first_discord.season, 1);
    assert_eq!(first_discord.day_of_season, 1);
}

#[test]
fn yold_offset() {
    assert_eq!(DiscordianDate::from_gregorian(date(2021, 6, 1)).year, 3187);
    assert_eq!(DiscordianDate::from_gregorian(date(1970, 1, 1)).year, 3136);
}

// ---------------------------------------------------------------------------
// St. Tib's Day
// ---------------------------------------------------------------------------

#[test]
fn st_tibs_day_detected() {
    let d = DiscordianDate::from_gregorian(date(2024, 2, 29));
    assert!(d.st_tibs);
    assert_eq!(d.season, 0);
    assert_eq!(d.day_of_season, 60);
}

#[test]
fn march_1_is_chaos_60_in_any_year() {
    let leap = DiscordianDate::from_gregorian(date(2024, 3, 1));
    let common = DiscordianDate::from_gregorian(date(2023, 3, 1));
    assert_eq!(leap.season, 0);
    assert_eq!(leap.day_of_season, 60);
    assert_eq!(common.season, 0);
    assert_eq!(common.day_of_season, 60);
    assert!(!leap.st_tibs);
}

#[test]
fn feb_29_only_flagged_on_leap_years() {
    let d = DiscordianDate::from_gregorian(date(2023, 3, 1));
    assert!(!d.st_tibs);
}

// ---------------------------------------------------------------------------
// Week structure
// ---------------------------------------------------------------------------

#[test]
fn weekday_cycles_every_five_days() {
    let base = DiscordianDate::from_gregorian(date(2021, 1, 1));
    let next_week = DiscordianDate::from_gregorian(date(2021, 1, 6));
    assert_eq!(base.weekday, next_week.weekday);
}

#[test]
fn season_first_weekday_cycle() {
    // 73 mod 5 = 3, so each season starts three weekdays after the last.
    assert_eq!(season_first_weekday(0), 0);
    assert_eq!(season_first_weekday(1), 3);
    assert_eq!(season_first_weekday(2), 1);
    assert_eq!(season_first_weekday(3), 4);
    assert_eq!(season_first_weekday(4), 2);
}

#[test]
fn first_weekday_matches_conversion() {
    // Discord 1 in 2021 is 15 March; its weekday must agree with the
    // season_first_weekday table.
    let d = DiscordianDate::from_gregorian(date(2021, 3, 15));
    assert_eq!(d.weekday, season_first_weekday(1));
}

// ---------------------------------------------------------------------------
// Name tables
// ---------------------------------------------------------------------------

#[test]
fn name_tables_sized_for_the_week() {
    assert_eq!(SEASONS.len(), 5);
    assert_eq!(WEEKDAYS.len(), 5);
    assert_eq!(WEEKDAY_ABBREVS.len(), 5);
}

#[test]
fn abbreviations_are_two_letters() {
    for (abbr, full) in WEEKDAY_ABBREVS.iter().zip(WEEKDAYS.iter()) {
        assert_eq!(abbr.len(), 2);
        assert!(full.starts_with(abbr));
    }
}

#[test]
fn names_accessible_from_date() {
    let d = DiscordianDate::from_gregorian(date(2021, 1, 1));
    assert_eq!(d.season_name(), "Chaos");
    assert_eq!(d.weekday_name(), "Sweetmorn");
}
