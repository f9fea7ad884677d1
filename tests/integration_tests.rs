//! Process-level tests for the CLI surface: usage errors must exit before
//! the clock loop starts, and help must print without entering it.

use assert_cmd::Command;
use predicates::prelude::*;

fn dateandtime() -> Command {
    Command::cargo_bin("dateandtime").unwrap()
}

// ---------------------------------------------------------------------------
// Conflicting calendar flags
// ---------------------------------------------------------------------------

#[test]
fn two_conflicting_calendars_exit_nonzero() {
    dateandtime()
        .args(["-r", "-e"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Please limit yourself to a single calendar.",
        ))
        .stderr(predicate::str::contains(
            "I cannot display eve game and eve real at the same time :/",
        ));
}

#[cfg(feature = "discordian")]
#[test]
fn discordian_and_eve_real_conflict() {
    dateandtime()
        .args(["-r", "-d"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "I cannot display discordian and eve real at the same time :/",
        ));
}

#[cfg(feature = "discordian")]
#[test]
fn three_conflicting_calendars_get_the_long_list() {
    dateandtime()
        .args(["-r", "-e", "-d"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "I cannot display discordian, eve game and eve real at the same time :(",
        ));
}

// ---------------------------------------------------------------------------
// Help and bad flags
// ---------------------------------------------------------------------------

#[test]
fn help_prints_usage_and_exits_clean() {
    dateandtime()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Alternate calendars"))
        .stdout(predicate::str::contains("--eve-real"));
}

#[test]
fn unknown_flag_is_a_usage_error() {
    dateandtime().arg("--lunar").assert().failure();
}
