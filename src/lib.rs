//! Terminal calendar clock with a pluggable alternate calendar.
//!
//! Features:
//! - Month calendar with today / past / adjacent-month highlighting
//! - Cross-month filling of partial first and last weeks
//! - In-place time-of-day line updated once a second
//! - Optional Discordian calendar (five-day week, 73-day seasons)

pub mod args;
pub mod calendar;
pub mod clock;
pub mod formatter;
pub mod types;

#[cfg(feature = "discordian")]
pub mod discordian;
