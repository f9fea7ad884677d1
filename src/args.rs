//! Command-line argument parsing using clap.
//!
//! One optional flag picks an alternate calendar; picking more than one
//! is a usage error reported before the clock starts.

use clap::Parser;

use crate::calendar::{CalendarSystem, Gregorian};
use crate::types::YearScheme;

#[derive(Parser, Debug)]
#[command(name = "dateandtime")]
#[command(about = "A little clock to tell the date & time", long_about = None)]
#[command(version)]
#[command(after_help = HELP_MESSAGE)]
pub struct Args {
    /// Show the Discordian calendar.
    #[cfg(feature = "discordian")]
    #[arg(
        short = 'd',
        long = "discordian",
        visible_alias = "discord",
        alias = "discordianism",
        help_heading = "Alternate calendars"
    )]
    pub discordian: bool,

    /// Show the EVE Online in-game calendar (YC years).
    #[arg(
        short = 'e',
        long = "eve",
        visible_alias = "eve-game",
        help_heading = "Alternate calendars"
    )]
    pub eve_game: bool,

    /// Show the EVE Online calendar with real-timeline years.
    #[arg(
        short = 'r',
        long = "eve-real",
        visible_alias = "eve-is-real",
        help_heading = "Alternate calendars"
    )]
    pub eve_real: bool,
}

/// Help message displayed with --help.
const HELP_MESSAGE: &str = "Without any flags, display the current Gregorian month.

Alternate calendars (usage flags):
  Discordian: [-d, --discord, --discordian, --discordianism]
  Eve (game): [-e, --eve, --eve-game]
  Eve (real): [-r, --eve-real, --eve-is-real]";

impl Args {
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Whether the Discordian calendar was requested. Always false when
    /// the `discordian` feature (and its date-math crate) is absent; the
    /// flag itself does not exist then, so the choice fails closed at
    /// parse time.
    pub fn wants_discordian(&self) -> bool {
        #[cfg(feature = "discordian")]
        {
            self.discordian
        }
        #[cfg(not(feature = "discordian"))]
        {
            false
        }
    }
}

/// Resolved clock configuration: the calendar system and year scheme.
pub struct ClockConfig {
    pub system: Box<dyn CalendarSystem>,
    pub scheme: YearScheme,
}

impl std::fmt::Debug for ClockConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClockConfig")
            .field("scheme", &self.scheme)
            .finish_non_exhaustive()
    }
}

impl ClockConfig {
    pub fn new(args: &Args) -> Result<Self, String> {
        let mut selected: Vec<&str> = Vec::new();
        if args.wants_discordian() {
            selected.push("discordian");
        }
        if args.eve_game {
            selected.push("eve game");
        }
        if args.eve_real {
            selected.push("eve real");
        }

        if selected.len() > 1 {
            return Err(conflict_message(&selected));
        }

        #[cfg(feature = "discordian")]
        {
            if args.wants_discordian() {
                return Ok(ClockConfig {
                    system: Box::new(crate::discordian::Discordian),
                    scheme: YearScheme::Plain,
                });
            }
        }

        let scheme = if args.eve_game {
            YearScheme::EveGame
        } else if args.eve_real {
            YearScheme::EveReal
        } else {
            YearScheme::Plain
        };

        Ok(ClockConfig {
            system: Box::new(Gregorian),
            scheme,
        })
    }
}

/// Build the mutually-exclusive-calendars error message: the selected
/// calendar names joined with commas and a final "and", ending ":/" for
/// two conflicts and ":(" for three.
pub fn conflict_message(names: &[&str]) -> String {
    let list = match names {
        [rest @ .., last] if !rest.is_empty() => format!("{} and {}", rest.join(", "), last),
        _ => names.join(""),
    };
    let face = if names.len() > 2 { ":(" } else { ":/" };
    format!(
        "Please limit yourself to a single calendar.\nI cannot display {} at the same time {}",
        list, face
    )
}
