//! Type definitions and constants for calendar-clock rendering.

/// Which period a grid cell's day number belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Day carried in from the previous month or season.
    Previous,
    /// Day of the displayed period.
    Current,
    /// Day carried in from the next month or season.
    Next,
}

/// Highlight classification applied to a cell for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    None,
    Today,
    Past,
}

/// Whether a short grid row is the first or the final week of its period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowPosition {
    Leading,
    Trailing,
}

/// A single day cell in the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub value: u32,
    pub origin: Origin,
    pub emphasis: Emphasis,
}

impl Cell {
    /// A current-period cell, not yet classified.
    pub fn current(value: u32) -> Self {
        Cell {
            value,
            origin: Origin::Current,
            emphasis: Emphasis::None,
        }
    }

    /// An adjacent-period cell injected by the grid filler. Filled cells
    /// never carry today/past emphasis.
    pub fn filled(value: u32, origin: Origin) -> Self {
        Cell {
            value,
            origin,
            emphasis: Emphasis::None,
        }
    }
}

/// Snapshot of the current date and time as seen through a calendar system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Moment {
    pub year: i32,
    /// Period index: month (1-12) for Gregorian, season (0-4) for alternates.
    pub month: u32,
    /// Host-clock day of month; the day-rollover key for the clock loop.
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    /// 0-based index into the calendar's week.
    pub weekday: usize,
    /// Day number highlighted in the grid: day of month or day of season.
    pub day_of_period: u32,
}

/// Year display scheme for the calendar header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YearScheme {
    #[default]
    Plain,
    /// EVE Online in-game years ("YC n").
    EveGame,
    /// EVE Online timeline mapped onto the real year.
    EveReal,
}

impl YearScheme {
    /// Render a calendar year under this scheme.
    pub fn display(self, year: i32) -> String {
        match self {
            YearScheme::Plain => year.to_string(),
            YearScheme::EveGame => format!("YC {}", year - 1900),
            YearScheme::EveReal => (23236 + (year - 1900)).to_string(),
        }
    }
}

// ANSI escape sequences
pub const COLOR_TODAY: &str = "\x1b[94m";
pub const COLOR_PAST: &str = "\x1b[31m";
pub const COLOR_OTHER_MONTH: &str = "\x1b[36m";
pub const COLOR_RESET: &str = "\x1b[0m";
pub const CURSOR_HIDE: &str = "\x1b[?25l";
pub const CURSOR_SHOW: &str = "\x1b[?25h";

// Blank output emitted before each calendar redraw; enough to scroll the
// previous day out of the visible terminal area.
pub const BLANK_BATCHES: usize = 420;
pub const BLANK_LINES_PER_BATCH: usize = 10;
