//! Grid classification, cross-period filling, and calendar rendering.

use unicode_width::UnicodeWidthStr;

use crate::calendar::CalendarSystem;
use crate::types::{
    COLOR_OTHER_MONTH, COLOR_PAST, COLOR_RESET, COLOR_TODAY, Cell, Emphasis, Moment, Origin,
    RowPosition, YearScheme,
};

/// Classify every cell of a raw month grid as today, past, or unmarked.
///
/// Runs before any cross-period filling, so every input cell belongs to
/// the current period. Cells scanned after the first `today` match stay
/// unmarked even if a duplicate value appears. If `today` is absent the
/// grid renders unhighlighted rather than failing.
pub fn apply_day_emphasis(raw: &[Vec<u32>], today: u32) -> Vec<Vec<Cell>> {
    let today_present = raw.iter().flatten().any(|&value| value == today);
    let mut before_today = today_present;
    raw.iter()
        .map(|row| {
            row.iter()
                .map(|&value| {
                    let mut cell = Cell::current(value);
                    if before_today {
                        if value == today {
                            cell.emphasis = Emphasis::Today;
                            before_today = false;
                        } else {
                            cell.emphasis = Emphasis::Past;
                        }
                    }
                    cell
                })
                .collect()
        })
        .collect()
}

/// Decide whether a short row is the leading or trailing week of its period.
///
/// A row holding any of the calendar's final-week day numbers is the last
/// week; every other short row is the first.
pub fn row_position(row: &[Cell], system: &dyn CalendarSystem) -> RowPosition {
    let finals = system.final_week_days();
    if row.iter().any(|cell| finals.contains(&cell.value)) {
        RowPosition::Trailing
    } else {
        RowPosition::Leading
    }
}

/// Complete a short leading or trailing week with day numbers from the
/// adjacent period.
///
/// Leading fill walks backward from the previous period's last day,
/// inserting at the front; trailing fill appends 1, 2, 3, ... The row
/// always reaches the calendar's week length.
pub fn fill_partial_row(row: &mut Vec<Cell>, system: &dyn CalendarSystem, moment: &Moment) {
    match row_position(row, system) {
        RowPosition::Leading => {
            let mut day = system.previous_period_last_day(moment);
            while row.len() < system.week_length() {
                row.insert(0, Cell::filled(day, Origin::Previous));
                day -= 1;
            }
        }
        RowPosition::Trailing => {
            let mut day = 0;
            while row.len() < system.week_length() {
                day += 1;
                row.push(Cell::filled(day, Origin::Next));
            }
        }
    }
}

/// Render one day cell, right-justified to two characters. Marked cells
/// are wrapped in their ANSI color/reset pair; unmarked current-period
/// cells stay bare.
pub fn format_cell(cell: &Cell) -> String {
    let day = format!("{:>2}", cell.value);
    let color = match (cell.origin, cell.emphasis) {
        (Origin::Current, Emphasis::Today) => COLOR_TODAY,
        (Origin::Current, Emphasis::Past) => COLOR_PAST,
        (Origin::Current, Emphasis::None) => return day,
        _ => COLOR_OTHER_MONTH,
    };
    format!("{}{}{}", color, day, COLOR_RESET)
}

/// Format the "{period} {year}" header, shortened and centered within the
/// calendar's maximum width.
///
/// When the line is too wide the period name is cut to three characters
/// and the width check retried once; no further shortening happens.
pub fn format_header(moment: &Moment, system: &dyn CalendarSystem, scheme: YearScheme) -> String {
    let max_width = system.max_header_width();
    let year = scheme.display(moment.year);
    let name = system.period_name(moment);
    let mut header = format!("{} {}", name, year);
    if header.width() > max_width {
        let short: String = name.chars().take(3).collect();
        header = format!("{} {}", short, year);
    }
    let pad = max_width.saturating_sub(header.width()) / 2;
    format!("{}{}", " ".repeat(pad), header)
}

/// Space-joined weekday abbreviation row, with no leading pad.
pub fn format_weekday_row(system: &dyn CalendarSystem) -> String {
    system.weekday_abbreviations().join(" ")
}

/// Render the full calendar block: header, weekday row, and the
/// classified, cross-period-filled day grid in chronological row order.
///
/// Pure with respect to its inputs; rendering the same moment twice
/// yields byte-identical output.
pub fn render_calendar(moment: &Moment, system: &dyn CalendarSystem, scheme: YearScheme) -> String {
    let raw = system.raw_month_grid(moment);
    let mut grid = apply_day_emphasis(&raw, moment.day_of_period);

    // A single-row grid is neither a leading nor a trailing week.
    let multi_row = grid.len() > 1;
    for row in &mut grid {
        if multi_row && row.len() < system.week_length() {
            fill_partial_row(row, system, moment);
        }
    }

    let mut lines = Vec::with_capacity(grid.len() + 2);
    lines.push(format_header(moment, system, scheme));
    lines.push(format_weekday_row(system));
    for row in &grid {
        lines.push(row.iter().map(format_cell).collect::<Vec<_>>().join(" "));
    }
    lines.join("\n")
}
