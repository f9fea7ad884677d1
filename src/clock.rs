//! The clock loop: calendar redraw on day change, in-place time line.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use crate::calendar::CalendarSystem;
use crate::formatter::render_calendar;
use crate::types::{BLANK_BATCHES, BLANK_LINES_PER_BATCH, Moment, YearScheme};

static INTERRUPTED: AtomicBool = AtomicBool::new(false);

extern "C" fn handle_sigint(_signal: libc::c_int) {
    INTERRUPTED.store(true, Ordering::SeqCst);
}

/// Route SIGINT to a flag the clock loop polls between ticks, so an
/// interrupt unwinds the loop cleanly instead of killing the process
/// with the cursor still hidden.
pub fn install_interrupt_handler() {
    let handler: extern "C" fn(libc::c_int) = handle_sigint;
    unsafe {
        libc::signal(libc::SIGINT, handler as libc::sighandler_t);
    }
}

fn interrupted() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}

/// Scroll the previous day's calendar out of the visible terminal area.
fn print_blank_screen(out: &mut impl Write) -> io::Result<()> {
    for _ in 0..BLANK_BATCHES {
        writeln!(out, "{}", "\n".repeat(BLANK_LINES_PER_BATCH))?;
    }
    Ok(())
}

/// Convert a 24-hour value to (12-hour value, am/pm suffix).
fn twelve_hour(hour: u32) -> (u32, &'static str) {
    let meridiem = if hour < 12 { "am" } else { "pm" };
    let hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    (hour, meridiem)
}

/// Format the in-place time line: carriage return, calendar-specific
/// indent, 12-hour time, and a trailing pad. Single-digit hours get one
/// extra leading space so the line width never shifts.
pub fn format_time_line(moment: &Moment, system: &dyn CalendarSystem) -> String {
    let (indent, tail) = system.time_line_indent();
    let (hour, meridiem) = twelve_hour(moment.hour);
    let pad = indent + usize::from(hour < 10);
    format!(
        "\r{}{}:{:02} {}{}",
        " ".repeat(pad),
        hour,
        moment.minute,
        meridiem,
        " ".repeat(tail)
    )
}

/// Run the clock until interrupted.
///
/// Redraw state: flood the screen blank, draw the calendar for the
/// freshly read moment, and emit a separator line. Tick state: rewrite
/// the time line in place, then sleep in one-second steps until the
/// minute advances. A change in the moment's day re-enters Redraw; the
/// interrupt flag is the only exit, observed at the next wake-up.
pub fn run(
    out: &mut impl Write,
    system: &dyn CalendarSystem,
    scheme: YearScheme,
) -> io::Result<()> {
    loop {
        let drawn = system.current_moment();
        print_blank_screen(out)?;
        writeln!(out, "{}", render_calendar(&drawn, system, scheme))?;
        writeln!(out)?;

        let mut current = drawn;
        while current.day == drawn.day {
            write!(out, "{}", format_time_line(&current, system))?;
            out.flush()?;

            let shown = current;
            while shown.minute == current.minute {
                if interrupted() {
                    return Ok(());
                }
                thread::sleep(Duration::from_secs(1));
                current = system.current_moment();
            }
        }
    }
}
