//! Terminal calendar clock.
//!
//! # Usage
//! ```ignore
//! dateandtime       // Gregorian calendar
//! dateandtime -d    // Discordian calendar
//! dateandtime -e    // EVE Online in-game years
//! dateandtime -r    // EVE Online real-timeline years
//! ```

use std::io::{self, Write};

use dateandtime::args::{Args, ClockConfig};
use dateandtime::clock;
use dateandtime::types::{CURSOR_HIDE, CURSOR_SHOW};

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), String> {
    let config = ClockConfig::new(args)?;

    clock::install_interrupt_handler();

    let mut out = io::stdout();
    write!(out, "{}", CURSOR_HIDE).map_err(|e| e.to_string())?;

    let result = clock::run(&mut out, config.system.as_ref(), config.scheme);

    // Restore the cursor on every exit path, clean or not.
    let _ = writeln!(out, "{}", CURSOR_SHOW);
    let _ = out.flush();

    result.map_err(|e| e.to_string())
}
