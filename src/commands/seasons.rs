//! Seasons command: print the selectable season years.

use std::io::{self, Write};

use crate::{Result, SeasonRange};

pub fn handle_seasons() -> Result<()> {
    let mut out = io::stdout().lock();
    write_seasons(&mut out, SeasonRange::current())?;
    out.flush()?;
    Ok(())
}

/// One year per line, newest first; the first line is the default.
pub fn write_seasons<W: Write>(out: &mut W, range: SeasonRange) -> Result<()> {
    for season in range.seasons() {
        if season == range.default_season() {
            writeln!(out, "{season} (default)")?;
        } else {
            writeln!(out, "{season}")?;
        }
    }
    Ok(())
}
