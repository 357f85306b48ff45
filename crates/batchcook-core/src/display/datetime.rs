//! Clock and duration display utilities.

use std::fmt;

use jiff::civil::Time;

use crate::schedule::format_duration;

/// A wrapper around a civil `Time` that displays as `HH:MM`.
pub struct ClockTime<'a>(pub &'a Time);

impl<'a> fmt::Display for ClockTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%H:%M"))
    }
}

/// A number of minutes displayed the kitchen way (`45 min`, `1h`, `2h05`).
pub struct Minutes(pub u32);

impl fmt::Display for Minutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_duration(self.0))
    }
}
