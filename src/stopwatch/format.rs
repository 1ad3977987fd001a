//! Digital display formatting.
//!
//! Elapsed time is rendered as `HH:MM:SS:CC` where `CC` is hundredths of a
//! second. Hours are cumulative and never wrap, so 100+ hours widens the
//! first field instead of rolling over.

use super::Millis;
use std::fmt::Write;

const MS_PER_HOUR: Millis = 3_600_000;
const MS_PER_MINUTE: Millis = 60_000;
const MS_PER_SECOND: Millis = 1_000;

/// The four display fields of an elapsed duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayTime {
    pub hours: Millis,
    pub minutes: Millis,
    pub seconds: Millis,
    pub hundredths: Millis,
}

impl DisplayTime {
    pub fn from_millis(elapsed: Millis) -> Self {
        Self {
            hours: elapsed / MS_PER_HOUR,
            minutes: (elapsed / MS_PER_MINUTE) % 60,
            seconds: (elapsed / MS_PER_SECOND) % 60,
            hundredths: (elapsed % MS_PER_SECOND) / 10,
        }
    }
}

impl std::fmt::Display for DisplayTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds, self.hundredths
        )
    }
}

/// Format elapsed milliseconds as `HH:MM:SS:CC`.
pub fn format_elapsed(elapsed: Millis) -> String {
    let mut out = String::with_capacity(11);
    write_elapsed(&mut out, elapsed);
    out
}

/// Same as [`format_elapsed`], reusing `buf`'s allocation.
pub fn write_elapsed(buf: &mut String, elapsed: Millis) {
    buf.clear();
    let _ = write!(buf, "{}", DisplayTime::from_millis(elapsed));
}
