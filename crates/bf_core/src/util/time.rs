//! Play-time and calendar timestamp formatting.
//!
//! The portable timestamp string (`yyyy-MM-dd-HH-mm-ss`, always GMT) is part
//! of the save/replay interchange format and must stay bit-for-bit stable.
//! Export never fails; import degrades softly, because a corrupted replay
//! header must not take the engine down with it.

use chrono::format::{parse, Parsed, StrftimeItems};
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

use crate::error::{Degraded, Soft};

/// Portable form, hyphen separated so it is filename-safe.
const PORTABLE_FORMAT: &str = "%Y-%m-%d-%H-%M-%S";

/// Human-readable display form.
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Play-time shown when no time has been recorded (negative sentinel input).
const NO_TIME: &str = "--:--.--";

/// Convert a play-time tick count into a `"MM:SS.CC"` display string.
///
/// The game clock runs at 3600 ticks per minute; the hundredths field keeps
/// the historical `(t % 60) * 5 / 3` integer conversion, truncation
/// included, so displayed times match existing records exactly.
///
/// A negative tick count is the "no time recorded" sentinel and yields
/// `"--:--.--"` rather than an error.
pub fn format_play_time(ticks: i32) -> String {
    if ticks < 0 {
        return NO_TIME.to_string();
    }

    format!(
        "{:02}:{:02}.{:02}",
        ticks / 3600,
        (ticks / 60) % 60,
        (ticks % 60) * 5 / 3
    )
}

/// Render an instant as `"yyyy-MM-dd HH:mm:ss"` in its own time zone.
pub fn format_date_time<Tz: TimeZone>(instant: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    instant.format(DISPLAY_FORMAT).to_string()
}

/// Export the current time as a portable timestamp string.
pub fn export_timestamp() -> String {
    export_timestamp_at(Utc::now())
}

/// Export an instant as a portable timestamp string (GMT-normalized).
pub fn export_timestamp_at(instant: DateTime<Utc>) -> String {
    instant.format(PORTABLE_FORMAT).to_string()
}

/// Parse a portable timestamp string back into an instant.
///
/// Total over arbitrary input: malformed strings degrade softly with a
/// logged warning instead of erroring hard. Save files travel between
/// machines and get edited by hand; a bad timestamp is expected data, not a
/// bug.
pub fn import_timestamp(s: &str) -> Soft<DateTime<Utc>> {
    match NaiveDateTime::parse_from_str(s, PORTABLE_FORMAT) {
        Ok(naive) => Ok(naive.and_utc()),
        Err(err) => {
            log::warn!("Failed to import timestamp from {:?}: {}", s, err);
            Err(Degraded::new(format!("bad portable timestamp {:?}", s)))
        }
    }
}

/// Check whether `candidate` matches the strftime `format` exactly.
///
/// The parse is strict: every field must be present, in range, and the
/// candidate must be fully consumed. An invalid format pattern simply fails
/// to validate anything.
pub fn validate_date_format(format: &str, candidate: &str) -> bool {
    let mut parsed = Parsed::new();
    parse(&mut parsed, candidate, StrftimeItems::new(format)).is_ok()
}
