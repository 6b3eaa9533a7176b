//! Fixed-format parsing and display formatting.

use chrono::{DateTime, Duration, NaiveDateTime, TimeZone};
use kairos_core::AppError;

/// Accepted input formats, tried in order; first success wins.
const INPUT_FORMATS: &[&str] = &["%I:%M%p %Y-%m-%d", "%m.%d.%Y %H:%M:%S"];

/// The one format all timestamps are rendered in.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parses a datetime string against the accepted format list.
///
/// The result is naive; attaching a zone is the caller's business.
pub fn parse_date_input(input: &str) -> Result<NaiveDateTime, AppError> {
    for format in INPUT_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(parsed);
        }
    }
    Err(AppError::validation(format!(
        "invalid datetime format: {input}"
    )))
}

/// Renders a zone-aware timestamp in the display format.
pub fn format_display<Z: TimeZone>(datetime: &DateTime<Z>) -> String
where
    Z::Offset: std::fmt::Display,
{
    datetime.format(DISPLAY_FORMAT).to_string()
}

/// Renders a duration as `H:MM:SS` of its absolute value, hours unpadded.
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let total = duration.num_seconds().abs();
    let hours = total / 3600;
    let minutes = total % 3600 / 60;
    let seconds = total % 60;
    format!("{hours}:{minutes:02}:{seconds:02}")
}
