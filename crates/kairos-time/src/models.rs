//! The bindable request models.

use chrono::{DateTime, Duration, LocalResult, TimeZone, Utc};
use chrono_tz::Tz;
use kairos_bind::{accessor, Bindable, Field};
use kairos_core::AppError;
use serde_json::{Map, Value};

use crate::clock::{format_display, format_duration, parse_date_input};
use crate::zone::resolve_zone;

/// A timezone selection, possibly absent.
///
/// Bound from `{"tz": "Europe/Moscow"}` or constructed directly from path
/// parameters. An absent zone means UTC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimezoneModel {
    tz: Option<String>,
}

impl TimezoneModel {
    /// Creates a model selecting the given zone.
    #[must_use]
    pub fn new(tz: impl Into<String>) -> Self {
        Self {
            tz: Some(tz.into()),
        }
    }

    /// Creates a model selecting UTC.
    #[must_use]
    pub const fn utc() -> Self {
        Self { tz: None }
    }

    /// Resolves the selected zone.
    pub fn zone(&self) -> Result<Tz, AppError> {
        resolve_zone(self.tz.as_deref())
    }

    /// Returns the current moment in the selected zone.
    pub fn now(&self) -> Result<DateTime<Tz>, AppError> {
        Ok(Utc::now().with_timezone(&self.zone()?))
    }

    /// Returns the current moment in the selected zone, display formatted.
    pub fn display_now(&self) -> Result<String, AppError> {
        Ok(format_display(&self.now()?))
    }

    /// Returns the current date in the selected zone, ISO formatted.
    pub fn display_today(&self) -> Result<String, AppError> {
        Ok(self.now()?.date_naive().to_string())
    }
}

impl Bindable for TimezoneModel {
    const FIELDS: &'static [Field] = &[Field::optional_text("tz")];

    fn assemble(object: &Map<String, Value>) -> Result<Self, AppError> {
        Ok(Self {
            tz: accessor::optional_text(object, "tz"),
        })
    }
}

/// A fixed-format datetime string paired with an optional zone.
///
/// The datetime is interpreted as local time in the selected zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateModel {
    date: String,
    tz: Option<String>,
}

impl DateModel {
    /// Parses the date and attaches the selected zone.
    ///
    /// Local times that exist twice in the zone (DST fall-back) take the
    /// earlier offset; local times that do not exist are rejected.
    pub fn resolve(&self) -> Result<DateTime<Tz>, AppError> {
        let naive = parse_date_input(&self.date)?;
        let zone = resolve_zone(self.tz.as_deref())?;
        match zone.from_local_datetime(&naive) {
            LocalResult::Single(datetime) => Ok(datetime),
            LocalResult::Ambiguous(earliest, _) => Ok(earliest),
            LocalResult::None => Err(AppError::validation("invalid datetime")),
        }
    }

    /// Parses, attaches the zone, and converts to UTC.
    pub fn to_utc(&self) -> Result<DateTime<Utc>, AppError> {
        Ok(self.resolve()?.with_timezone(&Utc))
    }
}

impl Bindable for DateModel {
    const FIELDS: &'static [Field] = &[Field::text("date"), Field::optional_text("tz")];

    fn assemble(object: &Map<String, Value>) -> Result<Self, AppError> {
        Ok(Self {
            date: accessor::text(object, "date")?,
            tz: accessor::optional_text(object, "tz"),
        })
    }
}

/// Two datetimes whose difference is requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatesDiffModel {
    start: DateModel,
    end: DateModel,
}

impl DatesDiffModel {
    /// Returns the signed duration `start - end`, computed in UTC.
    pub fn diff(&self) -> Result<Duration, AppError> {
        Ok(self.start.to_utc()? - self.end.to_utc()?)
    }

    /// Returns the difference rendered as `H:MM:SS` of its absolute value.
    pub fn display_diff(&self) -> Result<String, AppError> {
        Ok(format_duration(self.diff()?))
    }
}

impl Bindable for DatesDiffModel {
    const FIELDS: &'static [Field] = &[
        Field::nested("start", DateModel::FIELDS),
        Field::nested("end", DateModel::FIELDS),
    ];

    fn assemble(object: &Map<String, Value>) -> Result<Self, AppError> {
        Ok(Self {
            start: accessor::nested(object, "start")?,
            end: accessor::nested(object, "end")?,
        })
    }
}
