//! The activity model shared by every scheduling component.
//!
//! An [`Activity`] is the unit being scheduled: either a weekly recurring
//! entry occupying its weekday every week, or a one-off entry pinned to a
//! specific date (still tagged with the weekday that date falls on).

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, ScheduleError};

/// Opaque activity identifier, assigned at creation, immutable afterwards.
pub type ActivityId = Uuid;

/// A scheduled activity.
///
/// The occupied interval is `[start, start + duration)` in minutes since
/// midnight, where start is parsed from `time_slot`. The end point is NOT
/// clamped to 24h: an activity starting at 23:00 with 120 minutes duration
/// conceptually ends at 25:00, still on the same day as far as the overlap
/// rules are concerned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: ActivityId,
    /// Shown in conflict reports; otherwise inert metadata.
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: String,
    /// The weekday this activity occupies. Specific-date activities carry
    /// the weekday their date falls on.
    #[serde(with = "weekday_name")]
    pub day_of_week: Weekday,
    /// Wall-clock start time, "HH:MM", 24-hour.
    pub time_slot: String,
    /// Must be positive. Not re-checked at runtime; request construction
    /// owns the invariant.
    pub duration_minutes: u32,
    /// True: every week on `day_of_week`. False: only on `specific_date`.
    pub is_recurring: bool,
    /// Meaningful only when non-recurring. A non-recurring activity without
    /// a date is a tolerated legacy state that matches no date at all.
    #[serde(default)]
    pub specific_date: Option<NaiveDate>,
    /// Mutated by the completion toggle, outside this engine.
    #[serde(default)]
    pub completed: bool,
}

/// Parse a weekday name ("Monday", "mon", case-insensitive).
pub fn parse_weekday(name: &str) -> Result<Weekday> {
    name.parse()
        .map_err(|_| ScheduleError::InvalidWeekday(name.to_string()))
}

/// Full English name for a weekday, as used on the wire.
pub fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Serde adapter: weekdays cross the wire as full English names.
pub mod weekday_name {
    use chrono::Weekday;
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(day: &Weekday, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(super::weekday_label(*day))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Weekday, D::Error> {
        let name = String::deserialize(deserializer)?;
        super::parse_weekday(&name).map_err(D::Error::custom)
    }
}
