//! Accept or reject create/update requests against an activity snapshot.
//!
//! A create request names one or more weekdays and is expanded into one
//! candidate per day before checking; an update request is merged over the
//! stored activity and re-validated as a whole. Both stop at the first
//! conflict found, in the order the days were supplied, and report it with
//! an optional suggested alternative start. Nothing is persisted here; the
//! caller owns the snapshot and commits accepted candidates itself.

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::activity::{self, weekday_name, Activity, ActivityId};
use crate::conflict::find_conflict;
use crate::error::{Result, ScheduleError};
use crate::suggest::suggest_slot;

/// A request to schedule a new activity on one or more weekdays.
///
/// `dayOfWeek` accepts a single weekday name or an array of names on the
/// wire. A request naming more than one day is always a weekly series, so
/// it cannot also carry a specific date.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: String,
    #[serde(
        serialize_with = "serialize_days",
        deserialize_with = "deserialize_days"
    )]
    pub day_of_week: Vec<Weekday>,
    pub time_slot: String,
    pub duration_minutes: u32,
    #[serde(default)]
    pub specific_date: Option<NaiveDate>,
}

/// A partial edit to a stored activity. Absent fields keep stored values.
///
/// `specific_date` distinguishes an absent field (outer `None`: keep both
/// the stored date and the stored recurrence flag) from an explicit null
/// (`Some(None)`: clear the date and recompute the flag).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    #[serde(
        serialize_with = "serialize_opt_day",
        deserialize_with = "deserialize_opt_day"
    )]
    pub day_of_week: Option<Weekday>,
    pub time_slot: Option<String>,
    pub duration_minutes: Option<u32>,
    #[serde(
        deserialize_with = "deserialize_explicit_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub specific_date: Option<Option<NaiveDate>>,
}

/// Structured report of the existing activity that blocks a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulingConflict {
    /// Title of the blocking activity.
    pub activity_title: String,
    #[serde(with = "weekday_name")]
    pub day_of_week: Weekday,
    /// Start of the blocking activity, "HH:MM".
    pub time_slot: String,
    /// Next free start found by the suggestion heuristic, if any.
    #[serde(default)]
    pub suggested_time: Option<String>,
}

/// Outcome of [`validate_create`]. The rejected branch must be handled
/// explicitly; conflicts are data, not errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum CreateDecision {
    /// Every requested day is clear; persist one row per candidate.
    Accepted { activities: Vec<Activity> },
    /// The first conflicting day, in request order. Nothing is persisted.
    Rejected { conflict: SchedulingConflict },
}

/// Outcome of [`validate_update`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum UpdateDecision {
    /// The merged activity to store in place of the old version.
    Accepted { activity: Activity },
    Rejected { conflict: SchedulingConflict },
}

/// Validate a create request against the user's existing activities.
///
/// Expands the request into one candidate per named day (shared fields
/// carried over, ids freshly assigned) and scans each candidate against the
/// existing activities on its weekday. Multi-day requests are all-or-nothing:
/// the first conflict rejects the whole request and later days are never
/// checked.
///
/// # Errors
/// [`ScheduleError::InvalidTime`] if the request or an existing entry holds
/// an unparseable `time_slot`.
pub fn validate_create(request: &CreateRequest, existing: &[Activity]) -> Result<CreateDecision> {
    // A genuine multi-day request is always a weekly series; only a
    // single-day request may pin a specific date.
    let multi_day = request.day_of_week.len() > 1;
    let specific_date = if multi_day { None } else { request.specific_date };
    let is_recurring = specific_date.is_none();

    let mut accepted = Vec::with_capacity(request.day_of_week.len());
    for &day in &request.day_of_week {
        let candidate = Activity {
            id: Uuid::new_v4(),
            title: request.title.clone(),
            description: request.description.clone(),
            category: request.category.clone(),
            day_of_week: day,
            time_slot: request.time_slot.clone(),
            duration_minutes: request.duration_minutes,
            is_recurring,
            specific_date,
            completed: false,
        };

        let day_pool = day_snapshot(existing, day);
        if let Some(blocker) = find_conflict(&candidate, &day_pool, None)? {
            let conflict = build_conflict(blocker, &candidate, &day_pool, None)?;
            return Ok(CreateDecision::Rejected { conflict });
        }
        accepted.push(candidate);
    }

    Ok(CreateDecision::Accepted {
        activities: accepted,
    })
}

/// Validate an edit to the stored activity with id `activity_id`.
///
/// Request fields are merged over the stored version; the recurrence flag
/// follows `specific_date` only when the request names it explicitly,
/// otherwise the stored placement stands. The scan excludes the activity's
/// own stored row, so an unchanged schedule always passes.
///
/// # Errors
/// [`ScheduleError::UnknownActivity`] if `activity_id` is not in the
/// snapshot; [`ScheduleError::InvalidTime`] as for create.
pub fn validate_update(
    activity_id: ActivityId,
    request: &UpdateRequest,
    existing: &[Activity],
) -> Result<UpdateDecision> {
    let stored = existing
        .iter()
        .find(|a| a.id == activity_id)
        .ok_or(ScheduleError::UnknownActivity(activity_id))?;

    let mut proposed = stored.clone();
    if let Some(title) = &request.title {
        proposed.title = title.clone();
    }
    if let Some(description) = &request.description {
        proposed.description = Some(description.clone());
    }
    if let Some(category) = &request.category {
        proposed.category = category.clone();
    }
    if let Some(day) = request.day_of_week {
        proposed.day_of_week = day;
    }
    if let Some(time_slot) = &request.time_slot {
        proposed.time_slot = time_slot.clone();
    }
    if let Some(duration) = request.duration_minutes {
        proposed.duration_minutes = duration;
    }
    if let Some(date) = request.specific_date {
        proposed.specific_date = date;
        proposed.is_recurring = date.is_none();
    }

    let day_pool = day_snapshot(existing, proposed.day_of_week);
    if let Some(blocker) = find_conflict(&proposed, &day_pool, Some(activity_id))? {
        let conflict = build_conflict(blocker, &proposed, &day_pool, Some(activity_id))?;
        return Ok(UpdateDecision::Rejected { conflict });
    }

    Ok(UpdateDecision::Accepted { activity: proposed })
}

/// Narrow the snapshot to one weekday before scanning.
fn day_snapshot(existing: &[Activity], day: Weekday) -> Vec<Activity> {
    existing
        .iter()
        .filter(|a| a.day_of_week == day)
        .cloned()
        .collect()
}

fn build_conflict(
    blocker: &Activity,
    candidate: &Activity,
    day_pool: &[Activity],
    exclude_id: Option<ActivityId>,
) -> Result<SchedulingConflict> {
    Ok(SchedulingConflict {
        activity_title: blocker.title.clone(),
        day_of_week: blocker.day_of_week,
        time_slot: blocker.time_slot.clone(),
        suggested_time: suggest_slot(candidate, day_pool, exclude_id)?,
    })
}

// ---------------------------------------------------------------------------
// Serde adapters for the request wire shapes
// ---------------------------------------------------------------------------

fn serialize_days<S: Serializer>(
    days: &[Weekday],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    // Mirror the accepted input: a lone day round-trips as a plain string.
    if days.len() == 1 {
        serializer.serialize_str(activity::weekday_label(days[0]))
    } else {
        serializer.collect_seq(days.iter().map(|&day| activity::weekday_label(day)))
    }
}

fn deserialize_days<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Vec<Weekday>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    let names = match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(name) => vec![name],
        OneOrMany::Many(names) => names,
    };
    names
        .iter()
        .map(|name| activity::parse_weekday(name).map_err(serde::de::Error::custom))
        .collect()
}

fn serialize_opt_day<S: Serializer>(
    day: &Option<Weekday>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match day {
        Some(day) => serializer.serialize_str(activity::weekday_label(*day)),
        None => serializer.serialize_none(),
    }
}

fn deserialize_opt_day<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<Weekday>, D::Error> {
    let name: Option<String> = Option::deserialize(deserializer)?;
    name.map(|n| activity::parse_weekday(&n).map_err(serde::de::Error::custom))
        .transpose()
}

/// Wraps a present value in `Some`, so an absent field (struct default,
/// outer `None`) stays distinguishable from an explicit null (`Some(None)`).
fn deserialize_explicit_date<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<Option<NaiveDate>>, D::Error> {
    Option::<NaiveDate>::deserialize(deserializer).map(Some)
}
