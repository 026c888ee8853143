//! Pairwise conflict predicate between two scheduled activities.
//!
//! Evaluated as "does candidate `a` conflict with existing `b`", though the
//! rules are symmetric in effect. Adjacent activities (one ends exactly when
//! the other starts) are NOT conflicts.

use crate::activity::Activity;
use crate::clock::minutes_from_time;
use crate::error::Result;

/// Decide whether two activities occupy overlapping day+time slots.
///
/// Rules, in order:
/// 1. Different weekdays never conflict, whatever the recurrence flags say.
/// 2. Two specific-date activities only meet on the exact same date
///    (day granularity). A dateless non-recurring entry matches no date.
/// 3. A recurring participant skips the date check entirely: it occupies
///    every occurrence of its weekday and blocks the whole series.
/// 4. Half-open interval test `a.start < b.end && b.start < a.end`;
///    back-to-back activities do not conflict.
///
/// # Errors
/// Returns [`ScheduleError::InvalidTime`](crate::ScheduleError::InvalidTime)
/// if either `time_slot` is unparseable.
pub fn overlaps(a: &Activity, b: &Activity) -> Result<bool> {
    if a.day_of_week != b.day_of_week {
        return Ok(false);
    }

    if !a.is_recurring && !b.is_recurring {
        match (a.specific_date, b.specific_date) {
            (Some(da), Some(db)) if da == db => {}
            _ => return Ok(false),
        }
    }

    let start_a = minutes_from_time(&a.time_slot)?;
    let end_a = start_a + a.duration_minutes;
    let start_b = minutes_from_time(&b.time_slot)?;
    let end_b = start_b + b.duration_minutes;

    // Excludes the adjacent case where end_a == start_b.
    Ok(start_a < end_b && start_b < end_a)
}
