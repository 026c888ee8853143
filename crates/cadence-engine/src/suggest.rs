//! Bounded forward search for the next free start time.
//!
//! Walks past the blocking activity and probes the slot that begins where
//! the blocker ends, at most two hops deep. This is a best-effort heuristic,
//! not a guaranteed free-slot finder: dense schedules may yield nothing even
//! when later free slots exist that day.

use crate::activity::{Activity, ActivityId};
use crate::clock::{minutes_from_time, minutes_to_time};
use crate::conflict::find_conflict;
use crate::error::Result;

/// The search never walks past more than this many blocking activities.
const MAX_HOPS: usize = 2;

/// Propose an alternative "HH:MM" start for `candidate`, or `None`.
///
/// `None` means either the candidate's own slot is already clear (nothing to
/// suggest) or no adjacent slot opened up within two probes. Callers
/// must not treat the latter as permission to accept an unresolved conflict.
pub fn suggest_slot(
    candidate: &Activity,
    existing: &[Activity],
    exclude_id: Option<ActivityId>,
) -> Result<Option<String>> {
    let Some(mut blocker) = find_conflict(candidate, existing, exclude_id)? else {
        return Ok(None);
    };

    let mut probe = candidate.clone();
    for _ in 0..MAX_HOPS {
        // Start immediately where the blocking activity ends. Ends past
        // midnight wrap via minutes_to_time.
        let end = minutes_from_time(&blocker.time_slot)? + blocker.duration_minutes;
        probe.time_slot = minutes_to_time(end);

        match find_conflict(&probe, existing, exclude_id)? {
            None => return Ok(Some(probe.time_slot.clone())),
            Some(next) => blocker = next,
        }
    }

    // Two hops deep and still blocked; no simple adjacent slot exists.
    Ok(None)
}
