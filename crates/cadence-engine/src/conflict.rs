//! Scan an activity snapshot for the first conflicting entry.

use crate::activity::{Activity, ActivityId};
use crate::error::Result;
use crate::overlap::overlaps;

/// Return the first entry of `existing` that overlaps `candidate`, in input
/// order, or `None` if the candidate's slot is clear.
///
/// `exclude_id` skips the entry with that id, so an update request is not
/// compared against its own stored version. No priority or sort is applied
/// beyond "first match"; callers typically pre-filter `existing` to the
/// candidate's weekday for efficiency, but the predicate is exact either way.
pub fn find_conflict<'a>(
    candidate: &Activity,
    existing: &'a [Activity],
    exclude_id: Option<ActivityId>,
) -> Result<Option<&'a Activity>> {
    for entry in existing {
        if exclude_id == Some(entry.id) {
            continue;
        }
        if overlaps(candidate, entry)? {
            return Ok(Some(entry));
        }
    }
    Ok(None)
}
