//! Compute free windows within a day from a list of activities.
//!
//! Sorts busy intervals by start, merges overlapping or adjacent periods,
//! then walks the gaps between merged periods within an "HH:MM" window.
//! Callers pass the activities already narrowed to one day; weekday and
//! date fields are not consulted here.

use serde::{Deserialize, Serialize};

use crate::activity::Activity;
use crate::clock::{minutes_from_time, minutes_to_time};
use crate::error::Result;

/// A free window inside a day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeWindow {
    /// Window start, "HH:MM".
    pub start: String,
    /// Window end, "HH:MM".
    pub end: String,
    pub duration_minutes: u32,
}

impl FreeWindow {
    fn new(start: u32, end: u32) -> Self {
        Self {
            start: minutes_to_time(start),
            end: minutes_to_time(end),
            duration_minutes: end - start,
        }
    }
}

/// Merge overlapping or adjacent busy periods, clipped to the window.
///
/// Returns a sorted, non-overlapping list of (start, end) minute intervals.
/// Activities entirely outside the window are discarded; an activity
/// spilling past the window edge is clipped to it.
fn merge_busy_periods(
    activities: &[Activity],
    window_start: u32,
    window_end: u32,
) -> Result<Vec<(u32, u32)>> {
    let mut intervals = Vec::with_capacity(activities.len());
    for activity in activities {
        let start = minutes_from_time(&activity.time_slot)?;
        let end = start + activity.duration_minutes;
        if start < window_end && end > window_start {
            intervals.push((start.max(window_start), end.min(window_end)));
        }
    }

    intervals.sort_by_key(|&(start, end)| (start, end));

    let mut merged: Vec<(u32, u32)> = Vec::new();
    for (start, end) in intervals {
        if let Some(last) = merged.last_mut() {
            if start <= last.1 {
                // Overlapping or adjacent; extend the current interval.
                last.1 = last.1.max(end);
                continue;
            }
        }
        merged.push((start, end));
    }

    Ok(merged)
}

/// Find free windows between `window_start` and `window_end` ("HH:MM"),
/// given one day's activities.
///
/// Overlapping busy periods are merged before the gaps are computed.
/// Returns windows sorted by start time.
pub fn free_windows(
    activities: &[Activity],
    window_start: &str,
    window_end: &str,
) -> Result<Vec<FreeWindow>> {
    let ws = minutes_from_time(window_start)?;
    let we = minutes_from_time(window_end)?;
    let merged = merge_busy_periods(activities, ws, we)?;

    let mut windows = Vec::new();
    let mut cursor = ws;

    for (busy_start, busy_end) in merged {
        if cursor < busy_start {
            windows.push(FreeWindow::new(cursor, busy_start));
        }
        cursor = cursor.max(busy_end);
    }

    // Trailing window after the last busy period.
    if cursor < we {
        windows.push(FreeWindow::new(cursor, we));
    }

    Ok(windows)
}

/// Find the first free window of at least `min_duration_minutes`.
///
/// Delegates to [`free_windows`] and returns the first window meeting the
/// minimum duration requirement.
pub fn first_free_window(
    activities: &[Activity],
    window_start: &str,
    window_end: &str,
    min_duration_minutes: u32,
) -> Result<Option<FreeWindow>> {
    Ok(free_windows(activities, window_start, window_end)?
        .into_iter()
        .find(|window| window.duration_minutes >= min_duration_minutes))
}
