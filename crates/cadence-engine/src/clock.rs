//! Wall-clock arithmetic on "HH:MM" time-of-day strings.
//!
//! Start times are stored as "HH:MM" strings and converted to minutes since
//! midnight for interval math. Both call sites of the engine (server
//! enforcement and live form preview) go through these two functions, so
//! parsing is strict here rather than trusted to upstream validation.

use crate::error::{Result, ScheduleError};

/// Parse "HH:MM" into minutes since midnight.
///
/// Requires exactly two numeric components separated by `:`, with hours
/// 00-23 and minutes 00-59. Anything else is [`ScheduleError::InvalidTime`];
/// malformed input is never coerced to a default.
pub fn minutes_from_time(time: &str) -> Result<u32> {
    let invalid = || ScheduleError::InvalidTime(time.to_string());

    let mut parts = time.split(':');
    let (Some(h), Some(m), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(invalid());
    };

    let hours: u32 = h.parse().map_err(|_| invalid())?;
    let minutes: u32 = m.parse().map_err(|_| invalid())?;
    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }

    Ok(hours * 60 + minutes)
}

/// Format minutes since midnight as "HH:MM".
///
/// The hour component wraps at 24h: 1500 minutes (25:00) formats as "01:00".
/// No date is carried, so a value pushed past midnight reads as an
/// early-morning time on the same day. Suggested slots that cross midnight
/// wrap silently; callers wanting different behavior must check the raw
/// minute count before formatting.
pub fn minutes_to_time(minutes: u32) -> String {
    format!("{:02}:{:02}", (minutes / 60) % 24, minutes % 60)
}
