//! Error types for scheduling operations.
//!
//! Only caller contract violations surface as errors. A scheduling conflict
//! is an expected outcome and flows through decision values instead.

use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum ScheduleError {
    /// A time-of-day string is not "HH:MM" within 00:00-23:59.
    #[error("Invalid time: {0}")]
    InvalidTime(String),

    /// A day-of-week name is not one of the seven weekdays.
    #[error("Invalid weekday: {0}")]
    InvalidWeekday(String),

    /// An update named an activity id missing from the snapshot.
    #[error("Unknown activity: {0}")]
    UnknownActivity(Uuid),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
