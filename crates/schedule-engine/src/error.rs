//! Error types for schedule-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Invalid time: {0}")]
    InvalidTime(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid time range: {0}")]
    InvalidTimeRange(String),

    #[error("Invalid weekday: {0}")]
    InvalidWeekday(String),

    #[error("Precondition violated: {0}")]
    Precondition(String),

    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScheduleError {
    /// Whether this error comes from a malformed textual field rather than a caller bug.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            ScheduleError::InvalidTime(_)
                | ScheduleError::InvalidDate(_)
                | ScheduleError::InvalidTimeRange(_)
                | ScheduleError::InvalidWeekday(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
