use thiserror::Error;

/// Reasons a calendar configuration is rejected at startup.
///
/// Only configuration can fail. Building days, looking up content and moving
/// the selection around are total once a configuration has been accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("month {0} is outside 1..=12")]
    InvalidMonth(u32),

    #[error("year {0} cannot be represented as a calendar date")]
    InvalidYear(i32),

    #[error("calendar must contain at least one day")]
    EmptyCalendar,

    #[error("calendar has {day_count} days but the target month only has {days_in_month}")]
    DayCountExceedsMonth { day_count: u32, days_in_month: u32 },

    #[error("refresh interval must be greater than zero")]
    ZeroRefreshInterval,
}
