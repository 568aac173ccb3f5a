use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_YEAR: i32 = 2025;
pub const DEFAULT_MONTH: u32 = 9;
pub const DEFAULT_DAY_COUNT: u32 = 25;
/// One minute between clock samples
pub const DEFAULT_REFRESH_INTERVAL_MS: u32 = 60_000;

/// Fixed shape of the advent calendar.
///
/// `month` follows chrono's 1-based convention, so September is 9.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarConfig {
    pub year: i32,
    pub month: u32,
    pub day_count: u32,
    pub refresh_interval_ms: u32,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            year: DEFAULT_YEAR,
            month: DEFAULT_MONTH,
            day_count: DEFAULT_DAY_COUNT,
            refresh_interval_ms: DEFAULT_REFRESH_INTERVAL_MS,
        }
    }
}

impl CalendarConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=12).contains(&self.month) {
            return Err(ConfigError::InvalidMonth(self.month));
        }
        if self.day_count == 0 {
            return Err(ConfigError::EmptyCalendar);
        }
        if self.refresh_interval_ms == 0 {
            return Err(ConfigError::ZeroRefreshInterval);
        }

        let days_in_month = days_in_month(self.year, self.month)
            .ok_or(ConfigError::InvalidYear(self.year))?;
        if self.day_count > days_in_month {
            return Err(ConfigError::DayCountExceedsMonth {
                day_count: self.day_count,
                days_in_month,
            });
        }

        Ok(())
    }

    /// Calendar date of the given day number inside the target month
    pub fn date_of(&self, number: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, number)
    }
}

/// Number of days in a month, or `None` when chrono cannot represent it
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    u32::try_from(next_first.signed_duration_since(first).num_days()).ok()
}
