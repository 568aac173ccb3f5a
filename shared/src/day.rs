//! Day-model builder.
//!
//! Turns a clock reading plus the fixed calendar shape into the ordered list
//! of day cells the grid renders. Recomputed on every render, nothing here
//! is stored between renders.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::CalendarConfig;
use crate::content::ContentBook;
use crate::error::ConfigError;
use crate::locale::{month_title_es, short_month_es};

/// One cell of the advent calendar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Day {
    /// 1-based position inside the target month
    pub number: u32,
    pub date: NaiveDate,
    pub is_available: bool,
    pub content: String,
}

impl Day {
    /// First instant the day can be opened: local midnight of its date
    pub fn unlock_instant(&self) -> NaiveDateTime {
        unlock_instant(self.date)
    }
}

fn unlock_instant(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Build the days `1..=config.day_count` in ascending order.
///
/// A day is available once `now` has reached its unlock instant, so the
/// comparison is effectively per calendar date. Numbers the month cannot hold
/// end the sequence early; a validated config never hits that.
pub fn build_days(
    now: NaiveDateTime,
    config: &CalendarConfig,
    content: &ContentBook,
) -> Vec<Day> {
    (1..=config.day_count)
        .map_while(|number| {
            let date = config.date_of(number)?;
            Some(Day {
                number,
                date,
                is_available: unlock_instant(date) <= now,
                content: content.content_for(number, config.month),
            })
        })
        .collect()
}

/// Numbers of days that were locked in `before` and are available in `after`
pub fn newly_unlocked(before: &[Day], after: &[Day]) -> Vec<u32> {
    after
        .iter()
        .filter(|day| day.is_available)
        .filter(|day| {
            before
                .iter()
                .find(|old| old.number == day.number)
                .map_or(true, |old| !old.is_available)
        })
        .map(|day| day.number)
        .collect()
}

/// A validated calendar shape together with its messages
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AdventCalendar {
    config: CalendarConfig,
    content: ContentBook,
}

impl AdventCalendar {
    pub fn new(config: CalendarConfig, content: ContentBook) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, content })
    }

    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    pub fn content(&self) -> &ContentBook {
        &self.content
    }

    pub fn days(&self, now: NaiveDateTime) -> Vec<Day> {
        let days = build_days(now, &self.config, &self.content);
        debug!(
            "🗓️ built {} days at {}, {} available",
            days.len(),
            now,
            Self::unlocked_count(&days)
        );
        days
    }

    /// e.g. "Septiembre 2025"
    pub fn title(&self) -> String {
        month_title_es(self.config.year, self.config.month)
    }

    /// e.g. "Sep"
    pub fn short_month_label(&self) -> String {
        short_month_es(self.config.month)
    }

    pub fn unlocked_count(days: &[Day]) -> usize {
        days.iter().filter(|day| day.is_available).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::MissingContentPolicy;

    fn at(month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, month, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn available_numbers(days: &[Day]) -> Vec<u32> {
        days.iter().filter(|d| d.is_available).map(|d| d.number).collect()
    }

    #[test]
    fn test_days_are_contiguous_and_ascending() {
        let calendar = AdventCalendar::default();
        let days = calendar.days(at(9, 10, 12, 0));

        assert_eq!(days.len(), 25);
        for (index, day) in days.iter().enumerate() {
            assert_eq!(day.number, index as u32 + 1);
            assert_eq!(day.date, NaiveDate::from_ymd_opt(2025, 9, day.number).unwrap());
        }
    }

    #[test]
    fn test_mid_month_unlocks_first_ten() {
        let calendar = AdventCalendar::default();
        let days = calendar.days(at(9, 10, 15, 30));

        assert_eq!(available_numbers(&days), (1..=10).collect::<Vec<_>>());
        assert!(days[10..].iter().all(|d| !d.is_available));
    }

    #[test]
    fn test_last_minute_of_last_day_unlocks_everything() {
        let calendar = AdventCalendar::default();
        let days = calendar.days(at(9, 25, 23, 59));
        assert_eq!(AdventCalendar::unlocked_count(&days), 25);
    }

    #[test]
    fn test_day_before_month_unlocks_nothing() {
        let calendar = AdventCalendar::default();
        let days = calendar.days(at(8, 31, 23, 59));
        assert_eq!(AdventCalendar::unlocked_count(&days), 0);
    }

    #[test]
    fn test_unlock_is_at_local_midnight() {
        let calendar = AdventCalendar::default();

        let before = calendar.days(at(9, 10, 23, 59));
        assert!(!before[10].is_available);

        let after = calendar.days(at(9, 11, 0, 0));
        assert!(after[10].is_available);
        assert_eq!(after[10].unlock_instant(), at(9, 11, 0, 0));
    }

    #[test]
    fn test_availability_is_monotonic() {
        let calendar = AdventCalendar::default();
        for day_of_month in 1..=30 {
            let days = calendar.days(at(9, day_of_month, 6, 0));
            let mut seen_locked = false;
            for day in &days {
                if !day.is_available {
                    seen_locked = true;
                }
                assert!(
                    !(seen_locked && day.is_available),
                    "day {} unlocked after a locked day",
                    day.number
                );
            }
        }
    }

    #[test]
    fn test_content_uses_wrap_policy_by_default() {
        let calendar = AdventCalendar::default();
        let days = calendar.days(at(9, 1, 0, 0));

        assert!(days[0].content.starts_with("Fue el comienzo de todo"));
        assert!(days[1].content.starts_with("Una nueva aventura surgió"));
        assert!(days[2].content.starts_with("Fue el comienzo de todo"));
        let suffix = "Día 25 de septiembre ha sido desbloqueado con contenido especial para ti.";
        assert!(days[24].content.ends_with(suffix));
    }

    #[test]
    fn test_undefined_policy_matches_unchecked_lookup() {
        let calendar = AdventCalendar::new(
            CalendarConfig::default(),
            ContentBook { policy: MissingContentPolicy::Undefined, ..ContentBook::default() },
        )
        .unwrap();
        let days = calendar.days(at(9, 1, 0, 0));

        assert!(days[1].content.starts_with("Una nueva aventura"));
        assert!(days[2].content.starts_with("undefined Día 3 de septiembre"));
    }

    #[test]
    fn test_clock_advance_flips_availability() {
        let calendar = AdventCalendar::default();
        let before = calendar.days(at(9, 11, 23, 59));
        let after = calendar.days(at(9, 12, 0, 0));

        assert!(!before[11].is_available);
        assert!(after[11].is_available);
        assert_eq!(newly_unlocked(&before, &after), vec![12]);
    }

    #[test]
    fn test_newly_unlocked_is_empty_within_a_day() {
        let calendar = AdventCalendar::default();
        let before = calendar.days(at(9, 5, 8, 0));
        let after = calendar.days(at(9, 5, 8, 1));
        assert!(newly_unlocked(&before, &after).is_empty());
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = CalendarConfig { day_count: 40, ..CalendarConfig::default() };
        assert_eq!(
            AdventCalendar::new(config, ContentBook::default()),
            Err(ConfigError::DayCountExceedsMonth { day_count: 40, days_in_month: 30 })
        );
    }

    #[test]
    fn test_builder_stops_at_month_end_for_unvalidated_config() {
        let config = CalendarConfig { day_count: 31, ..CalendarConfig::default() };
        let days = build_days(at(9, 30, 0, 0), &config, &ContentBook::default());
        assert_eq!(days.len(), 30);
    }

    #[test]
    fn test_preset_passes_validation() {
        let validated = AdventCalendar::new(CalendarConfig::default(), ContentBook::default());
        assert_eq!(validated, Ok(AdventCalendar::default()));
    }

    #[test]
    fn test_labels() {
        let calendar = AdventCalendar::default();
        assert_eq!(calendar.title(), "Septiembre 2025");
        assert_eq!(calendar.short_month_label(), "Sep");
    }

    #[test]
    fn test_day_serializes_with_camel_case() {
        let calendar = AdventCalendar::default();
        let day = calendar.days(at(9, 3, 0, 0)).remove(0);
        let json = serde_json::to_value(&day).unwrap();

        assert_eq!(json["number"], 1);
        assert_eq!(json["isAvailable"], true);
        assert_eq!(json["date"], "2025-09-01");
    }
}
