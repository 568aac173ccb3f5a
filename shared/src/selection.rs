use serde::{Deserialize, Serialize};

use crate::day::Day;

/// Which day, if any, is open in the detail modal
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Selection {
    #[default]
    Idle,
    Viewing(Day),
}

impl Selection {
    /// State after a click on `day`. Locked days are inert.
    pub fn click(&self, day: &Day) -> Selection {
        if day.is_available {
            Selection::Viewing(day.clone())
        } else {
            self.clone()
        }
    }

    pub fn close(&self) -> Selection {
        Selection::Idle
    }

    pub fn selected(&self) -> Option<&Day> {
        match self {
            Selection::Idle => None,
            Selection::Viewing(day) => Some(day),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Selection::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::day::AdventCalendar;
    use chrono::NaiveDate;

    fn days_on_tenth() -> Vec<Day> {
        let now = NaiveDate::from_ymd_opt(2025, 9, 10)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        AdventCalendar::default().days(now)
    }

    #[test]
    fn test_initial_state_is_idle() {
        assert!(Selection::default().is_idle());
        assert_eq!(Selection::default().selected(), None);
    }

    #[test]
    fn test_click_locked_day_stays_idle() {
        let days = days_on_tenth();
        let state = Selection::Idle.click(&days[15]);
        assert_eq!(state, Selection::Idle);
    }

    #[test]
    fn test_click_available_day_views_it() {
        let days = days_on_tenth();
        let state = Selection::Idle.click(&days[2]);

        let selected = state.selected().unwrap();
        assert_eq!(selected.number, 3);
        assert_eq!(selected.content, days[2].content);
    }

    #[test]
    fn test_reselect_overwrites() {
        let days = days_on_tenth();
        let state = Selection::Idle.click(&days[0]).click(&days[6]);
        assert_eq!(state.selected().map(|d| d.number), Some(7));
    }

    #[test]
    fn test_locked_click_while_viewing_keeps_current_day() {
        let days = days_on_tenth();
        let state = Selection::Idle.click(&days[4]).click(&days[20]);
        assert_eq!(state.selected().map(|d| d.number), Some(5));
    }

    #[test]
    fn test_close_returns_to_idle_without_touching_days() {
        let days = days_on_tenth();
        let snapshot = days.clone();

        let state = Selection::Idle.click(&days[1]).close();

        assert!(state.is_idle());
        assert_eq!(days, snapshot);
        assert_eq!(AdventCalendar::unlocked_count(&days), 10);
    }
}
