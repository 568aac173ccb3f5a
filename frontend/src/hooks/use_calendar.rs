use chrono::NaiveDateTime;
use shared::{newly_unlocked, AdventCalendar, Day, Selection};
use yew::prelude::*;

use super::use_clock::{use_clock, ClockRefreshConfig};
use crate::services::logging::Logger;

const COMPONENT: &str = "use-calendar";

#[derive(Clone, PartialEq)]
pub struct CalendarState {
    pub now: NaiveDateTime,
    pub days: Vec<Day>,
    pub selection: Selection,
}

#[derive(Clone, PartialEq)]
pub struct UseCalendarActions {
    pub on_day_click: Callback<Day>,
    pub on_close: Callback<()>,
}

pub struct UseCalendarResult {
    pub state: CalendarState,
    pub actions: UseCalendarActions,
}

#[hook]
pub fn use_calendar(calendar: &AdventCalendar) -> UseCalendarResult {
    let tick = use_clock(ClockRefreshConfig::from(calendar.config()));
    let selection = use_state(Selection::default);

    // Days are derived from the clock on every render, never stored
    let days = calendar.days(tick.current);

    // Report days that unlocked since the previous tick
    {
        let calendar = calendar.clone();
        use_effect_with(tick, move |tick| {
            if tick.previous != tick.current {
                let before = calendar.days(tick.previous);
                let after = calendar.days(tick.current);
                for number in newly_unlocked(&before, &after) {
                    let message = format!("🔓 Día {} desbloqueado", number);
                    Logger::info_with_component(COMPONENT, &message);
                }
            }
            || ()
        });
    }

    let on_day_click = {
        let selection = selection.clone();
        Callback::from(move |day: Day| {
            if !day.is_available {
                let message = format!("🔒 Día {} sigue bloqueado", day.number);
                Logger::debug_with_component(COMPONENT, &message);
            }
            let next = selection.click(&day);
            if next != *selection {
                selection.set(next);
            }
        })
    };

    let on_close = {
        let selection = selection.clone();
        Callback::from(move |_: ()| {
            selection.set(selection.close());
        })
    };

    UseCalendarResult {
        state: CalendarState {
            now: tick.current,
            days,
            selection: (*selection).clone(),
        },
        actions: UseCalendarActions { on_day_click, on_close },
    }
}
