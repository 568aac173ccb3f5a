use gloo::timers::callback::Interval;
use shared::config::DEFAULT_REFRESH_INTERVAL_MS;
use shared::{CalendarConfig, Clock, ClockTick, LiveClock};
use yew::prelude::*;

use crate::services::date_utils::BrowserClock;
use crate::services::logging::Logger;

const COMPONENT: &str = "use-clock";

/// How often the held "now" is resampled
#[derive(Clone, Debug, PartialEq)]
pub struct ClockRefreshConfig {
    pub interval_ms: u32,
}

impl Default for ClockRefreshConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_REFRESH_INTERVAL_MS, // 1 minute
        }
    }
}

impl From<&CalendarConfig> for ClockRefreshConfig {
    fn from(config: &CalendarConfig) -> Self {
        Self {
            interval_ms: config.refresh_interval_ms,
        }
    }
}

/// Hook holding the page's current time, read from the browser clock
#[hook]
pub fn use_clock(config: ClockRefreshConfig) -> ClockTick {
    use_clock_with(BrowserClock, config)
}

/// Hook holding the current time of an arbitrary clock source.
///
/// The source is sampled when the component mounts and then on every tick of
/// an interval timer. Each tick replaces the held value, which re-renders the
/// component. The timer is dropped in the effect destructor, so it stops on
/// unmount and is restarted when the config changes. Only the source passed
/// on the first render is used.
#[hook]
pub fn use_clock_with<C>(source: C, config: ClockRefreshConfig) -> ClockTick
where
    C: Clock + 'static,
{
    let live_clock = use_mut_ref(move || LiveClock::new(source));
    let tick = {
        let live_clock = live_clock.clone();
        use_state(move || ClockTick::at(live_clock.borrow().now()))
    };

    {
        let live_clock = live_clock.clone();
        let tick = tick.clone();

        use_effect_with(config, move |config| {
            Logger::debug_with_component(
                COMPONENT,
                &format!("⏱️ Clock refresh every {} ms", config.interval_ms),
            );

            let interval = Interval::new(config.interval_ms, move || {
                let next = live_clock.borrow_mut().refresh();
                tick.set(next);
            });

            move || {
                drop(interval);
                Logger::debug_with_component(COMPONENT, "🧹 Clock refresh cancelled");
            }
        });
    }

    *tick
}
