use chrono::{NaiveDate, NaiveDateTime};
use js_sys::Date;
use shared::{Clock, SystemClock};

/// Clock backed by the browser's `Date`, read in the device's local time
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now(&self) -> NaiveDateTime {
        let now = Date::new_0();
        // JavaScript months are 0-indexed
        local_date_time(
            now.get_full_year() as i32,
            now.get_month() + 1,
            now.get_date(),
            now.get_hours(),
            now.get_minutes(),
            now.get_seconds(),
        )
        // A live `Date` always has in-range components; this only covers a
        // year chrono cannot represent, where chrono's own clock decides.
        .unwrap_or_else(|| SystemClock.now())
    }
}

fn local_date_time(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, second)
}

/// Current date line of the header, e.g. "miércoles, 10 de septiembre de 2025"
pub fn format_current_date(now: NaiveDateTime) -> String {
    shared::locale::long_date_es(now.date())
}
