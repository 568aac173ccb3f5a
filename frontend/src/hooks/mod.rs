pub mod use_calendar;
pub mod use_clock;
