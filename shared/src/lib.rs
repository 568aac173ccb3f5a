//! Logical core of the advent calendar page.
//!
//! Everything the page decides lives here: which days are unlocked, what each
//! one says, how it is coloured and which one is open. The frontend crate only
//! samples the browser clock and renders the result.

pub mod clock;
pub mod config;
pub mod content;
pub mod day;
pub mod error;
pub mod locale;
pub mod palette;
pub mod selection;

pub use clock::{Clock, ClockTick, LiveClock, ManualClock, SystemClock};
pub use config::CalendarConfig;
pub use content::{ContentBook, MissingContentPolicy};
pub use day::{build_days, newly_unlocked, AdventCalendar, Day};
pub use error::ConfigError;
pub use palette::{cell_style, CellStyle, Tone, PALETTE};
pub use selection::Selection;
