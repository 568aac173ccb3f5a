use std::cell::Cell;
use std::rc::Rc;

use chrono::{Local, NaiveDate, NaiveDateTime};

/// Source of the current local wall time.
///
/// All times are naive local date-times: the calendar unlocks on the device's
/// own calendar and does no timezone conversion.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Samples the operating system's local time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock that only moves when told to. Clones share the same reading.
#[derive(Debug, Clone, PartialEq)]
pub struct ManualClock {
    now: Rc<Cell<NaiveDateTime>>,
}

impl ManualClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self { now: Rc::new(Cell::new(now)) }
    }

    pub fn set(&self, now: NaiveDateTime) {
        self.now.set(now);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> NaiveDateTime {
        self.now.get()
    }
}

/// Result of one refresh of a [`LiveClock`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTick {
    pub previous: NaiveDateTime,
    pub current: NaiveDateTime,
}

impl ClockTick {
    /// A tick where nothing has moved yet, used for the first render
    pub fn at(now: NaiveDateTime) -> Self {
        Self { previous: now, current: now }
    }

    /// Whether the calendar date rolled over between the two readings
    pub fn date_changed(&self) -> bool {
        self.previous.date() != self.current.date()
    }
}

/// The held "now" of the page.
///
/// Sampled once on construction. `refresh` is the only way to move it, and it
/// is driven by the periodic timer; everything else only reads.
#[derive(Debug, Clone)]
pub struct LiveClock<C: Clock> {
    source: C,
    current: NaiveDateTime,
}

impl<C: Clock> LiveClock<C> {
    pub fn new(source: C) -> Self {
        let current = source.now();
        Self { source, current }
    }

    pub fn now(&self) -> NaiveDateTime {
        self.current
    }

    /// Replace the held reading with a fresh sample from the source
    pub fn refresh(&mut self) -> ClockTick {
        let previous = self.current;
        self.current = self.source.now();
        ClockTick { previous, current: self.current }
    }
}
