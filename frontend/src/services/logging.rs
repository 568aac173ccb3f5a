use gloo::console;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Console logger for the page.
///
/// Messages are tagged with the component that emitted them. The same sink
/// backs the `log` facade, so `log::debug!` from the model crate ends up in
/// the browser console too.
pub struct Logger;

static LOGGER: Logger = Logger;

impl Logger {
    /// Install as the `log` backend. Call once before rendering.
    pub fn init() -> Result<(), SetLoggerError> {
        log::set_logger(&LOGGER)?;
        log::set_max_level(Self::max_level());
        Ok(())
    }

    fn max_level() -> LevelFilter {
        if cfg!(debug_assertions) {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }

    pub fn debug_with_component(component: &str, message: &str) {
        Self::write(Level::Debug, component, message);
    }

    pub fn info_with_component(component: &str, message: &str) {
        Self::write(Level::Info, component, message);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        Self::write(Level::Warn, component, message);
    }

    pub fn error_with_component(component: &str, message: &str) {
        Self::write(Level::Error, component, message);
    }

    fn write(level: Level, component: &str, message: &str) {
        if level > log::max_level() {
            return;
        }

        let line = format_line(component, message);
        match level {
            Level::Error => console::error!(line),
            Level::Warn => console::warn!(line),
            Level::Info => console::info!(line),
            Level::Debug | Level::Trace => console::debug!(line),
        }
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            Self::write(record.level(), record.target(), &record.args().to_string());
        }
    }

    fn flush(&self) {}
}

fn format_line(component: &str, message: &str) -> String {
    format!("[{}] {}", component, message)
}
