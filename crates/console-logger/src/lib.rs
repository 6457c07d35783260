//! Console Logger
//!
//! `log` backend for browser pages. Records go to `console.*` on wasm32
//! and into a rolling in-memory history on every target.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Default number of lines kept in the history
pub const DEFAULT_CAPACITY: usize = 200;

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// Console logger with a bounded history of formatted lines
pub struct ConsoleLogger {
    level: LevelFilter,
    capacity: usize,
    history: Mutex<VecDeque<String>>,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            capacity: capacity.max(1),
            history: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    /// Most recent lines, oldest first
    pub fn recent(&self) -> Vec<String> {
        match self.history.lock() {
            Ok(history) => history.iter().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    fn push(&self, line: String) {
        if let Ok(mut history) = self.history.lock() {
            while history.len() >= self.capacity {
                history.pop_front();
            }
            history.push_back(line);
        }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = record.args().to_string();
        write_console(record.level(), &line);
        self.push(line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, line: &str) {
    let value = line.into();
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::log_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: Level, _line: &str) {}

/// Install the global logger. Safe to call once per page.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    init_with_capacity(level, DEFAULT_CAPACITY)
}

pub fn init_with_capacity(level: LevelFilter, capacity: usize) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(level, capacity));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit(logger: &ConsoleLogger, level: Level, msg: &str) {
        logger.log(
            &Record::builder()
                .level(level)
                .args(format_args!("{}", msg))
                .build(),
        );
    }

    #[test]
    fn test_history_keeps_newest_lines() {
        let logger = ConsoleLogger::new(LevelFilter::Debug, 3);
        for i in 0..5 {
            emit(&logger, Level::Info, &format!("[TEST] line {}", i));
        }
        assert_eq!(
            logger.recent(),
            vec!["[TEST] line 2", "[TEST] line 3", "[TEST] line 4"]
        );
    }

    #[test]
    fn test_level_filter_drops_verbose_records() {
        let logger = ConsoleLogger::new(LevelFilter::Warn, 10);
        emit(&logger, Level::Debug, "hidden");
        emit(&logger, Level::Error, "shown");
        assert_eq!(logger.recent(), vec!["shown"]);
    }

    #[test]
    fn test_zero_capacity_still_keeps_last_line() {
        let logger = ConsoleLogger::new(LevelFilter::Info, 0);
        emit(&logger, Level::Info, "a");
        emit(&logger, Level::Info, "b");
        assert_eq!(logger.recent(), vec!["b"]);
    }
}
