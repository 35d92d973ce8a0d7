//! Console Logging
//!
//! Routes `log` records to the browser console with a `[TARGET]` prefix.

use log::{Level, Log, Metadata, Record};
use wasm_bindgen::JsValue;

use crate::config::LOG_LEVEL;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= LOG_LEVEL
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from(format_line(record.target(), &record.args().to_string()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger; later calls are ignored
pub fn init() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LOG_LEVEL);
    }
}

/// Log a failed browser call at debug level and carry on
pub fn debug_on_err<T, E: std::fmt::Debug>(action: &str, result: Result<T, E>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            log::debug!("{} failed: {:?}", action, err);
            None
        }
    }
}

/// `[BOARD] message` from a module path target like `task_board::board`
fn format_line(target: &str, message: &str) -> String {
    let tag = target
        .split("::")
        .last()
        .unwrap_or(target)
        .to_uppercase();
    format!("[{}] {}", tag, message)
}
