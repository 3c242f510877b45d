//! File logging for folio.
//!
//! The terminal belongs to the UI, so every record is appended to
//! `~/.folio/folio.log` (truncated on startup).
//!
//! Levels, most to least severe:
//! - ERROR: an operation could not complete (terminal setup, opener spawn)
//! - WARN: a recoverable surprise (opener exited non-zero)
//! - INFO: startup, shutdown, view switches
//! - DEBUG: dispatched commands, location changes, timer lifecycle
//! - TRACE: per-tick and per-key noise
//!
//! Debug mode is enabled with `--debug` or `FOLIO_DEBUG=1`.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::OnceLock;

static LOG_PATH: OnceLock<PathBuf> = OnceLock::new();
static LOG_LEVEL: AtomicU8 = AtomicU8::new(LogLevel::Info as u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum LogLevel {
    Error = 0,
    Warn = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
        }
    }

    fn from_u8(v: u8) -> Self {
        match v {
            0 => LogLevel::Error,
            1 => LogLevel::Warn,
            2 => LogLevel::Info,
            3 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }
}

/// Initialize logging with explicit debug mode setting.
///
/// `FOLIO_DEBUG=1` (or `true`) turns debug mode on even when `debug` is false.
pub fn init_with_debug(debug: bool) {
    let env_debug = std::env::var("FOLIO_DEBUG")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if let Some(dir) = dirs::home_dir().map(|h| h.join(".folio")) {
        let _ = std::fs::create_dir_all(&dir);
        init_at(&dir.join("folio.log"), debug || env_debug);
    }
}

/// Point the logger at `path`, truncating it. Only the first call wins.
pub fn init_at(path: &Path, debug: bool) {
    let level = if debug { LogLevel::Debug } else { LogLevel::Info };
    LOG_LEVEL.store(level as u8, Ordering::SeqCst);

    let _ = std::fs::write(path, "");
    LOG_PATH.set(path.to_path_buf()).ok();
}

pub fn get_level() -> LogLevel {
    LogLevel::from_u8(LOG_LEVEL.load(Ordering::Relaxed))
}

/// Append one record if `level` passes the current filter.
pub fn log_at(level: LogLevel, msg: &str) {
    if level > get_level() {
        return;
    }

    let Some(path) = LOG_PATH.get() else { return };
    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
        let timestamp = chrono::Local::now().format("%H:%M:%S%.3f");
        let _ = writeln!(file, "[{}] [{}] {}", timestamp, level.as_str(), msg);
    }
}

#[macro_export]
macro_rules! flog {
    ($($arg:tt)*) => {
        $crate::log::log_at($crate::log::LogLevel::Info, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! flog_error {
    ($($arg:tt)*) => {
        $crate::log::log_at($crate::log::LogLevel::Error, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! flog_warn {
    ($($arg:tt)*) => {
        $crate::log::log_at($crate::log::LogLevel::Warn, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! flog_debug {
    ($($arg:tt)*) => {
        $crate::log::log_at($crate::log::LogLevel::Debug, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! flog_trace {
    ($($arg:tt)*) => {
        $crate::log::log_at($crate::log::LogLevel::Trace, &format!($($arg)*))
    };
}
