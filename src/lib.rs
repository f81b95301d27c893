//! # lvlog
//! Leveled logger with named handles. The active level, output flags and sink
//! can be changed at any time and apply to every existing logger.
//!
//! ## Usage
//! ```toml
//! // Cargo.toml
//! ...
//! [dependencies]
//! lvlog = "0.1.0"
//! ```
//!
//! ```rust
//! let log = lvlog::get("main");
//! lvlog::info!(log, "listening on port {}", 8080);
//! lvlog::error!(log; "lost ", 3, " packets");
//! if log.debug_enabled() {
//!     // build expensive debug output only when it is written
//! }
//! ```
//!
//! Lines look like `2024-01-15 09:05:03|INFO   |main           |listening on port 8080`.
//! Newlines inside a message are written as a literal `\n`, so a message
//! always takes exactly one line.
//!
//! ## Configuration
//! ```rust
//! use lvlog::{Level, LogFlags, SharedBuffer, logger_config};
//!
//! let buffer = SharedBuffer::new();
//! logger_config()
//!     .with_level(Level::Debug)
//!     .with_flags(LogFlags::LEVEL | LogFlags::IDENTIFIER)
//!     .with_writer(buffer.clone())
//!     .init_global();
//!
//! lvlog::get("db").debug("connected");
//! assert_eq!(buffer.to_string_lossy(), "DEBUG  |db             |connected\n");
//! ```
//!
//! The initial level and flags of the process-wide state come from the
//! `LVLOG_LEVEL` (e.g. `debug`, `warn`) and `LVLOG_FLAGS` (e.g.
//! `level|identifier`) environment variables. Output goes to stderr by default.
//!
//! ## Command line
//! ```rust
//! let flag = lvlog::LevelFlag::default();
//! flag.set("warn").expect("valid level");
//! assert_eq!(flag.to_string(), "WARNING");
//! assert_eq!(lvlog::level(), lvlog::Level::Warning);
//! ```

mod flag;
mod logger;
mod macros;

use log::{LevelFilter, Log, SetLoggerError};
pub use lvlog_core::{
    Level, LogFlags, LogState, LogWriter, ParseFlagsError, ParseLevelError, SharedBuffer,
    escape_message, format_line, open_log_file,
};
use std::{
    path::Path,
    sync::{Arc, LazyLock},
};

pub use flag::LevelFlag;
pub use logger::{Logger, Value, Values};

#[doc(hidden)]
pub mod __private {
    pub use crate::logger::{DisplayOperand, Operand, StrOperand};
}

/// Process-wide state, built from the environment on first use.
static GLOBAL_LOG_STATE: LazyLock<Arc<LogState>> =
    LazyLock::new(|| Arc::new(LogState::from_env()));

/// Returns the process-wide state.
pub fn global_state() -> Arc<LogState> {
    Arc::clone(&GLOBAL_LOG_STATE)
}

/// Creates a logger bound to the process-wide state.
///
/// Each call returns an independent handle, loggers are not deduplicated.
pub fn get(identifier: &str) -> Logger {
    Logger::with_state(identifier, global_state())
}

pub fn set_level(level: Level) {
    GLOBAL_LOG_STATE.set_level(level);
}

pub fn level() -> Level {
    GLOBAL_LOG_STATE.level()
}

pub fn set_flags(flags: LogFlags) {
    GLOBAL_LOG_STATE.set_flags(flags);
}

pub fn flags() -> LogFlags {
    GLOBAL_LOG_STATE.flags()
}

/// Sets the sink of the process-wide state.
pub fn set_writer<W: LogWriter + 'static>(writer: W) {
    GLOBAL_LOG_STATE.set_writer(writer);
}

/// `log` facade backend routing records through a [`LogState`].
///
/// The record target is used as the logger identifier.
struct LvLogger {
    state: Arc<LogState>,
}

impl Log for LvLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        self.state.enabled(metadata.level().into())
    }

    fn log(&self, record: &log::Record) {
        self.state
            .log(record.level().into(), record.target(), record.args());
    }

    fn flush(&self) {
        self.state.flush();
    }
}

/// Routes `log::error!` .. `log::trace!` through the process-wide state.
///
/// Fails if another `log` backend is already installed.
pub fn init_log_facade() -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(LvLogger {
        state: global_state(),
    }))?;
    // the state does its own filtering and its level can change at runtime
    log::set_max_level(LevelFilter::Trace);
    Ok(())
}

/// Builder for configuring a [`LogState`].
#[derive(Default)]
pub struct ConfigBuilder {
    level: Option<Level>,
    flags: Option<LogFlags>,
    writer: Option<Box<dyn LogWriter>>,
}

impl ConfigBuilder {
    /// Sets the level
    pub fn with_level(self, level: Level) -> Self {
        Self {
            level: Some(level),
            ..self
        }
    }
    /// Maybe sets the level
    pub fn maybe_with_level(self, level: Option<Level>) -> Self {
        Self { level, ..self }
    }
    /// Sets the output flags
    pub fn with_flags(self, flags: LogFlags) -> Self {
        Self {
            flags: Some(flags),
            ..self
        }
    }
    /// Sets the sink.
    pub fn with_writer<W: LogWriter + 'static>(self, writer: W) -> Self {
        Self {
            writer: Some(Box::new(writer)),
            ..self
        }
    }
    /// Appends to a log file, created if it does not exist.
    pub fn with_log_file<P: AsRef<Path>>(self, path: P) -> Result<Self, std::io::Error> {
        Ok(self.with_writer(open_log_file(path)?))
    }
    /// Maybe appends to a log file.
    pub fn maybe_with_log_file<P: AsRef<Path>>(
        self,
        path: Option<P>,
    ) -> Result<Self, std::io::Error> {
        match path {
            Some(path) => self.with_log_file(path),
            None => Ok(self),
        }
    }
    /// Builds a standalone state. Unset options take the environment defaults
    /// and stderr.
    pub fn build(self) -> Arc<LogState> {
        let state = LogState::from_env();
        self.apply(&state);
        Arc::new(state)
    }
    /// Applies the set options to the process-wide state and returns it.
    /// Unset options keep their current value.
    pub fn init_global(self) -> Arc<LogState> {
        self.apply(&GLOBAL_LOG_STATE);
        global_state()
    }

    fn apply(self, state: &LogState) {
        let Self {
            level,
            flags,
            writer,
        } = self;
        if let Some(level) = level {
            state.set_level(level);
        }
        if let Some(flags) = flags {
            state.set_flags(flags);
        }
        if let Some(writer) = writer {
            state.set_boxed_writer(writer);
        }
    }
}

/// Returns a default ConfigBuilder for configuring a logger state.
pub fn logger_config() -> ConfigBuilder {
    ConfigBuilder::default()
}
