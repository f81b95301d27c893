//! # lvlog-core
//! Core utilities for lvlog - levels, output flags, line formatting and the
//! shared logger state.

mod config;
mod error;
mod flags;
mod level;
mod log_writer;
mod state;
mod utils;

pub use config::{LVLOG_CONFIG, LvLogConfig};
pub use error::{ParseFlagsError, ParseLevelError};
pub use flags::LogFlags;
pub use level::Level;
pub use log_writer::{LogWriter, SharedBuffer, open_log_file};
pub use state::LogState;
pub use utils::{escape_message, format_line};
