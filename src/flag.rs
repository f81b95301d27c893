use std::{fmt, sync::Arc};

use lvlog_core::{Level, LogState, ParseLevelError};

/// Textual binding of a state's level, for command line and config parsers.
///
/// `to_string()` renders the active level, [`set`](Self::set) parses an
/// identifier (`off`, `err`, `i`, `TRACE`, ...) and makes it the active level.
/// Argument parsers that work on [`FromStr`](std::str::FromStr) can use
/// [`Level`] directly and hand the result to [`crate::set_level`].
#[derive(Clone, Debug)]
pub struct LevelFlag {
    state: Arc<LogState>,
}

impl LevelFlag {
    /// Binding for the given state.
    pub fn new(state: Arc<LogState>) -> Self {
        Self { state }
    }

    pub fn get(&self) -> Level {
        self.state.level()
    }

    /// Parses `value` and applies it. On error the active level is unchanged.
    pub fn set(&self, value: &str) -> Result<(), ParseLevelError> {
        let level = Level::parse(value)?;
        self.state.set_level(level);
        Ok(())
    }
}

/// Binding for the process-wide state.
impl Default for LevelFlag {
    fn default() -> Self {
        Self::new(crate::global_state())
    }
}

impl fmt::Display for LevelFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.get(), f)
    }
}
