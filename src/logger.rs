use std::{fmt, sync::Arc};

use lvlog_core::{Level, LogState};

/// One operand of the values form, tagged with whether it is a string.
#[derive(Clone, Copy)]
pub struct Value<'a> {
    value: &'a dyn fmt::Display,
    is_str: bool,
}

impl<'a> Value<'a> {
    pub fn display(value: &'a dyn fmt::Display) -> Self {
        Self {
            value,
            is_str: false,
        }
    }

    pub fn string(value: &'a dyn fmt::Display) -> Self {
        Self {
            value,
            is_str: true,
        }
    }
}

/// Displays a list of values back to back. A space goes between two
/// neighbours when neither of them is a string, so `1, 2, "a", 3` renders as
/// `1 2a3`.
///
/// Built by the `error!(logger; a, b, ...)` family of macros.
pub struct Values<'a>(pub &'a [Value<'a>]);

impl fmt::Display for Values<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut prev_is_str = true;
        for Value { value, is_str } in self.0 {
            if !is_str && !prev_is_str {
                f.write_str(" ")?;
            }
            write!(f, "{value}")?;
            prev_is_str = *is_str;
        }
        Ok(())
    }
}

/// Macro support: picks [`Value::string`] for string operands and
/// [`Value::display`] for everything else through method resolution order.
#[doc(hidden)]
pub struct Operand<'a, T>(pub &'a T);

#[doc(hidden)]
pub trait StrOperand {
    fn lvlog_value(&self) -> Value<'_>;
}

impl StrOperand for Operand<'_, &str> {
    fn lvlog_value(&self) -> Value<'_> {
        Value::string(self.0)
    }
}

impl StrOperand for Operand<'_, String> {
    fn lvlog_value(&self) -> Value<'_> {
        Value::string(self.0)
    }
}

impl StrOperand for Operand<'_, &String> {
    fn lvlog_value(&self) -> Value<'_> {
        Value::string(self.0)
    }
}

#[doc(hidden)]
pub trait DisplayOperand {
    fn lvlog_value(&self) -> Value<'_>;
}

impl<T: fmt::Display> DisplayOperand for &Operand<'_, T> {
    fn lvlog_value(&self) -> Value<'_> {
        Value::display(self.0)
    }
}

/// Named handle used to emit log messages.
///
/// A logger only holds its identifier and the state it writes through. The
/// threshold is read from the state on every call, so level changes apply to
/// existing loggers immediately. Cloning is cheap.
#[derive(Clone)]
pub struct Logger {
    identifier: Arc<str>,
    state: Arc<LogState>,
}

macro_rules! level_methods {
    ($($level:ident => $enabled:ident, $log:ident, $logf:ident;)*) => {
        $(
            #[doc = concat!("Whether a `", stringify!($level), "` message would be written.")]
            #[inline]
            pub fn $enabled(&self) -> bool {
                self.state.enabled(Level::$level)
            }

            #[doc = concat!("Logs `value` at `", stringify!($level), "` level.")]
            pub fn $log(&self, value: impl fmt::Display) {
                self.log(Level::$level, value);
            }

            #[doc = concat!("Logs formatted arguments at `", stringify!($level), "` level.")]
            pub fn $logf(&self, args: fmt::Arguments<'_>) {
                self.log(Level::$level, args);
            }
        )*
    };
}

impl Logger {
    /// Creates a logger writing through `state`.
    pub fn with_state(identifier: &str, state: Arc<LogState>) -> Self {
        Self {
            identifier: identifier.into(),
            state,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn state(&self) -> &Arc<LogState> {
        &self.state
    }

    #[inline]
    pub fn enabled(&self, level: Level) -> bool {
        self.state.enabled(level)
    }

    /// Logs `value` at `level`. `value` is only converted to a string when the
    /// level is enabled; logging at [`Level::Off`] does nothing.
    pub fn log(&self, level: Level, value: impl fmt::Display) {
        self.state.log(level, &self.identifier, value);
    }

    pub fn logf(&self, level: Level, args: fmt::Arguments<'_>) {
        self.state.log(level, &self.identifier, args);
    }

    level_methods! {
        Error => error_enabled, error, errorf;
        Warning => warning_enabled, warning, warningf;
        Info => info_enabled, info, infof;
        Debug => debug_enabled, debug, debugf;
        Trace => trace_enabled, trace, tracef;
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("identifier", &self.identifier)
            .finish_non_exhaustive()
    }
}
