//! Per-level logging macros.
//!
//! Each macro accepts two forms:
//! - `info!(logger; a, b, c)` concatenates the displayed values. A space is
//!   inserted between two neighbours when neither is a string (`&str`,
//!   `String` or `&String`).
//! - `info!(logger, "format {}", x)` formats like [`format!`].
//!
//! Nothing is formatted when the level is disabled.

/// Logs at `Error` level through a [`Logger`](crate::Logger).
#[macro_export]
macro_rules! error {
    ($logger:expr; $($value:expr),+ $(,)?) => {
        {
            #[allow(unused_imports)]
            use $crate::__private::{DisplayOperand as _, StrOperand as _};
            $logger.error($crate::Values(&[$((&$crate::__private::Operand(&$value)).lvlog_value()),+]));
        }
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.errorf(::std::format_args!($($arg)+))
    };
}

/// Logs at `Warning` level through a [`Logger`](crate::Logger).
#[macro_export]
macro_rules! warning {
    ($logger:expr; $($value:expr),+ $(,)?) => {
        {
            #[allow(unused_imports)]
            use $crate::__private::{DisplayOperand as _, StrOperand as _};
            $logger.warning($crate::Values(&[$((&$crate::__private::Operand(&$value)).lvlog_value()),+]));
        }
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.warningf(::std::format_args!($($arg)+))
    };
}

/// Logs at `Info` level through a [`Logger`](crate::Logger).
#[macro_export]
macro_rules! info {
    ($logger:expr; $($value:expr),+ $(,)?) => {
        {
            #[allow(unused_imports)]
            use $crate::__private::{DisplayOperand as _, StrOperand as _};
            $logger.info($crate::Values(&[$((&$crate::__private::Operand(&$value)).lvlog_value()),+]));
        }
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.infof(::std::format_args!($($arg)+))
    };
}

/// Logs at `Debug` level through a [`Logger`](crate::Logger).
#[macro_export]
macro_rules! debug {
    ($logger:expr; $($value:expr),+ $(,)?) => {
        {
            #[allow(unused_imports)]
            use $crate::__private::{DisplayOperand as _, StrOperand as _};
            $logger.debug($crate::Values(&[$((&$crate::__private::Operand(&$value)).lvlog_value()),+]));
        }
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.debugf(::std::format_args!($($arg)+))
    };
}

/// Logs at `Trace` level through a [`Logger`](crate::Logger).
#[macro_export]
macro_rules! trace {
    ($logger:expr; $($value:expr),+ $(,)?) => {
        {
            #[allow(unused_imports)]
            use $crate::__private::{DisplayOperand as _, StrOperand as _};
            $logger.trace($crate::Values(&[$((&$crate::__private::Operand(&$value)).lvlog_value()),+]));
        }
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.tracef(::std::format_args!($($arg)+))
    };
}
