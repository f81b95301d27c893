use std::{fmt, str::FromStr};

use log::LevelFilter;

use crate::error::ParseLevelError;

/// Severity of a log message, and the threshold a state filters against.
///
/// Levels are ordered from the most restrictive to the most verbose:
/// `Off < Error < Warning < Info < Debug < Trace`. A message at level `x` is
/// written iff the active threshold `t` satisfies `t >= x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(i32)]
pub enum Level {
    Off = 0,
    Error = 1,
    Warning = 2,
    Info = 3,
    Debug = 4,
    Trace = 5,
}

impl Level {
    /// All levels in enumeration order.
    pub const ALL: [Level; 6] = [
        Level::Off,
        Level::Error,
        Level::Warning,
        Level::Info,
        Level::Debug,
        Level::Trace,
    ];

    /// Canonical uppercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Off => "OFF",
            Level::Error => "ERROR",
            Level::Warning => "WARNING",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
        }
    }

    /// Parses a level identifier.
    ///
    /// Case is ignored and identifiers can be shortened (`err`, `i`, `tr`).
    /// Candidates are tried in enumeration order, the first canonical name
    /// starting with the given text wins.
    pub fn parse(text: &str) -> Result<Level, ParseLevelError> {
        if text.is_empty() {
            return Err(ParseLevelError::InvalidIdentifier(String::new()));
        }
        let upper = text.to_uppercase();
        Level::ALL
            .into_iter()
            .find(|level| level.as_str().starts_with(&upper))
            .ok_or_else(|| ParseLevelError::InvalidIdentifier(text.into()))
    }

    pub const fn from_i32(value: i32) -> Option<Level> {
        match value {
            0 => Some(Level::Off),
            1 => Some(Level::Error),
            2 => Some(Level::Warning),
            3 => Some(Level::Info),
            4 => Some(Level::Debug),
            5 => Some(Level::Trace),
            _ => None,
        }
    }

    /// Whether a message at `message_level` passes this threshold.
    #[inline]
    pub fn enables(self, message_level: Level) -> bool {
        message_level != Level::Off && self >= message_level
    }

    /// The `log` crate filter letting through the same records.
    pub const fn to_level_filter(self) -> LevelFilter {
        match self {
            Level::Off => LevelFilter::Off,
            Level::Error => LevelFilter::Error,
            Level::Warning => LevelFilter::Warn,
            Level::Info => LevelFilter::Info,
            Level::Debug => LevelFilter::Debug,
            Level::Trace => LevelFilter::Trace,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` keeps width/alignment specifiers working, the formatter relies on it
        f.pad(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::parse(s)
    }
}

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Level::Error,
            log::Level::Warn => Level::Warning,
            log::Level::Info => Level::Info,
            log::Level::Debug => Level::Debug,
            log::Level::Trace => Level::Trace,
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Level {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Level {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        Level::parse(&text).map_err(serde::de::Error::custom)
    }
}
