use std::{
    ops::{BitAnd, BitOr, BitOrAssign},
    str::FromStr,
};

use crate::error::ParseFlagsError;

/// Selects the optional fields prefixed to each log line.
///
/// Fields are always rendered in the order time, level, identifier. Bits
/// without a meaning are kept but ignored by the formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LogFlags(u32);

impl LogFlags {
    pub const NONE: LogFlags = LogFlags(0);
    /// Local timestamp `YYYY-MM-DD HH:MM:SS`.
    pub const TIME: LogFlags = LogFlags(1);
    /// Level name, padded to 7 characters.
    pub const LEVEL: LogFlags = LogFlags(1 << 1);
    /// Logger identifier, padded to 15 characters.
    pub const IDENTIFIER: LogFlags = LogFlags(1 << 2);
    /// Colorize the level field. Only meaningful together with `LEVEL`.
    pub const COLOR: LogFlags = LogFlags(1 << 3);
    pub const DEFAULT: LogFlags = LogFlags(Self::TIME.0 | Self::LEVEL.0 | Self::IDENTIFIER.0);

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn contains(self, flag: LogFlags) -> bool {
        self.0 & flag.0 == flag.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for LogFlags {
    type Output = LogFlags;
    fn bitor(self, rhs: Self) -> Self::Output {
        LogFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for LogFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for LogFlags {
    type Output = LogFlags;
    fn bitand(self, rhs: Self) -> Self::Output {
        LogFlags(self.0 & rhs.0)
    }
}

/// Accepts either a decimal bit value (`"6"`) or flag names separated by `|`
/// or `,` (`"level|identifier"`). Names are case-insensitive.
impl FromStr for LogFlags {
    type Err = ParseFlagsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(bits) = s.parse::<u32>() {
            return Ok(LogFlags(bits));
        }
        let mut flags = LogFlags::NONE;
        for name in s.split(['|', ',']).map(str::trim).filter(|n| !n.is_empty()) {
            flags |= match name.to_lowercase().as_str() {
                "none" => LogFlags::NONE,
                "time" => LogFlags::TIME,
                "level" => LogFlags::LEVEL,
                "identifier" | "id" => LogFlags::IDENTIFIER,
                "color" => LogFlags::COLOR,
                _ => return Err(ParseFlagsError::UnknownFlag(name.into())),
            };
        }
        Ok(flags)
    }
}

#[test]
fn test_flags_combine() {
    let flags = LogFlags::LEVEL | LogFlags::IDENTIFIER;
    assert!(flags.contains(LogFlags::LEVEL));
    assert!(flags.contains(LogFlags::IDENTIFIER));
    assert!(!flags.contains(LogFlags::TIME));
    assert_eq!(flags.bits(), 6);
    assert_eq!(flags & LogFlags::LEVEL, LogFlags::LEVEL);
    assert!(LogFlags::NONE.is_empty());
    assert!(LogFlags::DEFAULT.contains(LogFlags::TIME | LogFlags::LEVEL | LogFlags::IDENTIFIER));
    assert!(!LogFlags::DEFAULT.contains(LogFlags::COLOR));
}

#[test]
fn test_flags_from_str() {
    assert_eq!(
        "level|identifier".parse::<LogFlags>().unwrap(),
        LogFlags::LEVEL | LogFlags::IDENTIFIER
    );
    assert_eq!("Time, ID".parse::<LogFlags>().unwrap(), LogFlags::TIME | LogFlags::IDENTIFIER);
    assert_eq!("7".parse::<LogFlags>().unwrap(), LogFlags::DEFAULT);
    assert_eq!("none".parse::<LogFlags>().unwrap(), LogFlags::NONE);
    assert_eq!("".parse::<LogFlags>().unwrap(), LogFlags::NONE);
    assert_eq!(
        "level|stack".parse::<LogFlags>(),
        Err(ParseFlagsError::UnknownFlag("stack".into()))
    );
}
