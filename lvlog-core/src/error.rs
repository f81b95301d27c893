use thiserror::Error;

/// Error returned when a level identifier cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseLevelError {
    #[error(
        "invalid log level identifier \"{0}\" (expected: off, error, warning, info, debug or trace)"
    )]
    InvalidIdentifier(String),
}

/// Error returned when an output flags description cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFlagsError {
    #[error("unknown log flag \"{0}\" (expected: time, level, identifier, color or none)")]
    UnknownFlag(String),
}
