use std::{borrow::Cow, fmt::Write};

use chrono::{DateTime, Local};
use colored::Colorize;

use crate::{flags::LogFlags, level::Level};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Removes carriage returns and turns newlines into a literal `\n` so a message
/// always stays on one line.
pub fn escape_message(message: &str) -> Cow<'_, str> {
    if !message.contains(['\r', '\n']) {
        return Cow::Borrowed(message);
    }
    let mut escaped = String::with_capacity(message.len() + 8);
    for c in message.chars() {
        match c {
            '\r' => {}
            '\n' => escaped.push_str("\\n"),
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

fn colorize_level(level: Level, padded: &str) -> String {
    match level {
        Level::Error => padded.red(),
        Level::Warning => padded.yellow(),
        Level::Info => padded.green(),
        Level::Debug => padded.blue(),
        Level::Trace => padded.purple(),
        Level::Off => padded.normal(),
    }
    .to_string()
}

/// Renders one log line, terminated by `\n`.
///
/// `now` is only called when `flags` contains [`LogFlags::TIME`].
pub fn format_line(
    level: Level,
    identifier: &str,
    message: &str,
    flags: LogFlags,
    now: impl FnOnce() -> DateTime<Local>,
) -> String {
    let mut line = String::with_capacity(48 + identifier.len() + message.len());
    let mut sep = false;
    if flags.contains(LogFlags::TIME) {
        // writing into a String cannot fail
        let _ = write!(line, "{}", now().format(TIME_FORMAT));
        sep = true;
    }
    if flags.contains(LogFlags::LEVEL) {
        if sep {
            line.push('|');
        }
        let padded = format!("{level:<7}");
        if flags.contains(LogFlags::COLOR) {
            line.push_str(&colorize_level(level, &padded));
        } else {
            line.push_str(&padded);
        }
        sep = true;
    }
    if flags.contains(LogFlags::IDENTIFIER) {
        if sep {
            line.push('|');
        }
        let _ = write!(line, "{identifier:<15}");
        sep = true;
    }
    if sep {
        line.push('|');
    }
    line.push_str(&escape_message(message));
    line.push('\n');
    line
}
