use std::{
    fmt,
    io,
    sync::{
        Mutex, PoisonError,
        atomic::{AtomicI32, AtomicU32, AtomicU64, Ordering},
    },
};

use chrono::Local;

use crate::{
    config::LVLOG_CONFIG, flags::LogFlags, level::Level, log_writer::LogWriter,
    utils::format_line,
};

/// Shared logger configuration: threshold, output flags and sink.
///
/// Level and flags are independent atomics read on every log call, so a
/// suppressed message costs one atomic load and a comparison. The sink sits
/// behind a mutex which is only taken to write a fully rendered line.
pub struct LogState {
    level: AtomicI32,
    flags: AtomicU32,
    writer: Mutex<Box<dyn LogWriter>>,
    write_errors: AtomicU64,
}

impl LogState {
    pub fn new<W: LogWriter + 'static>(level: Level, flags: LogFlags, writer: W) -> Self {
        Self {
            level: AtomicI32::new(level as i32),
            flags: AtomicU32::new(flags.bits()),
            writer: Mutex::new(Box::new(writer)),
            write_errors: AtomicU64::new(0),
        }
    }

    /// State writing to stderr, with level and flags taken from the environment.
    pub fn from_env() -> Self {
        Self::new(LVLOG_CONFIG.LEVEL, LVLOG_CONFIG.FLAGS, io::stderr())
    }

    pub fn set_level(&self, level: Level) {
        self.level.store(level as i32, Ordering::Relaxed);
    }

    #[inline]
    pub fn level(&self) -> Level {
        // only `set_level` stores into the atomic, so the value is always valid
        Level::from_i32(self.level.load(Ordering::Relaxed)).unwrap_or(Level::Off)
    }

    #[inline]
    pub fn enabled(&self, level: Level) -> bool {
        self.level().enables(level)
    }

    pub fn set_flags(&self, flags: LogFlags) {
        self.flags.store(flags.bits(), Ordering::Relaxed);
    }

    pub fn flags(&self) -> LogFlags {
        LogFlags::from_bits(self.flags.load(Ordering::Relaxed))
    }

    /// Replaces the sink. The previous one is flushed and dropped.
    ///
    /// The state owns the writer it is given, so dropping an owned `File`
    /// closes it. To keep using a destination after it is replaced, hand over
    /// a handle to it instead: `file.try_clone()?`, `io::stderr()` or a
    /// [`SharedBuffer`](crate::SharedBuffer) clone.
    pub fn set_writer<W: LogWriter + 'static>(&self, writer: W) {
        self.set_boxed_writer(Box::new(writer));
    }

    pub fn set_boxed_writer(&self, writer: Box<dyn LogWriter>) {
        let mut previous = writer;
        {
            let mut guard = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
            std::mem::swap(&mut *guard, &mut previous);
        }
        if previous.flush().is_err() {
            self.write_errors.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Writes one rendered line to the sink while holding the sink lock.
    ///
    /// Failures are counted in [`write_errors`](Self::write_errors) instead of
    /// being returned.
    pub fn write_line(&self, line: &str) {
        let result = self
            .writer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .write_line(line);
        if result.is_err() {
            self.write_errors.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Number of sink writes that failed since the state was created.
    pub fn write_errors(&self) -> u64 {
        self.write_errors.load(Ordering::Relaxed)
    }

    /// Renders and writes a message, without checking the threshold.
    pub fn emit(&self, level: Level, identifier: &str, message: &str) {
        let line = format_line(level, identifier, message, self.flags(), Local::now);
        self.write_line(&line);
    }

    /// Writes `message` if `level` passes the threshold. `message` is only
    /// formatted when it does.
    pub fn log(&self, level: Level, identifier: &str, message: impl fmt::Display) {
        if !self.enabled(level) {
            return;
        }
        self.emit(level, identifier, &message.to_string());
    }

    pub fn flush(&self) {
        let result = self.writer.lock().unwrap_or_else(PoisonError::into_inner).flush();
        if result.is_err() {
            self.write_errors.fetch_add(1, Ordering::Relaxed);
        }
    }
}

impl Default for LogState {
    fn default() -> Self {
        Self::new(Level::Info, LogFlags::DEFAULT, io::stderr())
    }
}

impl fmt::Debug for LogState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogState")
            .field("level", &self.level())
            .field("flags", &self.flags())
            .field("write_errors", &self.write_errors())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::{io::Write, sync::Arc};

    use super::*;
    use crate::log_writer::SharedBuffer;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct FailingFlush;

    impl Write for FailingFlush {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            Ok(buf.len())
        }
        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    fn state(level: Level) -> (LogState, SharedBuffer) {
        let buffer = SharedBuffer::new();
        let state = LogState::new(level, LogFlags::LEVEL | LogFlags::IDENTIFIER, buffer.clone());
        (state, buffer)
    }

    #[test]
    fn level_and_flags_round_trip() {
        let (state, _) = state(Level::Info);
        for level in Level::ALL {
            state.set_level(level);
            assert_eq!(state.level(), level);
        }
        state.set_flags(LogFlags::from_bits(0xff));
        assert_eq!(state.flags().bits(), 0xff);
    }

    #[test]
    fn log_gates_on_threshold() {
        let (state, buffer) = state(Level::Info);
        state.log(Level::Error, "test1", "x");
        state.log(Level::Trace, "test1", "hidden");
        assert_eq!(buffer.to_string_lossy(), "ERROR  |test1          |x\n");
        state.set_level(Level::Off);
        state.log(Level::Error, "test1", "hidden");
        state.log(Level::Off, "test1", "hidden");
        assert_eq!(buffer.to_string_lossy(), "ERROR  |test1          |x\n");
    }

    #[test]
    fn set_writer_redirects_output() {
        let (state, first) = state(Level::Info);
        state.log(Level::Info, "a", "one");
        let second = SharedBuffer::new();
        state.set_writer(second.clone());
        state.log(Level::Info, "a", "two");
        assert_eq!(first.to_string_lossy(), "INFO   |a              |one\n");
        assert_eq!(second.to_string_lossy(), "INFO   |a              |two\n");
    }

    #[test]
    fn write_errors_are_counted() {
        let state = LogState::new(Level::Info, LogFlags::NONE, BrokenPipe);
        state.log(Level::Error, "a", "lost");
        state.log(Level::Warning, "a", "lost");
        state.log(Level::Debug, "a", "suppressed");
        assert_eq!(state.write_errors(), 2);
    }

    #[test]
    fn failed_flush_of_replaced_writer_is_counted() {
        let state = LogState::new(Level::Info, LogFlags::NONE, FailingFlush);
        assert_eq!(state.write_errors(), 0);
        state.set_writer(SharedBuffer::new());
        assert_eq!(state.write_errors(), 1);
        state.log(Level::Info, "a", "fine");
        assert_eq!(state.write_errors(), 1);
    }

    #[test]
    fn replaced_file_handle_leaves_file_open() {
        let path = std::env::temp_dir()
            .join(format!("lvlog_replaced_file_{}.log", std::process::id()));
        std::fs::remove_file(&path).ok();
        let mut file = crate::log_writer::open_log_file(&path).unwrap();
        let state = LogState::new(Level::Info, LogFlags::NONE, file.try_clone().unwrap());
        state.log(Level::Info, "a", "from state");
        state.set_writer(SharedBuffer::new());
        file.write_all(b"from owner\n").unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "from state\nfrom owner\n"
        );
        assert_eq!(state.write_errors(), 0);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn concurrent_lines_do_not_interleave() {
        let (state, buffer) = state(Level::Trace);
        let state = Arc::new(state);
        let handles: Vec<_> = (0..16)
            .map(|i| {
                let state = Arc::clone(&state);
                std::thread::spawn(move || {
                    state.log(Level::Debug, &format!("worker{i}"), "x".repeat(4096));
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        let output = buffer.to_string_lossy();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 16);
        for line in lines {
            assert!(line.starts_with("DEBUG  |worker"), "{line}");
            assert!(line.ends_with(&"x".repeat(4096)));
        }
        assert_eq!(output.matches('\n').count(), 16);
    }
}
