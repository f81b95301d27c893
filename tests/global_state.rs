use std::sync::{Mutex, MutexGuard, PoisonError};

use lvlog::{Level, LevelFlag, LogFlags, SharedBuffer, logger_config};

/// Tests in this file share the process-wide state.
static GLOBAL: Mutex<()> = Mutex::new(());

fn lock_global() -> MutexGuard<'static, ()> {
    GLOBAL.lock().unwrap_or_else(PoisonError::into_inner)
}

fn capture(level: Level, flags: LogFlags) -> SharedBuffer {
    let buffer = SharedBuffer::new();
    logger_config()
        .with_level(level)
        .with_flags(flags)
        .with_writer(buffer.clone())
        .init_global();
    buffer
}

#[test]
fn error_and_suppressed_trace() {
    let _guard = lock_global();
    let buffer = capture(Level::Info, LogFlags::LEVEL | LogFlags::IDENTIFIER);
    let log = lvlog::get("test1");
    log.error("x");
    assert_eq!(buffer.to_string_lossy(), "ERROR  |test1          |x\n");
    let before = buffer.len();
    log.trace("not written");
    lvlog::trace!(log, "not written {}", 1);
    assert_eq!(buffer.len(), before);
}

#[test]
fn embedded_newlines_stay_on_one_line() {
    let _guard = lock_global();
    let buffer = capture(Level::Info, LogFlags::LEVEL | LogFlags::IDENTIFIER);
    lvlog::get("test2").info("1st line\r\n2nd line");
    assert_eq!(
        buffer.to_string_lossy(),
        "INFO   |test2          |1st line\\n2nd line\n"
    );
}

#[test]
fn global_setters_round_trip() {
    let _guard = lock_global();
    let _buffer = capture(Level::Info, LogFlags::DEFAULT);
    for level in Level::ALL {
        lvlog::set_level(level);
        assert_eq!(lvlog::level(), level);
    }
    lvlog::set_flags(LogFlags::TIME);
    assert_eq!(lvlog::flags(), LogFlags::TIME);
}

#[test]
fn level_flag_drives_global_level() {
    let _guard = lock_global();
    let _buffer = capture(Level::Info, LogFlags::DEFAULT);
    let flag = LevelFlag::default();
    for level in Level::ALL {
        flag.set(&level.as_str().to_lowercase()).unwrap();
        assert_eq!(lvlog::level(), level);
        assert_eq!(flag.to_string(), level.as_str());
    }
    assert!(flag.set("warnings").is_err());
    assert_eq!(lvlog::level(), Level::Trace);
}

#[test]
fn existing_loggers_follow_reconfiguration() {
    let _guard = lock_global();
    let first = capture(Level::Error, LogFlags::IDENTIFIER);
    let log = lvlog::get("svc");
    log.warning("dropped");
    assert!(first.is_empty());

    let second = SharedBuffer::new();
    lvlog::set_writer(second.clone());
    lvlog::set_level(Level::Warning);
    log.warning("kept");
    assert!(first.is_empty());
    assert_eq!(second.to_string_lossy(), "svc            |kept\n");
}

#[test]
fn concurrent_writers_produce_whole_lines() {
    let _guard = lock_global();
    let buffer = capture(Level::Debug, LogFlags::LEVEL | LogFlags::IDENTIFIER);
    let n = 32;
    let handles: Vec<_> = (0..n)
        .map(|i| {
            std::thread::spawn(move || {
                let log = lvlog::get(&format!("thread {i}"));
                lvlog::debug!(log, "payload {i} {}", "y".repeat(1000));
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    let output = buffer.to_string_lossy();
    assert!(output.ends_with('\n'));
    let mut seen: Vec<usize> = output
        .lines()
        .map(|line| {
            assert!(line.starts_with("DEBUG  |thread "), "{line}");
            assert!(line.ends_with(&"y".repeat(1000)), "{line}");
            let (_, rest) = line.split_once("|payload ").unwrap();
            rest.split_once(' ').unwrap().0.parse().unwrap()
        })
        .collect();
    seen.sort_unstable();
    assert_eq!(seen, (0..n).collect::<Vec<_>>());
}

#[test]
fn built_state_is_independent_of_global() {
    let path = std::env::temp_dir().join(format!("lvlog_built_state_{}.log", std::process::id()));
    std::fs::remove_file(&path).ok();
    let state = logger_config()
        .maybe_with_level(Some(Level::Trace))
        .with_flags(LogFlags::LEVEL)
        .maybe_with_log_file(Some(&path))
        .unwrap()
        .build();
    assert!(!std::sync::Arc::ptr_eq(&state, &lvlog::global_state()));

    let log = lvlog::Logger::with_state("file", state.clone());
    lvlog::trace!(log; "to ", "file");
    state.flush();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "TRACE  |to file\n");
    assert_eq!(state.write_errors(), 0);
    std::fs::remove_file(&path).ok();
}
