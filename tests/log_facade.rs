use lvlog::{Level, LogFlags, SharedBuffer, logger_config};

// The facade can only be installed once per process, so this file holds a
// single test.
#[test]
fn log_macros_go_through_the_global_state() {
    let buffer = SharedBuffer::new();
    logger_config()
        .with_level(Level::Warning)
        .with_flags(LogFlags::LEVEL | LogFlags::IDENTIFIER)
        .with_writer(buffer.clone())
        .init_global();
    lvlog::init_log_facade().unwrap();
    assert!(lvlog::init_log_facade().is_err());

    log::warn!(target: "facade", "careful");
    log::info!(target: "facade", "hidden");
    assert!(log::log_enabled!(target: "facade", log::Level::Error));
    assert!(!log::log_enabled!(target: "facade", log::Level::Info));

    lvlog::set_level(Level::Trace);
    log::trace!(target: "facade", "now visible");
    assert_eq!(
        buffer.to_string_lossy(),
        "WARNING|facade         |careful\nTRACE  |facade         |now visible\n"
    );
}
