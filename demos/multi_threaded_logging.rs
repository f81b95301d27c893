use lvlog::{Level, LevelFlag, logger_config};

fn main() {
    // e.g. `cargo run --example multi_threaded_logging -- debug`
    let flag = LevelFlag::default();
    if let Some(level) = std::env::args().nth(1) {
        if let Err(err) = flag.set(&level) {
            eprintln!("{err}");
            std::process::exit(2);
        }
    }
    logger_config()
        .with_log_file(std::env::temp_dir().join("lvlog_demo.log"))
        .expect("Unable to open log file")
        .init_global();

    let log = lvlog::get("main");
    lvlog::info!(log, "level is {flag}");
    let handles: Vec<_> = (0..5)
        .map(|i| {
            std::thread::spawn(move || {
                let log = lvlog::get(&format!("thread {i}"));
                lvlog::warning!(log; "hello from thread ", i);
                lvlog::debug!(log, "multi\nline message from thread {i}");
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    lvlog::set_level(Level::Error);
    log.info("not written");
    log.error("done");
}
