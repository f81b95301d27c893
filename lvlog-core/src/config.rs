use std::sync::LazyLock;

use derive_from_env::FromEnv;

use crate::{flags::LogFlags, level::Level};

/// Initial state settings, read from `LVLOG_LEVEL` and `LVLOG_FLAGS`.
#[derive(FromEnv)]
#[from_env(prefix = "LVLOG")]
#[allow(non_snake_case)]
pub struct LvLogConfig {
    #[from_env(default = "info")]
    pub LEVEL: Level,
    #[from_env(default = "time|level|identifier")]
    pub FLAGS: LogFlags,
}

impl Default for LvLogConfig {
    fn default() -> Self {
        Self {
            LEVEL: Level::Info,
            FLAGS: LogFlags::DEFAULT,
        }
    }
}

impl LvLogConfig {
    /// Reads the environment. Invalid values fall back to the defaults.
    pub fn from_env_or_default() -> Self {
        Self::from_env().unwrap_or_default()
    }
}

pub static LVLOG_CONFIG: LazyLock<LvLogConfig> = LazyLock::new(LvLogConfig::from_env_or_default);

#[test]
fn test_default_config() {
    let config = LvLogConfig::default();
    assert_eq!(config.LEVEL, Level::Info);
    assert_eq!(config.FLAGS, LogFlags::DEFAULT);
}

#[test]
fn test_config_from_env() {
    // SAFETY: no other test in this crate reads or writes the LVLOG_* variables
    unsafe {
        std::env::set_var("LVLOG_LEVEL", "deb");
        std::env::set_var("LVLOG_FLAGS", "level|identifier");
    }
    let config = LvLogConfig::from_env().unwrap();
    assert_eq!(config.LEVEL, Level::Debug);
    assert_eq!(config.FLAGS, LogFlags::LEVEL | LogFlags::IDENTIFIER);

    unsafe {
        std::env::set_var("LVLOG_LEVEL", "loud");
        std::env::set_var("LVLOG_FLAGS", "level");
    }
    assert!(LvLogConfig::from_env().is_err());
    let config = LvLogConfig::from_env_or_default();
    assert_eq!(config.LEVEL, Level::Info);
    assert_eq!(config.FLAGS, LogFlags::DEFAULT);

    unsafe {
        std::env::remove_var("LVLOG_LEVEL");
        std::env::remove_var("LVLOG_FLAGS");
    }
    let config = LvLogConfig::from_env().unwrap();
    assert_eq!(config.LEVEL, Level::Info);
    assert_eq!(config.FLAGS, LogFlags::DEFAULT);
}
