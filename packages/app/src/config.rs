use std::path::PathBuf;

use strivex_algo::{ConfigError, ProgressionConfig};

const DB_FILE_NAME: &str = "strivex.db";

#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: PathBuf,
    pub log_level: String,
    /// Set when file logging is enabled
    pub log_dir: Option<PathBuf>,
    pub progression: ProgressionConfig,
}

impl Config {
    /// Reads the environment; unparsable values fall back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let db_path = std::env::var("STRIVEX_DB_PATH")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_db_path);

        let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let log_dir = file_logging_enabled().then(|| {
            std::env::var("LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./logs"))
        });

        let defaults = ProgressionConfig::default();
        let progression = ProgressionConfig {
            xp_per_level: env_parse("STRIVEX_XP_PER_LEVEL").unwrap_or(defaults.xp_per_level),
            completion_bonus_xp: env_parse("STRIVEX_COMPLETION_BONUS_XP")
                .unwrap_or(defaults.completion_bonus_xp),
            stat_gain_per_level: env_parse("STRIVEX_STAT_GAIN_PER_LEVEL")
                .unwrap_or(defaults.stat_gain_per_level),
            ..defaults
        };
        progression.validate()?;

        Ok(Self {
            db_path,
            log_level,
            log_dir,
            progression,
        })
    }
}

fn file_logging_enabled() -> bool {
    std::env::var("ENABLE_FILE_LOGS")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false)
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name)
        .ok()
        .and_then(|value| value.trim().parse::<T>().ok())
}

pub fn default_db_path() -> PathBuf {
    dirs::data_local_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("strivex")
        .join(DB_FILE_NAME)
}
