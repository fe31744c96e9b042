use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use lazy_static::lazy_static;

use crate::challenge::DAILY_CHALLENGE_SIZE;
use crate::error::SpellError;
use crate::logging::LogFormat;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory backing the durable key-value store
    pub data_dir: PathBuf,
    /// Number of words in a daily challenge
    pub challenge_size: usize,
    pub log_format: LogFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            data_dir: super::app_data_dir().join("data"),
            challenge_size: DAILY_CHALLENGE_SIZE,
            log_format: LogFormat::Text,
        }
    }
}

impl Settings {
    /// Parse settings from TOML text; absent keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Settings, SpellError> {
        Ok(toml::from_str::<Settings>(content)?)
    }
}

pub fn get_config_path() -> PathBuf {
    super::app_data_dir().join("spelldeck.toml")
}

fn load_settings_internal() -> Settings {
    let config_path = get_config_path();

    match fs::read_to_string(&config_path) {
        Ok(content) => match Settings::from_toml_str(&content) {
            Ok(settings) => settings,
            Err(e) => {
                eprintln!("[Config] Failed to parse {:?}, using defaults: {}", config_path, e);
                Settings::default()
            }
        },
        Err(_) => Settings::default(),
    }
}

lazy_static! {
    static ref SETTINGS: Settings = load_settings_internal();
}

/// Get the cached settings (loaded once on first access)
pub fn get_settings() -> &'static Settings {
    &SETTINGS
}
