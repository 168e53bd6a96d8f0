use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub font: FontSettings,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct FontSettings {
    /// Preferred font family for default-font selection.
    pub family: Option<String>,
    /// Pixel size used when the caller does not give one.
    pub size: Option<u32>,
    /// Overrides platform font-directory resolution. Useful in containers
    /// and test environments that have no system font directory.
    pub directory: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Self {
        let config_path = match config_file_path() {
            Some(path) => path,
            None => return Config::default(),
        };

        if !config_path.exists() {
            return Config::default();
        }

        let content = match fs::read_to_string(&config_path) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("Failed to read config file: {}", e);
                return Config::default();
            }
        };

        match toml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Failed to parse config file: {}", e);
                Config::default()
            }
        }
    }
}

fn config_file_path() -> Option<PathBuf> {
    if let Some(config_dir) = std::env::var_os("XDG_CONFIG_HOME") {
        Some(
            PathBuf::from(config_dir)
                .join("sysfonts")
                .join("config.toml"),
        )
    } else if let Some(home) = std::env::var_os("HOME") {
        Some(
            PathBuf::from(home)
                .join(".config")
                .join("sysfonts")
                .join("config.toml"),
        )
    } else {
        None
    }
}
