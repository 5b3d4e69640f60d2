use crate::error::{Error, Result};
use crate::theme::PaletteType;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE: &str = "config.toml";

/// `~/.config/termfolio`, or `None` when there is no home directory.
pub fn config_dir() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("termfolio");
        path
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatencyConfig {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            min_ms: 300,
            max_ms: 700,
        }
    }
}

impl LatencyConfig {
    pub fn window(&self) -> (Duration, Duration) {
        (
            Duration::from_millis(self.min_ms),
            Duration::from_millis(self.max_ms),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: PaletteType,
    pub sound: bool,
    pub start_in_desktop: bool,
    pub latency: LatencyConfig,
    /// Replacement for the built-in profile.
    pub profile: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: PaletteType::default(),
            sound: true,
            start_in_desktop: false,
            latency: LatencyConfig::default(),
            profile: None,
        }
    }
}

impl Config {
    pub fn default_path() -> Option<PathBuf> {
        config_dir().map(|dir| dir.join(CONFIG_FILE))
    }

    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// A missing file yields the defaults; a malformed one is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        if config.latency.min_ms > config.latency.max_ms {
            log::warn!(
                "latency.min_ms ({}) exceeds latency.max_ms ({}); the window will be swapped",
                config.latency.min_ms,
                config.latency.max_ms
            );
        }
        Ok(config)
    }
}
