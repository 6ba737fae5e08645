use derive_more::{AsRef, Deref, Display, From, Into};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct WindowTitle(String);

impl WindowTitle {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }
}

impl Default for WindowTitle {
    fn default() -> Self {
        Self::new("Dartboard")
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: i32,
    pub height: i32,
    pub title: WindowTitle,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 600,
            title: WindowTitle::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Side length of exported PNGs, in pixels.
    pub size: u32,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { size: 512 }
    }
}

/// Host settings only; the board itself is not configurable.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Config I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub fn get_config_path() -> Result<std::path::PathBuf, ConfigError> {
    let proj_dirs = ProjectDirs::from("org", "dartboard", "dartboard")
        .ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

/// `DARTBOARD_<SECTION>__<KEY>`, e.g. `DARTBOARD_WINDOW__WIDTH=800`.
fn environment() -> config::Environment {
    config::Environment::with_prefix("DARTBOARD")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

pub fn load_config() -> Result<Config, ConfigError> {
    let config_path = get_config_path()?;

    let s = config::Config::builder()
        .add_source(config::File::from(config_path).required(false))
        .add_source(environment())
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn load_or_default() -> Config {
    match load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Using default config: {}", e);
            Config::default()
        }
    }
}

/// Writes the bundled config unless one already exists; returns its location either way.
pub fn write_default_config() -> Result<std::path::PathBuf, ConfigError> {
    let path = get_config_path()?;

    if path.exists() {
        log::info!("Keeping existing config at {}", path.display());
        return Ok(path);
    }

    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    fs_err::write(&path, DEFAULT_CONFIG)?;
    log::info!("Wrote default config to {}", path.display());
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");
