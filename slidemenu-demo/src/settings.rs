use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use slidemenu::Settings;
use thiserror::Error;

/// Environment variable naming an optional JSON settings file.
pub(crate) const SETTINGS_ENV: &str = "SLIDEMENU_SETTINGS";

const DEFAULT_WINDOW_WIDTH: f32 = 420.0;
const DEFAULT_WINDOW_HEIGHT: f32 = 760.0;

/// Errors emitted while reading demo settings.
#[derive(Debug, Error)]
pub(crate) enum SettingsError {
    #[error("settings IO failed")]
    Io(#[from] std::io::Error),
    #[error("settings JSON failed")]
    Json(#[from] serde_json::Error),
}

/// Initial window extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct WindowConfig {
    pub(crate) width: f32,
    pub(crate) height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

/// Everything the demo reads from its settings file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct DemoConfig {
    pub(crate) window: WindowConfig,
    pub(crate) menu: Settings,
}

/// Load the file named by [`SETTINGS_ENV`], or defaults when unset.
pub(crate) fn load_config() -> Result<DemoConfig, SettingsError> {
    match settings_path() {
        Some(path) => load_config_from_path(&path),
        None => Ok(DemoConfig::default()),
    }
}

/// Load settings, logging and falling back to defaults on failure.
pub(crate) fn load_config_or_default() -> DemoConfig {
    match load_config() {
        Ok(config) => config,
        Err(err) => {
            log::warn!("failed to load settings, using defaults: {err}");
            DemoConfig::default()
        },
    }
}

fn settings_path() -> Option<PathBuf> {
    std::env::var_os(SETTINGS_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn load_config_from_path(path: &Path) -> Result<DemoConfig, SettingsError> {
    let data = fs::read_to_string(path)?;
    let config = serde_json::from_str(&data)?;
    log::info!("loaded settings from {}", path.display());
    Ok(config)
}
