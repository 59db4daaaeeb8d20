//! Settings persistence - load and save settings to disk.
//!
//! Settings are stored in the platform-specific config folder, e.g.
//! `~/.config/etiqueta-studio/settings.toml` on Linux.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, anyhow};
use directories::ProjectDirs;

use super::Settings;

const APP_QUALIFIER: &str = "br";
const APP_ORG: &str = "etiqueta-studio";
const APP_NAME: &str = "Etiqueta Studio";
const CONFIG_FILENAME: &str = "settings.toml";

/// Path to the settings file, or `None` when the platform directory cannot
/// be determined.
pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Load settings from disk, falling back to defaults on any failure.
pub fn load_settings() -> Settings {
    let Some(path) = settings_path() else {
        tracing::warn!("could not determine settings path, using defaults");
        return Settings::default();
    };

    match fs::read_to_string(&path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                tracing::info!(path = %path.display(), "loaded settings");
                settings
            }
            Err(err) => {
                tracing::warn!(%err, "failed to parse settings file, using defaults");
                Settings::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Settings::default(),
        Err(err) => {
            tracing::warn!(%err, "failed to read settings file, using defaults");
            Settings::default()
        }
    }
}

/// Save settings to disk, creating the config directory if needed.
pub fn save_settings(settings: &Settings) -> anyhow::Result<()> {
    let path = settings_path().ok_or_else(|| anyhow!("could not determine settings path"))?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create config dir: {}", parent.display()))?;
    }
    let content = toml::to_string_pretty(settings).context("serialize settings")?;
    fs::write(&path, content).with_context(|| format!("write settings: {}", path.display()))?;
    Ok(())
}
