//! Configuration loading from `<config_dir>/rutero/config.toml`.

use serde::Deserialize;
use std::{fs, io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Default, Deserialize)]
pub struct RuteroConfig {
    pub app: Option<AppConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for icons and separators.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        source: io::Error,
    },
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl RuteroConfig {
    /// Location of the config file, if a config directory exists.
    #[must_use]
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("rutero").join("config.toml"))
    }

    /// Load the config file. A missing file is not an error.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = Self::path() else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let config = toml::from_str(&raw).map_err(|source| ConfigError::Parse { path, source })?;
        Ok(Some(config))
    }

    /// Resolved UI options, defaulting every unset field.
    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        let app = self.app.as_ref();
        UiOptions {
            ascii_only: app.is_some_and(|a| a.ascii_only),
            high_contrast: app.is_some_and(|a| a.high_contrast),
        }
    }
}

/// Display options resolved from config, passed through to the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    pub ascii_only: bool,
    pub high_contrast: bool,
}

#[cfg(test)]
mod tests {
    use super::{RuteroConfig, UiOptions};

    #[test]
    fn empty_config_yields_default_options() {
        let config: RuteroConfig = toml::from_str("").expect("empty config parses");
        assert_eq!(config.ui_options(), UiOptions::default());
    }

    #[test]
    fn app_section_controls_ui_options() {
        let config: RuteroConfig =
            toml::from_str("[app]\nascii_only = true\nhigh_contrast = true\n")
                .expect("config parses");
        let options = config.ui_options();
        assert!(options.ascii_only);
        assert!(options.high_contrast);
    }

    #[test]
    fn unknown_keys_are_tolerated() {
        let config: RuteroConfig =
            toml::from_str("[app]\nascii_only = true\n\n[future]\nx = 1\n")
                .expect("config parses");
        assert!(config.ui_options().ascii_only);
    }
}
