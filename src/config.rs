use std::io;
use std::path::{Path, PathBuf};

use iced::Theme;
use serde::Deserialize;
use thiserror::Error;

use crate::dashboard::Variant;

pub const DEFAULT_PATH: &str = "perf-dashboard.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeName {
    #[default]
    Light,
    Dark,
}

impl ThemeName {
    pub fn theme(self) -> Theme {
        match self {
            ThemeName::Light => Theme::Light,
            ThemeName::Dark => Theme::Dark,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 860.0,
        }
    }
}

/// Startup settings read from `perf-dashboard.toml`. Every key is optional.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub variant: Variant,
    pub theme: ThemeName,
    /// Id of the tab to open on, e.g. `"charts"`. Ids outside the
    /// variant's tab set leave the first tab active.
    pub tab: Option<String>,
    pub window: WindowSettings,
}

impl Settings {
    /// Reads settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "no configuration file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let settings = Settings::parse("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.variant, Variant::Tracker);
        assert_eq!(settings.theme, ThemeName::Light);
        assert_eq!(settings.tab, None);
        assert_eq!(settings.window.width, 1280.0);
        assert_eq!(settings.window.height, 860.0);
    }

    #[test]
    fn parses_variant_theme_and_window() {
        let settings = Settings::parse(
            r#"
            variant = "full-window"
            theme = "dark"
            tab = "insights"

            [window]
            width = 1600
            "#,
        )
        .unwrap();

        assert_eq!(settings.variant, Variant::FullWindow);
        assert_eq!(settings.theme, ThemeName::Dark);
        assert_eq!(settings.tab.as_deref(), Some("insights"));
        assert_eq!(settings.window.width, 1600.0);
        assert_eq!(settings.window.height, 860.0);
    }

    #[test]
    fn rejects_unknown_variant() {
        assert!(Settings::parse(r#"variant = "compact""#).is_err());
        assert!(Settings::parse(r#"colour = "blue""#).is_err());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(&dir.path().join(DEFAULT_PATH)).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "theme = \"dark\"").unwrap();

        let settings = Settings::load(file.path()).unwrap();
        assert_eq!(settings.theme, ThemeName::Dark);
        assert_eq!(settings.variant, Variant::Tracker);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "variant = ").unwrap();

        let err = Settings::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().starts_with("invalid configuration in"));
    }

    #[test]
    fn unreadable_path_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Settings::load(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
