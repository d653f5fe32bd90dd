use mdconvert_engine::{ConvertOptions, Limits, RenderOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "MDCONVERT_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Conversion settings as stored on disk.
///
/// Every field is optional in the file; missing ones take engine defaults.
///
/// ```toml
/// [limits]
/// max_input_bytes = 1048576
/// max_nesting_depth = 64
///
/// [render]
/// language_class_prefix = "language-"
/// sanitize_urls = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub limits: Limits,
    pub render: RenderOptions,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            log::debug!("no config at {}", config_path.display());
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        log::debug!("loaded config from {}", config_path.display());
        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    /// Options for a conversion call.
    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            limits: self.limits,
            render: self.render.clone(),
        }
    }

    /// `$MDCONVERT_CONFIG` if set, else `~/.config/mdconvert/config.toml`.
    pub fn config_path() -> PathBuf {
        Self::config_path_from(std::env::var(CONFIG_PATH_ENV).ok().as_deref())
    }

    fn config_path_from(override_path: Option<&str>) -> PathBuf {
        if let Some(path) = override_path.and_then(|p| Self::expand_path(Path::new(p))) {
            return path;
        }
        let config_dir = shellexpand::tilde("~/.config/mdconvert");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
