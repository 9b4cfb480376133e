use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = "pagesmith.toml";

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

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub content_dir: PathBuf,
    pub static_dir: PathBuf,
    pub output_dir: PathBuf,
    pub template: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            static_dir: PathBuf::from("static"),
            output_dir: PathBuf::from("public"),
            template: PathBuf::from("template.html"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitePaths {
    pub content_dir: PathBuf,
    pub static_dir: PathBuf,
    pub output_dir: PathBuf,
    pub template: PathBuf,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in every loaded path
        config.content_dir = Self::expand_path(&config.content_dir).unwrap_or(config.content_dir);
        config.static_dir = Self::expand_path(&config.static_dir).unwrap_or(config.static_dir);
        config.output_dir = Self::expand_path(&config.output_dir).unwrap_or(config.output_dir);
        config.template = Self::expand_path(&config.template).unwrap_or(config.template);

        Ok(Some(config))
    }

    pub fn load_from_dir<P: AsRef<Path>>(site_root: P) -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(site_root.as_ref().join(CONFIG_FILE_NAME))
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

    pub fn resolve<P: AsRef<Path>>(&self, site_root: P) -> SitePaths {
        let root = site_root.as_ref();
        // join discards the root when a configured path is already absolute
        SitePaths {
            content_dir: root.join(&self.content_dir),
            static_dir: root.join(&self.static_dir),
            output_dir: root.join(&self.output_dir),
            template: root.join(&self.template),
        }
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
