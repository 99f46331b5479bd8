//! Global rdv configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{RdvError, RdvResult};

/// Development backend used when nothing else is configured.
static DEFAULT_API_URL: &str = "http://localhost:3030";

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

/// Global configuration at ~/.config/rdv/config.toml
///
/// `api_url` can also be set through the `RDV_API_URL` environment variable.
#[derive(Deserialize, Clone)]
pub struct GlobalConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

impl GlobalConfig {
    pub fn config_path() -> RdvResult<PathBuf> {
        Ok(base_dir()?.join("config.toml"))
    }

    /// Path of the locally displayed agenda set.
    pub fn agenda_path() -> RdvResult<PathBuf> {
        Ok(base_dir()?.join("agenda.json"))
    }

    pub fn load() -> RdvResult<GlobalConfig> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        config::Config::builder()
            .add_source(config::File::from(config_path).required(false))
            .add_source(config::Environment::with_prefix("RDV"))
            .build()
            .map_err(|e| RdvError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| RdvError::Config(e.to_string()))
    }

    fn create_default_config(path: &Path) -> RdvResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, format!("api_url = \"{DEFAULT_API_URL}\"\n"))?;
        Ok(())
    }
}

fn base_dir() -> RdvResult<PathBuf> {
    Ok(dirs::config_dir()
        .ok_or_else(|| RdvError::Config("Could not determine config directory".into()))?
        .join("rdv"))
}
