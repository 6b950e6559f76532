//! Application Config
//!
//! Defaults, then an optional JSON file, then `TEWDUWU_*` environment
//! variables, merged with figment.

use figment::providers::{Env, Format, Json, Serialized};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

pub const CONFIG_FILE: &str = "tewduwu.json";
pub const CONFIG_ENV: &str = "TEWDUWU_CONFIG";
/// Prefix of the per-field overrides, e.g. `TEWDUWU_DATA_FILE`
pub const ENV_PREFIX: &str = "TEWDUWU_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// List file, one record per line
    pub data_file: PathBuf,
    pub log_dir: PathBuf,
    /// Save after every mutating action
    pub autosave: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("todolist.dat"),
            log_dir: PathBuf::from("logs"),
            autosave: true,
        }
    }
}

impl AppConfig {
    /// Resolve config from the working directory and the process environment
    pub fn load() -> AppResult<Self> {
        let explicit = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        Self::resolve(explicit.as_deref(), ENV_PREFIX)
    }

    /// Resolve config from a config file and environment variables carrying
    /// `env_prefix`.
    ///
    /// An explicitly named config file must exist; the default one is optional.
    pub fn resolve(config_file: Option<&Path>, env_prefix: &str) -> AppResult<Self> {
        if let Some(path) = config_file {
            if !path.is_file() {
                return Err(AppError::ConfigMissing {
                    path: path.to_path_buf(),
                });
            }
        }
        let file = config_file.unwrap_or_else(|| Path::new(CONFIG_FILE));
        log::debug!("Reading config from {} and {}*", file.display(), env_prefix);

        let config = Self::figment(file, env_prefix).extract()?;
        Ok(config)
    }

    fn figment(file: &Path, env_prefix: &str) -> Figment {
        Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Json::file(file))
            .merge(Env::prefixed(env_prefix).ignore(&["config"]))
    }
}
