use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use crate::{Error, Result};

pub const DEFAULT_DATABASE: &str = "productos.db";
pub const DEFAULT_TITLE: &str = "Gestión de Servicios";

/// Contents of `servicios.toml`; every key is optional
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ServiciosConfig {
    pub database: Option<String>,
    pub title: Option<String>,
    pub case_sensitive_search: Option<bool>,
}

/// Effective settings after layering CLI flags over the config file over defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub database: PathBuf,
    pub title: String,
    pub case_sensitive_search: bool,
}

impl Settings {
    pub fn resolve(config: Option<&ServiciosConfig>, database_flag: Option<&Path>) -> Self {
        let config = config.cloned().unwrap_or_default();

        let database = database_flag
            .map(Path::to_path_buf)
            .or_else(|| config.database.map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE));

        Self {
            database,
            title: config.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            case_sensitive_search: config.case_sensitive_search.unwrap_or(false),
        }
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("servicios.toml")
}

pub fn load_config(path: Option<&Path>) -> Result<Option<ServiciosConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: ServiciosConfig = toml::from_str(&contents)
        .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &ServiciosConfig, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(Error::Config(format!(
            "config already exists at {} (use --force to overwrite)",
            path.display()
        )));
    }

    let contents = toml::to_string_pretty(config).map_err(|e| Error::Config(e.to_string()))?;
    std::fs::write(path, contents)?;
    Ok(())
}
