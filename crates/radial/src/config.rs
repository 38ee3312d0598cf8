use crate::item::{ExecCommand, Label, MenuId};
use directories::ProjectDirs;
use radial_menu::{CenterSettings, Glyph, Settings};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SliceConfig {
    pub label: Label,
    #[serde(default)]
    pub icon: Glyph,
    pub submenu: Option<MenuId>,
    pub command: Option<ExecCommand>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct MenuConfig {
    pub center: Option<CenterSettings>,
    #[serde(default)]
    pub slices: Vec<SliceConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default = "default_root")]
    pub root: MenuId,
    #[serde(default)]
    pub menus: HashMap<MenuId, MenuConfig>,
}

fn default_root() -> MenuId {
    MenuId::from("main")
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "radial", "radial").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    match path {
        Some(p) => Ok(p.to_path_buf()),
        None => get_config_path(),
    }
}

fn environment() -> config::Environment {
    config::Environment::with_prefix("RADIAL")
        .prefix_separator("_")
        .separator("__")
}

/// Reads the config file layered with `RADIAL_*` environment variables, e.g.
/// `RADIAL_SETTINGS__DIAMETER=400`. A missing file means the bundled menu;
/// a file that fails to parse is an error.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    load_layered(path, environment())
}

fn load_layered(path: Option<&Path>, env: config::Environment) -> Result<Config, ConfigError> {
    let config_path = resolve_path(path)?;

    let builder = config::Config::builder();
    let builder = if config_path.exists() {
        builder.add_source(config::File::from(config_path))
    } else {
        log::info!(
            "No config at {}, using the bundled menu",
            config_path.display()
        );
        builder.add_source(config::File::from_str(
            DEFAULT_CONFIG,
            config::FileFormat::Toml,
        ))
    };

    let s = builder.add_source(env).build()?;
    Ok(s.try_deserialize()?)
}

pub fn from_toml_str(toml: &str) -> Result<Config, ConfigError> {
    let s = config::Config::builder()
        .add_source(config::File::from_str(toml, config::FileFormat::Toml))
        .build()?;

    Ok(s.try_deserialize()?)
}

/// The bundled menu, used when nothing is configured yet.
pub fn builtin() -> Config {
    from_toml_str(DEFAULT_CONFIG).unwrap_or_else(|e| {
        log::error!("Bundled config is invalid: {}", e);
        Config {
            settings: Settings::default(),
            root: default_root(),
            menus: HashMap::from([(default_root(), MenuConfig::default())]),
        }
    })
}

pub fn load_or_setup(path: Option<&Path>) -> Config {
    load_config(path).unwrap_or_else(|e| {
        log::error!("Failed to load config: {}", e);
        builtin()
    })
}

pub fn write_default_config(path: Option<&Path>) -> std::io::Result<PathBuf> {
    let path =
        resolve_path(path).map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

pub const DEFAULT_CONFIG: &str = include_str!("default_config.toml");
