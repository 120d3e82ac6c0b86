use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub vendor_id: Option<u16>,
    pub product_id: Option<u16>,
    pub xinput_name: Option<String>,
    #[serde(default)]
    pub pen: PenSection,
    #[serde(default)]
    pub settings: SettingsSection,
    #[serde(default)]
    pub actions: ActionsSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PenSection {
    pub max_x: Option<u32>,
    pub max_y: Option<u32>,
    pub max_pressure: Option<u32>,
    pub resolution_x: Option<u32>,
    pub resolution_y: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsSection {
    #[serde(default)]
    pub swap_axis: bool,
    #[serde(default)]
    pub swap_directions: bool,
}

/// `[actions]`: the pad button list plus any number of named pen actions.
#[derive(Debug, Default, Deserialize)]
pub struct ActionsSection {
    pub tablet_buttons: Option<Vec<String>>,
    #[serde(flatten)]
    pub other: BTreeMap<String, ActionBinding>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ActionBinding {
    One(String),
    Many(Vec<String>),
}

impl ActionBinding {
    pub fn chords(&self) -> Vec<&str> {
        match self {
            ActionBinding::One(s) => vec![s.as_str()],
            ActionBinding::Many(v) => v.iter().map(String::as_str).collect(),
        }
    }
}

pub fn parse(content: &str, path: &Path) -> Result<FileConfig, ConfigError> {
    toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_from_path(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse(&content, path)?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

pub fn load_from_default_paths() -> Option<FileConfig> {
    for path in default_config_paths() {
        if !path.exists() {
            continue;
        }
        match load_from_path(&path) {
            Ok(config) => return Some(config),
            Err(e) => log::warn!("{}", e),
        }
    }
    None
}

fn default_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("moons-pad.toml"));

    if let Ok(home) = std::env::var("HOME") {
        paths.push(PathBuf::from(home).join(".config").join("moons-pad.toml"));
    }

    paths
}
