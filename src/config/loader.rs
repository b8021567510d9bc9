//! Configuration loading and management

use crate::config::types::{AuthorInfo, ProjectConfig};
use crate::constants::{BUNDLED_TEMPLATES_DIR, CONFIG_FILE_NAME, DEFAULT_FILES_TO_IGNORE};
use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Contents of `entree_config.json`.
///
/// Loaded once by the caller and passed down explicitly; nothing in the crate
/// reads the file behind the caller's back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(flatten)]
    pub author: AuthorInfo,
    #[serde(default = "get_default_files_to_ignore")]
    pub files_to_ignore: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub templates_root: Option<PathBuf>,
    #[serde(default)]
    pub project_config: IndexMap<String, ProjectConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            author: AuthorInfo::default(),
            files_to_ignore: get_default_files_to_ignore(),
            templates_root: None,
            project_config: IndexMap::new(),
        }
    }
}

impl Config {
    /// Location of the user config file in the platform config directory
    /// (`~/.config/entree_config.json` on Linux).
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            Error::Other(anyhow::anyhow!("Could not determine config directory"))
        })?;
        Ok(config_dir.join(CONFIG_FILE_NAME))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Loads the config, writing a default one first when the file is missing.
    pub fn load_or_init<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("No config at '{}', writing defaults", path.display());
            Config::default().save(path, false)?;
        }
        Self::load(path)
    }

    /// Writes the config as pretty JSON. An existing file is only replaced
    /// when `overwrite` is set; returns whether the file was written.
    pub fn save<P: AsRef<Path>>(&self, path: P, overwrite: bool) -> Result<bool> {
        let path = path.as_ref();
        if path.exists() && !overwrite {
            debug!("Config '{}' exists, leaving it untouched", path.display());
            return Ok(false);
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(true)
    }

    /// Directory holding one template tree per project type.
    pub fn templates_root(&self) -> PathBuf {
        self.templates_root
            .clone()
            .unwrap_or_else(|| PathBuf::from(BUNDLED_TEMPLATES_DIR))
    }

    /// File names to skip for `project_type`: its own list when configured,
    /// the global list otherwise.
    pub fn files_to_ignore_for(&self, project_type: &str) -> &[String] {
        self.project_config
            .get(project_type)
            .and_then(|project| project.files_to_ignore.as_deref())
            .unwrap_or(self.files_to_ignore.as_slice())
    }

    /// Source paths of the partial build `name` configured for `project_type`.
    pub fn partial_build(&self, project_type: &str, name: &str) -> Result<&[String]> {
        self.project_config
            .get(project_type)
            .and_then(|project| project.partial_builds.get(name))
            .map(Vec::as_slice)
            .ok_or_else(|| Error::UnknownPartialBuild {
                project_type: project_type.to_string(),
                name: name.to_string(),
            })
    }
}

fn get_default_files_to_ignore() -> Vec<String> {
    DEFAULT_FILES_TO_IGNORE.iter().map(|name| name.to_string()).collect()
}
