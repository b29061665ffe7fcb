//! Planner configuration.

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_EXPORT_FILENAME, DEFAULT_PRODUCT_ID, DEFAULT_UID_NAMESPACE};
use crate::error::{PlannerError, PlannerResult};
use crate::store::{EntryStore, FileStore};

static DEFAULT_DATA_DIR: &str = "~/.habitual";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_product_id() -> String {
    DEFAULT_PRODUCT_ID.to_string()
}

fn default_uid_namespace() -> String {
    DEFAULT_UID_NAMESPACE.to_string()
}

fn default_export_filename() -> String {
    DEFAULT_EXPORT_FILENAME.to_string()
}

/// Configuration at ~/.config/habitual/config.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Where day entry files are kept.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_product_id")]
    pub product_id: String,

    #[serde(default = "default_uid_namespace")]
    pub uid_namespace: String,

    #[serde(default = "default_export_filename")]
    pub export_filename: String,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        PlannerConfig {
            data_dir: default_data_dir(),
            product_id: default_product_id(),
            uid_namespace: default_uid_namespace(),
            export_filename: default_export_filename(),
        }
    }
}

impl PlannerConfig {
    pub fn config_path() -> PlannerResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| PlannerError::Config("Could not determine config directory".into()))?
            .join("habitual");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the user's config, writing a commented default on first run.
    pub fn load() -> PlannerResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> PlannerResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .build()
            .map_err(|e| PlannerError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| PlannerError::Config(e.to_string()))
    }

    /// `data_dir` with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Entry store backed by files under [`Self::data_path`].
    pub fn open_store(&self) -> EntryStore<FileStore> {
        EntryStore::new(FileStore::new(self.data_path()))
    }

    pub fn save_to(&self, path: &Path) -> PlannerResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| PlannerError::Config(e.to_string()))?;

        std::fs::write(path, content)
            .map_err(|e| PlannerError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> PlannerResult<()> {
        let contents = format!(
            "\
# habitual configuration

# Where day entries are stored:
# data_dir = \"{}\"

# Calendar export naming:
# product_id = \"{}\"
# uid_namespace = \"{}\"
# export_filename = \"{}\"
",
            DEFAULT_DATA_DIR, DEFAULT_PRODUCT_ID, DEFAULT_UID_NAMESPACE, DEFAULT_EXPORT_FILENAME
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                PlannerError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| PlannerError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
