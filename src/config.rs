//! Local configuration file.
//!
//! The CLI reads an optional YAML file holding the API key, a default
//! project and the names of the phases used by the workflow commands:
//!
//! ```yaml
//! api_key: 0123456789abcdef
//! project_id: 12
//! user: jdoe
//! phases:
//!   todo: Ready
//!   working: In Progress
//!   done: Archive
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::client::{ZenClient, DEFAULT_API_URL};
use crate::error::{KaizenError, Result};

const CONFIG_DIR: &str = "kaizen";
const CONFIG_FILE: &str = "config.yaml";

/// Contents of the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// AgileZen API key.
    #[serde(default)]
    pub api_key: Option<String>,

    /// API root, for testing against another host.
    #[serde(default)]
    pub api_url: Option<String>,

    /// Project used when a command is given no project id.
    #[serde(default)]
    pub project_id: Option<u64>,

    /// User name `pop-next` assigns stories to.
    #[serde(default)]
    pub user: Option<String>,

    /// Names of the phases the workflow commands move stories through.
    #[serde(default)]
    pub phases: PhaseNames,
}

/// Phase names used by `todo`, `pop-next` and `done`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PhaseNames {
    pub todo: String,
    pub working: String,
    pub done: String,
}

impl Default for PhaseNames {
    fn default() -> Self {
        Self {
            todo: "Ready".to_string(),
            working: "Working".to_string(),
            done: "Archive".to_string(),
        }
    }
}

impl Config {
    /// Default location: `<config dir>/kaizen/config.yaml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`KaizenError::Config`] if the file is missing, unreadable
    /// or not valid configuration YAML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            KaizenError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::parse(&content)
            .map_err(|e| KaizenError::Config(format!("{}: {e}", path.display())))
    }

    /// Load the file at the default location, if there is one.
    ///
    /// # Errors
    ///
    /// Returns [`KaizenError::Config`] if the file exists but is malformed.
    pub fn load_default() -> Result<Option<Self>> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path).map(Some),
            _ => Ok(None),
        }
    }

    fn parse(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        // An empty file is a valid, empty configuration
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Build a client from the configured key, falling back to the
    /// `KAIZEN_API_KEY` and `KAIZEN_API_URL` environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`KaizenError::Config`] when no API key is available.
    pub fn client(&self) -> Result<ZenClient> {
        match &self.api_key {
            Some(key) => {
                let url = self
                    .api_url
                    .clone()
                    .or_else(|| std::env::var("KAIZEN_API_URL").ok())
                    .unwrap_or_else(|| DEFAULT_API_URL.to_string());
                ZenClient::new(key, &url)
            }
            None => ZenClient::from_env(),
        }
    }

    /// Project id from the command line, or the configured default.
    ///
    /// # Errors
    ///
    /// Returns [`KaizenError::Config`] when neither is set.
    pub fn project(&self, from_cli: Option<u64>) -> Result<u64> {
        from_cli.or(self.project_id).ok_or_else(|| {
            KaizenError::Config(
                "no project id given and no project_id in the configuration".to_string(),
            )
        })
    }
}
