//! Agent configuration loading

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Hyperparameters for a Q-learning agent
///
/// Values are accepted as given. [`AgentConfig::out_of_range`] reports
/// anything outside the nominal ranges so callers can warn about it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// α, nominally in (0, 1]
    pub learning_rate: f64,
    /// γ, nominally in [0, 1]
    pub discount_factor: f64,
    /// ε, nominally in [0, 1]
    pub exploration_rate: f64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.1,
            discount_factor: 0.9,
            exploration_rate: 0.3,
        }
    }
}

impl AgentConfig {
    pub fn new(learning_rate: f64, discount_factor: f64, exploration_rate: f64) -> Self {
        Self {
            learning_rate,
            discount_factor,
            exploration_rate,
        }
    }

    /// Load configuration from the first config file found and the environment
    pub fn load() -> Result<Self> {
        Self::load_from(Self::find_config_file().as_deref())
    }

    /// Load configuration from an optional file, overridden by `QTAB__*` variables
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            tracing::info!("Loading agent config from: {:?}", path);
            builder = builder.add_source(File::from(path.to_path_buf()).required(false));
        } else {
            tracing::debug!("No config file found, using defaults");
        }

        builder = builder.add_source(
            Environment::with_prefix("QTAB")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Load configuration from a single file, ignoring the environment
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let config = Config::builder()
            .add_source(File::from(path.as_ref().to_path_buf()))
            .build()?
            .try_deserialize()?;
        Ok(config)
    }

    /// Names of hyperparameters outside their nominal ranges
    pub fn out_of_range(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if !(self.learning_rate > 0.0 && self.learning_rate <= 1.0) {
            names.push("learning_rate");
        }
        if !(0.0..=1.0).contains(&self.discount_factor) {
            names.push("discount_factor");
        }
        if !(0.0..=1.0).contains(&self.exploration_rate) {
            names.push("exploration_rate");
        }
        names
    }

    /// Find the configuration file
    fn find_config_file() -> Option<PathBuf> {
        // Check in order: QTAB_CONFIG env, ./qtab.toml, ~/.config/qtab/qtab.toml
        if let Ok(path) = std::env::var("QTAB_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        let local = PathBuf::from("qtab.toml");
        if local.exists() {
            return Some(local);
        }

        if let Some(home) = dirs::home_dir() {
            let user_config = home.join(".config").join("qtab").join("qtab.toml");
            if user_config.exists() {
                return Some(user_config);
            }
        }

        None
    }
}
