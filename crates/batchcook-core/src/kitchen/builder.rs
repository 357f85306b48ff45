//! Builder for creating and configuring Kitchen instances.

use std::path::{Path, PathBuf};

use log::{debug, info};
use tokio::task;

use super::Kitchen;
use crate::{
    config::KitchenConfig,
    error::{KitchenError, Result, ResultExt},
};

/// Builder for creating and configuring Kitchen instances.
#[derive(Debug, Clone, Default)]
pub struct KitchenBuilder {
    config_path: Option<PathBuf>,
    config: Option<KitchenConfig>,
}

impl KitchenBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a configuration file path.
    ///
    /// If not specified, uses the XDG Base Directory specification:
    /// `$XDG_CONFIG_HOME/batchcook/kitchen.json` or
    /// `~/.config/batchcook/kitchen.json`. A missing default file means the
    /// built-in registries; a missing explicit file is an error.
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.config_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses an in-memory configuration and skips file lookup entirely.
    pub fn with_config(mut self, config: KitchenConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the configured kitchen.
    ///
    /// # Errors
    ///
    /// Returns `KitchenError::FileSystem` if an explicit config file cannot
    /// be read, `KitchenError::Serialization` if it is not valid JSON and
    /// `KitchenError::XdgDirectory` if the default location cannot be
    /// resolved.
    pub async fn build(self) -> Result<Kitchen> {
        if let Some(config) = self.config {
            return Ok(Kitchen::new(config));
        }

        let (path, required) = match self.config_path {
            Some(path) => (path, true),
            None => (Self::default_config_path()?, false),
        };

        let config = task::spawn_blocking(move || load_config(&path, required))
            .await
            .with_context("Task join error")??;

        Ok(Kitchen::new(config))
    }

    /// Returns the default config path following the XDG Base Directory
    /// specification.
    fn default_config_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("batchcook")
            .place_config_file("kitchen.json")
            .map_err(|e| KitchenError::XdgDirectory(e.to_string()))
    }
}

fn load_config(path: &Path, required: bool) -> Result<KitchenConfig> {
    if !required && !path.exists() {
        debug!("No config at {}, using built-in registries", path.display());
        return Ok(KitchenConfig::default());
    }

    let raw = std::fs::read_to_string(path).map_err(|e| KitchenError::file_system(path, e))?;
    let config: KitchenConfig = serde_json::from_str(&raw)?;
    info!(
        "Loaded kitchen config from {} ({} appliances, {} storage locations)",
        path.display(),
        config.appliances.len(),
        config.storage_locations.len()
    );
    Ok(config)
}
