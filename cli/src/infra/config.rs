//! Infrastructure implementation of the `ConfigStore` port.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::application::ports::ConfigStore;
use crate::domain::config::GamectlConfig;

/// Production implementation of `ConfigStore` that reads a YAML file on disk.
///
/// Path resolution: explicit override, then `GAMECTL_CONFIG`, then
/// `~/.gamectl/config.yaml`.
#[derive(Debug, Clone, Default)]
pub struct YamlConfigStore {
    path: Option<PathBuf>,
}

impl YamlConfigStore {
    #[must_use]
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

impl ConfigStore for YamlConfigStore {
    fn load(&self) -> Result<GamectlConfig> {
        let path = self.path()?;
        if !path.exists() {
            anyhow::bail!(
                "No configuration at {}. Create it or point GAMECTL_CONFIG at one.",
                path.display()
            );
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        let config: GamectlConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("cannot parse {}", path.display()))?;
        tracing::debug!(path = %path.display(), servers = config.servers.len(), "configuration loaded");
        Ok(config)
    }

    fn path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.path {
            return Ok(path.clone());
        }
        if let Ok(val) = std::env::var("GAMECTL_CONFIG") {
            return Ok(PathBuf::from(val));
        }
        let home =
            dirs::home_dir().ok_or_else(|| anyhow::anyhow!("cannot determine home directory"))?;
        Ok(home.join(".gamectl").join("config.yaml"))
    }
}
