//! Domain types and validators for gamectl configuration.
//!
//! Pure functions only: no I/O, no async, no filesystem access.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;
use crate::domain::registry::{OperationRef, Operations, ServerDefinition, ServerRegistry};
use crate::domain::session::DEFAULT_CONFIRMATION_TIMEOUT;

// ── Constants ────────────────────────────────────────────────────────────────

pub const DEFAULT_SCRIPT_TIMEOUT_SECS: u64 = 300;
pub const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 30;
/// Upper bound for every timeout: one day.
pub const MAX_TIMEOUT_SECS: u64 = 86_400;

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `~/.gamectl/config.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GamectlConfig {
    /// When set, only requests from this channel are accepted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_channel: Option<String>,

    #[serde(default = "default_confirmation_timeout_secs")]
    pub confirmation_timeout_secs: u64,

    #[serde(default = "default_script_timeout_secs")]
    pub script_timeout_secs: u64,

    #[serde(default = "default_probe_timeout_secs")]
    pub probe_timeout_secs: u64,

    /// Command that prints a container's state; the container id is appended.
    #[serde(default = "default_status_probe")]
    pub status_probe: OperationRef,

    #[serde(default)]
    pub servers: BTreeMap<String, ServerEntry>,
}

/// One server as written in the config file; the map key is the server key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerEntry {
    pub name: String,
    pub container: String,
    #[serde(alias = "scripts")]
    pub operations: Operations,
}

impl Default for GamectlConfig {
    fn default() -> Self {
        Self {
            control_channel: None,
            confirmation_timeout_secs: default_confirmation_timeout_secs(),
            script_timeout_secs: default_script_timeout_secs(),
            probe_timeout_secs: default_probe_timeout_secs(),
            status_probe: default_status_probe(),
            servers: BTreeMap::new(),
        }
    }
}

fn default_confirmation_timeout_secs() -> u64 {
    DEFAULT_CONFIRMATION_TIMEOUT.as_secs()
}

fn default_script_timeout_secs() -> u64 {
    DEFAULT_SCRIPT_TIMEOUT_SECS
}

fn default_probe_timeout_secs() -> u64 {
    DEFAULT_PROBE_TIMEOUT_SECS
}

fn default_status_probe() -> OperationRef {
    OperationRef::new("docker", &["inspect", "--format={{.State.Status}}"])
}

impl GamectlConfig {
    /// Validate timeouts and build the immutable server registry.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if any timeout is zero or above
    /// `MAX_TIMEOUT_SECS`, no servers are
    /// configured, or a server definition is malformed.
    pub fn registry(&self) -> Result<ServerRegistry, ConfigError> {
        self.validate_timeouts()?;
        if self.servers.is_empty() {
            return Err(ConfigError::NoServers);
        }
        ServerRegistry::new(self.servers.iter().map(|(key, entry)| ServerDefinition {
            key: key.clone(),
            name: entry.name.clone(),
            container: entry.container.clone(),
            operations: entry.operations.clone(),
        }))
    }

    #[must_use]
    pub fn confirmation_window(&self) -> Duration {
        Duration::from_secs(self.confirmation_timeout_secs)
    }

    #[must_use]
    pub fn script_timeout(&self) -> Duration {
        Duration::from_secs(self.script_timeout_secs)
    }

    #[must_use]
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }

    fn validate_timeouts(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("confirmation_timeout_secs", self.confirmation_timeout_secs),
            ("script_timeout_secs", self.script_timeout_secs),
            ("probe_timeout_secs", self.probe_timeout_secs),
        ] {
            if value == 0 {
                return Err(ConfigError::ZeroTimeout { field });
            }
            if value > MAX_TIMEOUT_SECS {
                return Err(ConfigError::TimeoutTooLarge {
                    field,
                    max: MAX_TIMEOUT_SECS,
                });
            }
        }
        Ok(())
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
