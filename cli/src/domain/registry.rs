//! Server registry: immutable lookup from server key to its definition.
//!
//! Built once from configuration at startup and passed by reference to every
//! component that needs it. Pure data; no I/O.

use std::collections::BTreeMap;

use gamectl_common::Action;
use serde::{Deserialize, Serialize};

use crate::domain::error::{ConfigError, RequestError};

// ── Operation references ──────────────────────────────────────────────────────

/// An opaque executable plus fixed arguments.
///
/// In YAML either a single program path (`/opt/server-control/icarus-up.sh`)
/// or an argv list (`["/opt/bin/ctl", "up", "icarus"]`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawOperation", into = "RawOperation")]
pub struct OperationRef {
    pub program: String,
    pub args: Vec<String>,
}

impl OperationRef {
    #[must_use]
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| (*a).to_string()).collect(),
        }
    }

    /// Program and arguments joined for display.
    #[must_use]
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawOperation {
    Path(String),
    Argv(Vec<String>),
}

impl TryFrom<RawOperation> for OperationRef {
    type Error = String;

    fn try_from(raw: RawOperation) -> Result<Self, Self::Error> {
        match raw {
            RawOperation::Path(program) => Ok(Self { program, args: Vec::new() }),
            RawOperation::Argv(mut argv) => {
                if argv.is_empty() {
                    return Err("operation argv must name a program".to_string());
                }
                let program = argv.remove(0);
                Ok(Self { program, args: argv })
            }
        }
    }
}

impl From<OperationRef> for RawOperation {
    fn from(op: OperationRef) -> Self {
        if op.args.is_empty() {
            RawOperation::Path(op.program)
        } else {
            RawOperation::Argv(std::iter::once(op.program).chain(op.args).collect())
        }
    }
}

// ── Server definitions ────────────────────────────────────────────────────────

/// Lifecycle scripts for one server. `up`/`down` are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Operations {
    #[serde(alias = "up")]
    pub start: OperationRef,
    #[serde(alias = "down")]
    pub stop: OperationRef,
    pub restart: OperationRef,
}

impl Operations {
    /// The script bound to a lifecycle action. `None` for `status`, which
    /// runs the shared probe instead.
    #[must_use]
    pub fn for_action(&self, action: Action) -> Option<&OperationRef> {
        match action {
            Action::Start => Some(&self.start),
            Action::Stop => Some(&self.stop),
            Action::Restart => Some(&self.restart),
            Action::Status => None,
        }
    }

    fn iter(&self) -> impl Iterator<Item = (&'static str, &OperationRef)> {
        [
            ("start operation", &self.start),
            ("stop operation", &self.stop),
            ("restart operation", &self.restart),
        ]
        .into_iter()
    }
}

/// A registered game server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerDefinition {
    /// Registry key, e.g. `icarus`.
    pub key: String,
    /// Display name, e.g. `Icarus Dedicated Server`.
    pub name: String,
    /// Container identifier passed to the status probe.
    pub container: String,
    pub operations: Operations,
}

// ── Registry ──────────────────────────────────────────────────────────────────

/// Read-only set of server definitions, ordered by key.
#[derive(Debug, Clone, Default)]
pub struct ServerRegistry {
    servers: BTreeMap<String, ServerDefinition>,
}

impl ServerRegistry {
    /// Build a registry, validating every definition.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` for malformed keys, duplicate keys, or empty
    /// container/program fields.
    pub fn new(definitions: impl IntoIterator<Item = ServerDefinition>) -> Result<Self, ConfigError> {
        let mut servers = BTreeMap::new();
        for def in definitions {
            validate_definition(&def)?;
            if servers.contains_key(&def.key) {
                return Err(ConfigError::DuplicateServer(def.key));
            }
            servers.insert(def.key.clone(), def);
        }
        Ok(Self { servers })
    }

    /// Look up a server by key.
    ///
    /// # Errors
    ///
    /// Returns `RequestError::UnknownServer` when the key is absent.
    pub fn lookup(&self, key: &str) -> Result<&ServerDefinition, RequestError> {
        self.servers
            .get(key)
            .ok_or_else(|| RequestError::UnknownServer(key.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ServerDefinition> {
        self.servers.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.servers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }
}

/// Validates a server key: lowercase alphanumeric start, then `[a-z0-9_-]`.
///
/// # Errors
///
/// Returns `ConfigError::InvalidServerKey` if the key doesn't match.
pub fn validate_server_key(key: &str) -> Result<(), ConfigError> {
    let mut chars = key.chars();
    let valid_first = chars
        .next()
        .is_some_and(|c| c.is_ascii_lowercase() || c.is_ascii_digit());
    let valid_rest =
        chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_');
    if valid_first && valid_rest {
        Ok(())
    } else {
        Err(ConfigError::InvalidServerKey(key.to_string()))
    }
}

fn validate_definition(def: &ServerDefinition) -> Result<(), ConfigError> {
    validate_server_key(&def.key)?;
    let empty = |field| ConfigError::EmptyField {
        server: def.key.clone(),
        field,
    };
    if def.name.trim().is_empty() {
        return Err(empty("name"));
    }
    if def.container.trim().is_empty() {
        return Err(empty("container"));
    }
    for (field, op) in def.operations.iter() {
        if op.program.trim().is_empty() {
            return Err(empty(field));
        }
    }
    Ok(())
}
