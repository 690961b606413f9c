//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod error;
pub mod outcome;
pub mod registry;
pub mod request;
pub mod resolver;
pub mod session;

pub use config::GamectlConfig;
pub use error::{ConfigError, ExecutionError, RequestError};
pub use outcome::ConfirmationPrompt;
pub use registry::{OperationRef, Operations, ServerDefinition, ServerRegistry};
pub use request::ActionRequest;
pub use resolver::{Plan, Resolution, Step, resolve};
pub use session::{Choice, ConfirmationSession, SessionState, Transition, Verdict};
