//! Command implementations

pub mod act;
pub mod config;
pub mod servers;
pub mod version;
