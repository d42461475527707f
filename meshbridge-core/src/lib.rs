// meshbridge-core/src/lib.rs

#![allow(missing_docs)]
// Memory safety
#![deny(unsafe_code)]
// Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// 1. Ports (Interfaces / Traits)
// Contracts for the vault collaborator and the per-engine translators.
pub mod ports;

// 2. Domain
// Config values, field dictionary, credentials, naming rules.
// Depends on nothing else in the crate.
pub mod domain;

// 3. Infrastructure (Adapters)
// Vault HTTP client, settings files, environment, filesystem.
pub mod infrastructure;

// 4. Application (Use Cases)
// Secret resolution, engine translators, engine registry.
pub mod application;

pub mod error;

// --- RE-EXPORTS (FACADE) ---
pub use application::{EngineRegistry, MysqlTranslator, SecretResolver};
pub use domain::{ConfigMap, ConfigValue};
pub use error::BridgeError;
pub use ports::{EngineTranslator, SecretStore};
