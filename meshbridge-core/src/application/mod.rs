// meshbridge-core/src/application/mod.rs

pub mod engines;
pub mod registry;
pub mod secrets;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Lets the CLI write `use meshbridge_core::application::{EngineRegistry, ..}`
// without knowing the file layout.

pub use engines::MysqlTranslator;
pub use registry::EngineRegistry;
pub use secrets::SecretResolver;
