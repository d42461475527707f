// meshbridge-core/src/ports/mod.rs

pub mod secrets;
pub mod translator;

pub use secrets::{SecretBundle, SecretStore};
pub use translator::EngineTranslator;
