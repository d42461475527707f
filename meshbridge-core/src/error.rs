// meshbridge-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::{InfrastructureError, SecretError};
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum BridgeError {
    // --- DOMAIN (shape of configuration maps and requests) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Domain(#[from] DomainError),

    // --- SECRETS (vault lookups) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Secret(#[from] SecretError),

    // --- INFRASTRUCTURE (IO, parsing, settings) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Infrastructure(#[from] InfrastructureError),

    #[error("Unsupported engine type: '{0}'")]
    #[diagnostic(
        code(meshbridge::engine_unsupported),
        help("Run `meshbridge engines` to list the registered engine types.")
    )]
    UnsupportedEngine(String),
}

// Manual implementation to avoid duplicate enum variant but keep ergonomics
impl From<std::io::Error> for BridgeError {
    fn from(err: std::io::Error) -> Self {
        BridgeError::Infrastructure(InfrastructureError::Io(err))
    }
}
