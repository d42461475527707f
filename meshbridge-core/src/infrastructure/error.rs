// meshbridge-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum SecretError {
    #[error("vault is unreachable: {0}")]
    #[diagnostic(
        code(meshbridge::secrets::unreachable),
        help("Check the vault address and network access from this host.")
    )]
    Unreachable(String),

    #[error("vault authentication failed: {0}")]
    #[diagnostic(
        code(meshbridge::secrets::auth),
        help("Check the vault token, or the kubernetes role and service account token.")
    )]
    AuthenticationFailed(String),

    #[error("no secret found at '{0}'")]
    #[diagnostic(code(meshbridge::secrets::not_found))]
    NotFound(String),

    #[error("some required fields are missing: [{}]", .0.join(", "))]
    #[diagnostic(
        code(meshbridge::secrets::missing_fields),
        help("The secret must hold non-empty string values for these keys.")
    )]
    MissingFields(Vec<String>),

    #[error("unexpected vault response: {0}")]
    #[diagnostic(code(meshbridge::secrets::response))]
    InvalidResponse(String),

    #[error("vault client configuration error: {0}")]
    #[diagnostic(code(meshbridge::secrets::config))]
    Config(String),
}

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(meshbridge::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(meshbridge::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),

    #[error("Invalid settings: {0}")]
    #[diagnostic(
        code(meshbridge::infra::settings),
        help("Fix the vault section of the settings file.")
    )]
    InvalidSettings(#[from] validator::ValidationErrors),

    #[error("Settings file not found at '{0}'")]
    #[diagnostic(code(meshbridge::infra::config_missing))]
    ConfigNotFound(String),
}
