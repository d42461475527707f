// meshbridge-core/src/infrastructure/config/settings.rs

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};
use validator::{Validate, ValidationError};

use crate::domain::credentials::SecretString;
use crate::infrastructure::error::InfrastructureError;

const SETTINGS_CANDIDATES: [&str; 3] = ["meshbridge.yaml", "meshbridge.yml", "conf.yaml"];

pub const ENV_VAULT_ADDRESS: &str = "MESHBRIDGE_VAULT_ADDRESS";
pub const ENV_VAULT_TOKEN: &str = "MESHBRIDGE_VAULT_TOKEN";

/// Connector process settings. Without a `vault` section no credentials
/// lookup is ever attempted.
#[derive(Debug, Deserialize, Validate, Clone, Default)]
pub struct ConnectorSettings {
    #[validate(nested)]
    #[serde(default)]
    pub vault: Option<VaultSettings>,
}

#[derive(Debug, Deserialize, Validate, Clone)]
#[validate(schema(function = "validate_auth_method"))]
pub struct VaultSettings {
    #[validate(url(message = "vault address must be a URL"))]
    pub address: String,

    /// Static token. When absent the kubernetes login below is used.
    #[serde(default)]
    pub token: Option<SecretString>,

    #[serde(default = "default_auth_path")]
    pub auth_path: String,

    #[serde(default)]
    pub role: Option<String>,

    #[serde(default = "default_jwt_file_path")]
    pub jwt_file_path: PathBuf,

    #[validate(range(min = 1, max = 300))]
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl VaultSettings {
    pub fn with_address(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            token: None,
            auth_path: default_auth_path(),
            role: None,
            jwt_file_path: default_jwt_file_path(),
            timeout_secs: default_timeout_secs(),
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(SecretString::new(token));
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }
}

fn default_auth_path() -> String {
    "/v1/auth/kubernetes/login".to_string()
}
fn default_jwt_file_path() -> PathBuf {
    PathBuf::from("/var/run/secrets/kubernetes.io/serviceaccount/token")
}
fn default_timeout_secs() -> u64 {
    10
}

fn validate_auth_method(settings: &VaultSettings) -> Result<(), ValidationError> {
    let has_token = settings.token.as_ref().is_some_and(|t| !t.is_empty());
    let has_role = settings.role.as_ref().is_some_and(|r| !r.is_empty());
    if has_token || has_role {
        return Ok(());
    }
    Err(ValidationError::new("vault_auth")
        .with_message("either a token or a kubernetes role is required".into()))
}

// --- LOADERS ---

/// Looks for a settings file in `dir`, then applies environment overrides.
#[instrument]
pub fn load_settings(dir: &Path) -> Result<ConnectorSettings, InfrastructureError> {
    let path = find_settings_file(dir)?;
    load_settings_file(&path)
}

#[instrument]
pub fn load_settings_file(path: &Path) -> Result<ConnectorSettings, InfrastructureError> {
    info!(path = ?path, "Loading connector settings");
    let content = fs::read_to_string(path)?;
    // An empty file is a valid "no vault" configuration.
    let settings: ConnectorSettings = if content.trim().is_empty() {
        ConnectorSettings::default()
    } else {
        serde_yaml::from_str(&content)?
    };
    finalize(settings, |key| std::env::var(key).ok())
}

/// Settings built only from the environment (no file).
pub fn settings_from_env() -> Result<ConnectorSettings, InfrastructureError> {
    finalize(ConnectorSettings::default(), |key| std::env::var(key).ok())
}

fn find_settings_file(dir: &Path) -> Result<PathBuf, InfrastructureError> {
    SETTINGS_CANDIDATES
        .iter()
        .map(|name| dir.join(name))
        .find(|p| p.exists())
        .ok_or_else(|| {
            InfrastructureError::ConfigNotFound(format!(
                "{:?} (checked: {:?})",
                dir, SETTINGS_CANDIDATES
            ))
        })
}

fn finalize<F>(
    mut settings: ConnectorSettings,
    lookup: F,
) -> Result<ConnectorSettings, InfrastructureError>
where
    F: Fn(&str) -> Option<String>,
{
    apply_env_overrides(&mut settings, lookup);
    settings.validate()?;
    Ok(settings)
}

fn apply_env_overrides<F>(settings: &mut ConnectorSettings, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(address) = lookup(ENV_VAULT_ADDRESS).filter(|v| !v.is_empty()) {
        info!(address = %address, "Overriding vault address via ENV");
        match settings.vault.as_mut() {
            Some(vault) => vault.address = address,
            None => settings.vault = Some(VaultSettings::with_address(address)),
        }
    }
    if let Some(token) = lookup(ENV_VAULT_TOKEN).filter(|v| !v.is_empty())
        && let Some(vault) = settings.vault.as_mut()
    {
        info!("Overriding vault token via ENV");
        vault.token = Some(SecretString::new(token));
    }
}
