// meshbridge-core/src/application/secrets.rs
//
// USE CASE: turn a credentials handle into a database login.

use std::sync::Arc;
use tracing::{instrument, warn};

use crate::domain::credentials::Credentials;
use crate::domain::fields::{PASSWORD, USERNAME};
use crate::infrastructure::config::VaultSettings;
use crate::infrastructure::error::SecretError;
use crate::infrastructure::vault::VaultSecretStore;
use crate::ports::secrets::{SecretBundle, SecretStore};

const REQUIRED_FIELDS: [&str; 2] = [USERNAME, PASSWORD];

/// Stateless between calls: every `resolve` is an independent vault read,
/// so one resolver can be shared by any number of concurrent translations.
#[derive(Clone)]
pub struct SecretResolver {
    store: Arc<dyn SecretStore>,
}

impl SecretResolver {
    pub fn new(store: Arc<dyn SecretStore>) -> Self {
        Self { store }
    }

    /// Resolver backed by the HTTP vault described in `settings`.
    pub fn from_settings(settings: &VaultSettings) -> Result<Self, SecretError> {
        let store = VaultSecretStore::new(settings)?;
        Ok(Self::new(Arc::new(store)))
    }

    /// Fetches the bundle at `handle` and extracts a non-empty username and
    /// password. Failures are logged as warnings and returned.
    #[instrument(skip(self))]
    pub async fn resolve(&self, handle: &str) -> Result<Credentials, SecretError> {
        let bundle = self.store.get_secret_map(handle).await.inspect_err(|e| {
            warn!(handle, error = %e, "Credentials extraction failed");
        })?;

        extract_credentials(&bundle).inspect_err(|e| {
            warn!(handle, error = %e, "Credentials bundle is incomplete");
        })
    }
}

fn extract_credentials(bundle: &SecretBundle) -> Result<Credentials, SecretError> {
    let read = |key: &str| {
        bundle
            .get(key)
            .and_then(serde_json::Value::as_str)
            .filter(|v| !v.is_empty())
    };

    let missing: Vec<String> = REQUIRED_FIELDS
        .iter()
        .filter(|key| read(key).is_none())
        .map(|key| key.to_string())
        .collect();

    match (read(USERNAME), read(PASSWORD)) {
        (Some(username), Some(password)) if missing.is_empty() => {
            Ok(Credentials::new(username, password))
        }
        _ => Err(SecretError::MissingFields(missing)),
    }
}
