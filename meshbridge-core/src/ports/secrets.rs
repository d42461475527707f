// meshbridge-core/src/ports/secrets.rs
//
// What the resolver needs from a vault, without knowing how it is reached.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::infrastructure::error::SecretError;

/// Key/value bundle stored at a credentials handle. Ephemeral: callers
/// extract what they need and drop it.
pub type SecretBundle = HashMap<String, serde_json::Value>;

#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Fetches the bundle stored at `handle` (an opaque vault path).
    async fn get_secret_map(&self, handle: &str) -> Result<SecretBundle, SecretError>;
}
