// meshbridge-core/src/infrastructure/vault.rs
//
// HTTP adapter for the vault. A credentials handle is the raw API path of
// the secret (e.g. `/v1/kubernetes-secrets/db-creds?namespace=default`),
// so the store simply issues `GET {address}{handle}`.
//
// Tokens and secret values are never logged.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, instrument};

use crate::domain::credentials::SecretString;
use crate::infrastructure::config::VaultSettings;
use crate::infrastructure::error::SecretError;
use crate::ports::secrets::{SecretBundle, SecretStore};

const TOKEN_HEADER: &str = "X-Vault-Token";

enum VaultAuth {
    Token(SecretString),
    Kubernetes {
        auth_path: String,
        role: String,
        jwt_file_path: PathBuf,
    },
}

pub struct VaultSecretStore {
    http: reqwest::Client,
    address: String,
    auth: VaultAuth,
}

#[derive(Deserialize)]
struct SecretResponse {
    data: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct LoginResponse {
    auth: LoginAuth,
}

#[derive(Deserialize)]
struct LoginAuth {
    client_token: String,
}

impl VaultSecretStore {
    pub fn new(settings: &VaultSettings) -> Result<Self, SecretError> {
        if settings.address.is_empty() {
            return Err(SecretError::Config("vault address cannot be empty".into()));
        }

        let auth = match (&settings.token, &settings.role) {
            (Some(token), _) if !token.is_empty() => VaultAuth::Token(token.clone()),
            (_, Some(role)) if !role.is_empty() => VaultAuth::Kubernetes {
                auth_path: settings.auth_path.clone(),
                role: role.clone(),
                jwt_file_path: settings.jwt_file_path.clone(),
            },
            _ => {
                return Err(SecretError::Config(
                    "either a token or a kubernetes role is required".into(),
                ));
            }
        };

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| SecretError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            address: settings.address.trim_end_matches('/').to_string(),
            auth,
        })
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.address, path)
        } else {
            format!("{}/{}", self.address, path)
        }
    }

    async fn token(&self) -> Result<SecretString, SecretError> {
        match &self.auth {
            VaultAuth::Token(token) => Ok(token.clone()),
            VaultAuth::Kubernetes {
                auth_path,
                role,
                jwt_file_path,
            } => self.kubernetes_login(auth_path, role, jwt_file_path).await,
        }
    }

    #[instrument(skip(self, jwt_file_path))]
    async fn kubernetes_login(
        &self,
        auth_path: &str,
        role: &str,
        jwt_file_path: &Path,
    ) -> Result<SecretString, SecretError> {
        let jwt = tokio::fs::read_to_string(jwt_file_path).await.map_err(|e| {
            SecretError::Config(format!(
                "cannot read service account token at {:?}: {}",
                jwt_file_path, e
            ))
        })?;
        let jwt = SecretString::new(jwt.trim());

        let body = serde_json::json!({ "jwt": jwt.expose_secret(), "role": role });
        let response = self
            .http
            .post(self.url(auth_path))
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SecretError::AuthenticationFailed(format!(
                "kubernetes login for role '{}' returned {}",
                role, status
            )));
        }

        let login: LoginResponse = response
            .json()
            .await
            .map_err(|e| SecretError::InvalidResponse(format!("login response: {}", e)))?;
        debug!("Vault kubernetes login succeeded");
        Ok(SecretString::new(login.auth.client_token))
    }
}

#[async_trait]
impl SecretStore for VaultSecretStore {
    #[instrument(skip(self))]
    async fn get_secret_map(&self, handle: &str) -> Result<SecretBundle, SecretError> {
        let token = self.token().await?;

        let response = self
            .http
            .get(self.url(handle))
            .header(TOKEN_HEADER, token.expose_secret())
            .send()
            .await
            .map_err(transport_error)?;

        match response.status() {
            s if s.is_success() => {}
            StatusCode::NOT_FOUND => return Err(SecretError::NotFound(handle.to_string())),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(SecretError::AuthenticationFailed(format!(
                    "access to '{}' denied",
                    handle
                )));
            }
            other => {
                return Err(SecretError::InvalidResponse(format!(
                    "reading '{}' returned {}",
                    handle, other
                )));
            }
        }

        let body: SecretResponse = response
            .json()
            .await
            .map_err(|e| SecretError::InvalidResponse(e.to_string()))?;

        let data = body
            .data
            .ok_or_else(|| SecretError::NotFound(handle.to_string()))?;
        let bundle = unwrap_kv2(data);

        match bundle {
            serde_json::Value::Object(map) => {
                debug!(keys = map.len(), "Secret bundle fetched");
                Ok(map.into_iter().collect())
            }
            other => Err(SecretError::InvalidResponse(format!(
                "secret data at '{}' is not an object ({})",
                handle,
                json_type_name(&other)
            ))),
        }
    }
}

// KV v2 wraps the payload as `{data: {...}, metadata: {...}}`.
fn unwrap_kv2(data: serde_json::Value) -> serde_json::Value {
    match data {
        serde_json::Value::Object(mut map)
            if map.contains_key("metadata") && map.get("data").is_some_and(|d| d.is_object()) =>
        {
            map.remove("data").unwrap_or_default()
        }
        other => other,
    }
}

fn transport_error(err: reqwest::Error) -> SecretError {
    if err.is_connect() || err.is_timeout() {
        SecretError::Unreachable(err.to_string())
    } else {
        SecretError::InvalidResponse(err.to_string())
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::Result;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const HANDLE: &str = "/v1/kubernetes-secrets/db-creds?namespace=fybrik-system";

    async fn mock_secret(server: &MockServer, token: &str, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path("/v1/kubernetes-secrets/db-creds"))
            .and(query_param("namespace", "fybrik-system"))
            .and(header(TOKEN_HEADER, token))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_reads_secret_with_static_token() -> Result<()> {
        let server = MockServer::start().await;
        mock_secret(
            &server,
            "root",
            json!({"data": {"username": "admin", "password": "pw"}}),
        )
        .await;

        let settings = VaultSettings::with_address(server.uri()).with_token("root");
        let store = VaultSecretStore::new(&settings)?;
        let bundle = store.get_secret_map(HANDLE).await?;

        assert_eq!(bundle["username"], json!("admin"));
        assert_eq!(bundle["password"], json!("pw"));
        Ok(())
    }

    #[tokio::test]
    async fn test_unwraps_kv2_payload() -> Result<()> {
        let server = MockServer::start().await;
        mock_secret(
            &server,
            "root",
            json!({"data": {"data": {"username": "u"}, "metadata": {"version": 3}}}),
        )
        .await;

        let settings = VaultSettings::with_address(server.uri()).with_token("root");
        let store = VaultSecretStore::new(&settings)?;
        let bundle = store.get_secret_map(HANDLE).await?;

        assert_eq!(bundle.len(), 1);
        assert_eq!(bundle["username"], json!("u"));
        Ok(())
    }

    #[tokio::test]
    async fn test_kubernetes_login_then_read() -> Result<()> {
        let server = MockServer::start().await;
        let jwt = tempfile::NamedTempFile::new()?;
        std::fs::write(jwt.path(), "sa-jwt\n")?;

        Mock::given(method("POST"))
            .and(path("/v1/auth/kubernetes/login"))
            .and(body_json(json!({"jwt": "sa-jwt", "role": "fybrik"})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"auth": {"client_token": "k8s"}})),
            )
            .mount(&server)
            .await;
        mock_secret(
            &server,
            "k8s",
            json!({"data": {"username": "admin", "password": "pw"}}),
        )
        .await;

        let mut settings = VaultSettings::with_address(server.uri()).with_role("fybrik");
        settings.jwt_file_path = jwt.path().to_path_buf();
        let store = VaultSecretStore::new(&settings)?;

        let bundle = store.get_secret_map(HANDLE).await?;
        assert_eq!(bundle["username"], json!("admin"));
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_secret_is_not_found() -> Result<()> {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let settings = VaultSettings::with_address(server.uri()).with_token("root");
        let store = VaultSecretStore::new(&settings)?;
        let err = store.get_secret_map("/v1/secret/nope").await.unwrap_err();

        assert!(matches!(err, SecretError::NotFound(ref h) if h == "/v1/secret/nope"));
        Ok(())
    }

    #[tokio::test]
    async fn test_forbidden_is_authentication_failure() -> Result<()> {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let settings = VaultSettings::with_address(server.uri()).with_token("bad");
        let store = VaultSecretStore::new(&settings)?;
        let err = store.get_secret_map(HANDLE).await.unwrap_err();

        assert!(matches!(err, SecretError::AuthenticationFailed(_)));
        Ok(())
    }

    #[tokio::test]
    async fn test_unreachable_vault() -> Result<()> {
        // Nothing listens on port 1.
        let store = VaultSecretStore::new(
            &VaultSettings::with_address("http://127.0.0.1:1").with_token("root"),
        )?;
        let err = store.get_secret_map(HANDLE).await.unwrap_err();

        assert!(matches!(err, SecretError::Unreachable(_)));
        Ok(())
    }

    #[test]
    fn test_store_requires_auth_method() {
        let err = VaultSecretStore::new(&VaultSettings::with_address("http://vault:8200"));
        assert!(matches!(err, Err(SecretError::Config(_))));
    }
}
