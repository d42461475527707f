// meshbridge-core/src/infrastructure/config/environment.rs
//
// Catalog endpoint and login, read once at process start.

use std::fmt;

use crate::domain::credentials::SecretString;

pub const ENV_ENDPOINT: &str = "OPENMETADATA_ENDPOINT";
pub const ENV_USER: &str = "OPENMETADATA_USER";
pub const ENV_PASSWORD: &str = "OPENMETADATA_PASSWORD";

#[derive(Clone)]
pub struct CatalogEnvironment {
    pub endpoint: String,
    pub user: String,
    pub password: SecretString,
}

impl CatalogEnvironment {
    /// `None` unless all three variables are set and non-empty.
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|v| !v.is_empty());
        Some(Self {
            endpoint: read(ENV_ENDPOINT)?,
            user: read(ENV_USER)?,
            password: SecretString::new(read(ENV_PASSWORD)?),
        })
    }

    /// Names of the variables that are unset or empty.
    pub fn missing_variables<F>(lookup: F) -> Vec<&'static str>
    where
        F: Fn(&str) -> Option<String>,
    {
        [ENV_ENDPOINT, ENV_USER, ENV_PASSWORD]
            .into_iter()
            .filter(|key| lookup(key).is_none_or(|v| v.is_empty()))
            .collect()
    }
}

impl fmt::Debug for CatalogEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogEnvironment")
            .field("endpoint", &self.endpoint)
            .field("user", &self.user)
            .field("password", &self.password)
            .finish()
    }
}
