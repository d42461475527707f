// meshbridge-core/src/application/engines/mysql.rs

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::application::secrets::SecretResolver;
use crate::domain::credentials::Credentials;
use crate::domain::error::DomainError;
use crate::domain::fields::{
    ADDITIONAL_PROPERTIES, DATABASE, DATABASE_SCHEMA, DEFAULT_DATABASE, DESTINATION_ASSET_ID,
    HOST, HOST_PORT, MYSQL_STANDARD_FIELDS, OTHER, PASSWORD, PORT, SCHEME, StandardFieldSet, TABLE,
    USERNAME,
};
use crate::domain::request::CreateAssetRequest;
use crate::domain::value::{ConfigMap, ConfigValue};
use crate::ports::translator::EngineTranslator;

pub const MYSQL_TAG: &str = "mysql";
pub const MYSQL_SCHEME: &str = "mysql+pymysql";
pub const DEFAULT_MYSQL_PORT: i64 = 3306;

pub struct MysqlTranslator {
    resolver: Option<SecretResolver>,
}

impl MysqlTranslator {
    /// `resolver` is `None` when no vault is configured; credentials are
    /// then never looked up.
    pub fn new(resolver: Option<SecretResolver>) -> Self {
        Self { resolver }
    }

    async fn credentials(&self, handle: Option<&str>) -> Option<Credentials> {
        let (resolver, handle) = (self.resolver.as_ref()?, handle?);
        // Best effort: the resolver already logged the failure, and
        // credential-less connections are legitimate.
        resolver
            .resolve(handle)
            .await
            .ok()
            .filter(Credentials::is_complete)
    }

    fn host_port(config: &ConfigMap) -> Option<String> {
        let host = config.get(HOST)?;
        let default_port = ConfigValue::Integer(DEFAULT_MYSQL_PORT);
        let port = config.get(PORT).unwrap_or(&default_port);

        match (host.to_address_part(), port.to_address_part()) {
            (Some(h), Some(p)) => Some(format!("{}:{}", h, p)),
            _ => {
                warn!(
                    host = host.type_name(),
                    port = port.type_name(),
                    "Cannot build hostPort from non-scalar values"
                );
                None
            }
        }
    }

    fn connection_properties<'a>(
        &self,
        request: &'a CreateAssetRequest,
    ) -> Result<&'a ConfigMap, DomainError> {
        let properties = request
            .connection_properties(MYSQL_TAG)
            .ok_or_else(|| DomainError::RequiredFieldMissing(MYSQL_TAG.to_string()))?;
        properties
            .as_map()
            .ok_or_else(|| DomainError::FailedToConvert(ADDITIONAL_PROPERTIES.to_string()))
    }
}

#[async_trait]
impl EngineTranslator for MysqlTranslator {
    fn tag(&self) -> &'static str {
        MYSQL_TAG
    }

    fn standard_fields(&self) -> StandardFieldSet {
        MYSQL_STANDARD_FIELDS
    }

    async fn to_catalog_config(
        &self,
        fybrik_config: &ConfigMap,
        connection_type: &str,
        credentials: Option<&str>,
    ) -> ConfigMap {
        debug!(connection_type, "Translating to catalog configuration");
        let mut ret = ConfigMap::new();

        if let Some(creds) = self.credentials(credentials).await {
            ret.insert(USERNAME.into(), creds.username.expose_secret().into());
            ret.insert(PASSWORD.into(), creds.password.expose_secret().into());
        }

        if let Some(host_port) = Self::host_port(fybrik_config) {
            ret.insert(HOST_PORT.into(), ConfigValue::String(host_port));
        }

        if let Some(database) = fybrik_config.get(DATABASE) {
            ret.insert(DATABASE_SCHEMA.into(), database.clone());
        }

        ret.insert(SCHEME.into(), MYSQL_SCHEME.into());
        ret
    }

    fn from_catalog_config(
        &self,
        table_name: &str,
        catalog_config: &ConfigMap,
    ) -> Result<(ConfigMap, &'static str), DomainError> {
        let mut ret = ConfigMap::new();
        let mut other = ConfigMap::new();

        for (key, value) in catalog_config {
            if MYSQL_STANDARD_FIELDS.contains(key) {
                ret.insert(key.clone(), value.clone());
            } else {
                other.insert(key.clone(), value.clone());
            }
        }

        // Table identity comes from the asset metadata, never the map.
        ret.insert(TABLE.into(), table_name.into());
        ret.insert(OTHER.into(), ConfigValue::Map(other));

        // Credentials flow vault -> catalog only.
        ret.remove(USERNAME);
        ret.remove(PASSWORD);

        if let Some(schema) = ret.remove(DATABASE_SCHEMA) {
            ret.insert(DATABASE.into(), schema);
        }

        if let Some(host_port) = ret.remove(HOST_PORT) {
            let host_port = host_port.expect_str(HOST_PORT)?;
            // Only the segment between the first and second colon is the port.
            let mut segments = host_port.split(':');
            let host = segments.next().unwrap_or_default();
            let port = segments.next();
            ret.insert(HOST.into(), host.into());
            match port.map(str::parse::<i64>) {
                Some(Ok(port)) => {
                    ret.insert(PORT.into(), port.into());
                }
                Some(Err(_)) => debug!(host_port, "Dropping unparseable port"),
                None => {}
            }
        }

        Ok((ret, MYSQL_TAG))
    }

    fn database_name(&self, _request: &CreateAssetRequest) -> String {
        DEFAULT_DATABASE.to_string()
    }

    fn database_schema_name(&self, request: &CreateAssetRequest) -> String {
        let properties = match self.connection_properties(request) {
            Ok(p) => p,
            Err(e) => {
                warn!(error = %e, "No mysql connection properties, using empty schema name");
                return String::new();
            }
        };
        match properties.get(DATABASE) {
            Some(ConfigValue::String(schema)) => schema.clone(),
            Some(other) => {
                warn!(found = other.type_name(), "Database name is not a string");
                String::new()
            }
            None => String::new(),
        }
    }

    fn table_name(&self, request: &CreateAssetRequest) -> Result<String, DomainError> {
        let properties = self.connection_properties(request)?;
        if let Some(table) = properties.get(TABLE) {
            return table.expect_str(TABLE).map(str::to_string);
        }
        request
            .destination_asset_id
            .clone()
            .ok_or_else(|| DomainError::RequiredFieldMissing(DESTINATION_ASSET_ID.to_string()))
    }
}
