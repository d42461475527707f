// meshbridge-core/src/ports/translator.rs
//
// Capability set every supported database engine implements. The registry
// hands these out as trait objects so callers stay engine-agnostic.

use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::fields::StandardFieldSet;
use crate::domain::request::CreateAssetRequest;
use crate::domain::value::{ConfigMap, ConfigValue};

#[async_trait]
pub trait EngineTranslator: Send + Sync {
    /// Canonical lowercase tag (`mysql`), used for registry lookups and to
    /// tag assets.
    fn tag(&self) -> &'static str;

    /// Catalog keys this engine knows about.
    fn standard_fields(&self) -> StandardFieldSet;

    /// Policy-framework config -> catalog config. Lossy: unknown keys are
    /// dropped. Credentials are injected on a best-effort basis when a
    /// handle is given and a vault is configured.
    async fn to_catalog_config(
        &self,
        fybrik_config: &ConfigMap,
        connection_type: &str,
        credentials: Option<&str>,
    ) -> ConfigMap;

    /// Catalog config -> policy-framework config, plus the engine tag.
    /// Non-standard keys survive under `other`; credentials never do.
    fn from_catalog_config(
        &self,
        table_name: &str,
        catalog_config: &ConfigMap,
    ) -> Result<(ConfigMap, &'static str), DomainError>;

    /// True when every entry of `request` appears, deep-equal, in `service`.
    /// `service` may carry extra keys.
    fn configs_equivalent(&self, request: &ConfigMap, service: &ConfigMap) -> bool {
        request.iter().all(|(key, value)| {
            // A missing key compares as null, so `{a: null}` matches `{}`.
            service.get(key).unwrap_or(&ConfigValue::Null) == value
        })
    }

    fn database_name(&self, request: &CreateAssetRequest) -> String;

    fn database_schema_name(&self, request: &CreateAssetRequest) -> String;

    fn table_name(&self, request: &CreateAssetRequest) -> Result<String, DomainError>;
}
