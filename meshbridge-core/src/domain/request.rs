// meshbridge-core/src/domain/request.rs
//
// The slice of the catalog's asset creation request that naming rules need.

use serde::{Deserialize, Serialize};

use crate::domain::value::{ConfigMap, ConfigValue};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssetRequest {
    #[serde(rename = "destinationCatalogID", default)]
    pub destination_catalog_id: String,

    #[serde(
        rename = "destinationAssetID",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub destination_asset_id: Option<String>,

    pub details: ResourceDetails,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_metadata: Option<ConfigValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDetails {
    pub connection: Connection,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_format: Option<String>,
}

/// A connection is its type name plus one entry per engine, keyed by the
/// engine's lowercase tag (`mysql: {host: .., table: ..}`).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Connection {
    pub name: String,

    #[serde(flatten)]
    pub additional_properties: ConfigMap,
}

impl CreateAssetRequest {
    pub fn connection_properties(&self, engine_tag: &str) -> Option<&ConfigValue> {
        self.details.connection.additional_properties.get(engine_tag)
    }
}
