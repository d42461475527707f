// meshbridge/src/commands/from_catalog.rs
//
// USE CASE: Translate a catalog config back into a policy-framework connection.

use miette::Result;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

use meshbridge_core::{BridgeError, ConfigMap};

use crate::cli::OutputFormat;
use crate::commands::{build_registry, emit, load_document, translator};

/// The connection document handed to the policy framework: the engine tag
/// names the single entry holding the translated config.
#[derive(Serialize)]
struct FybrikConnection {
    name: &'static str,
    #[serde(flatten)]
    properties: ConfigMap,
}

pub fn execute(
    engine: String,
    table: String,
    input: PathBuf,
    output: Option<PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    let registry = build_registry(None)?;
    let translator = translator(&registry, &engine)?;

    let catalog_config: ConfigMap = load_document(&input)?;
    info!(engine = %engine, table = %table, "Translating catalog configuration");
    let (config, tag) = translator
        .from_catalog_config(&table, &catalog_config)
        .map_err(BridgeError::from)?;

    let connection = FybrikConnection {
        name: tag,
        properties: ConfigMap::from([(tag.to_string(), config.into())]),
    };
    emit(&connection, format, output.as_ref())
}
