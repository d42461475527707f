// meshbridge/src/commands/names.rs
//
// USE CASE: Compute catalog names for an asset creation request.

use miette::Result;
use serde::Serialize;
use std::path::PathBuf;

use meshbridge_core::BridgeError;
use meshbridge_core::domain::CreateAssetRequest;
use meshbridge_core::domain::naming::qualified_name;

use crate::cli::OutputFormat;
use crate::commands::{build_registry, emit, load_document, translator};

#[derive(Serialize)]
struct AssetNames {
    database: String,
    schema: String,
    table: String,
    qualified_name: String,
}

pub fn execute(
    engine: String,
    request: PathBuf,
    service: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let registry = build_registry(None)?;
    let translator = translator(&registry, &engine)?;

    let request: CreateAssetRequest = load_document(&request)?;

    let database = translator.database_name(&request);
    let schema = translator.database_schema_name(&request);
    let table = translator.table_name(&request).map_err(BridgeError::from)?;

    let qualified_name = qualified_name(
        service
            .iter()
            .chain([&database, &schema, &table])
            .filter(|part| !part.is_empty()),
    );

    emit(
        &AssetNames {
            database,
            schema,
            table,
            qualified_name,
        },
        format,
        None,
    )
}
