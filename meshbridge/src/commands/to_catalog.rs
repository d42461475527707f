// meshbridge/src/commands/to_catalog.rs
//
// USE CASE: Translate a policy-framework connection into a catalog config.

use miette::Result;
use std::path::PathBuf;
use tracing::info;

use meshbridge_core::ConfigMap;

use crate::cli::OutputFormat;
use crate::commands::{build_registry, emit, load_document, translator};

pub struct ToCatalogArgs {
    pub engine: String,
    pub input: PathBuf,
    pub credentials: Option<String>,
    pub settings_dir: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

pub async fn execute(args: ToCatalogArgs, format: OutputFormat) -> Result<()> {
    let registry = build_registry(args.settings_dir.as_deref())?;
    let translator = translator(&registry, &args.engine)?;

    let fybrik_config: ConfigMap = load_document(&args.input)?;
    info!(
        engine = %args.engine,
        keys = fybrik_config.len(),
        credentials = args.credentials.is_some(),
        "Translating to catalog configuration"
    );
    let catalog_config = translator
        .to_catalog_config(&fybrik_config, &args.engine, args.credentials.as_deref())
        .await;

    emit(&catalog_config, format, args.output.as_ref())
}
