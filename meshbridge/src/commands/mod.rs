// meshbridge/src/commands/mod.rs

pub mod check_env;
pub mod engines;
pub mod equivalent;
pub mod from_catalog;
pub mod names;
pub mod to_catalog;

use miette::{IntoDiagnostic, Result, WrapErr};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use meshbridge_core::infrastructure::config::{ConnectorSettings, load_settings, settings_from_env};
use meshbridge_core::infrastructure::fs::atomic_write;
use meshbridge_core::{BridgeError, EngineRegistry, EngineTranslator};

use crate::cli::OutputFormat;

/// Reads a YAML (or JSON) document.
pub fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
    serde_yaml::from_str(&content)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to parse {}", path.display()))
}

pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Yaml => serde_yaml::to_string(value).into_diagnostic(),
        OutputFormat::Json => serde_json::to_string_pretty(value)
            .map(|s| s + "\n")
            .into_diagnostic(),
    }
}

/// Prints to stdout, or writes atomically to `output`.
pub fn emit<T: Serialize>(
    value: &T,
    format: OutputFormat,
    output: Option<&PathBuf>,
) -> Result<()> {
    let rendered = render(value, format)?;
    match output {
        Some(path) => {
            atomic_write(path, rendered).map_err(BridgeError::from)?;
            eprintln!("✨ Written to {}", path.display());
        }
        None => print!("{}", rendered),
    }
    Ok(())
}

pub fn build_registry(settings_dir: Option<&Path>) -> Result<EngineRegistry> {
    let settings: ConnectorSettings = match settings_dir {
        Some(dir) => load_settings(dir).map_err(BridgeError::from)?,
        None => settings_from_env().map_err(BridgeError::from)?,
    };
    EngineRegistry::from_settings(&settings).map_err(|e| BridgeError::from(e).into())
}

pub fn translator(
    registry: &EngineRegistry,
    engine: &str,
) -> Result<Arc<dyn EngineTranslator>> {
    registry
        .get(engine)
        .ok_or_else(|| BridgeError::UnsupportedEngine(engine.to_string()).into())
}
