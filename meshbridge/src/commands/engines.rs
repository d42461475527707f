// meshbridge/src/commands/engines.rs
//
// USE CASE: List the registered engine types.

use miette::Result;

use crate::cli::OutputFormat;
use crate::commands::{build_registry, emit};

pub fn execute(format: OutputFormat) -> Result<()> {
    let registry = build_registry(None)?;
    emit(&registry.tags(), format, None)
}
