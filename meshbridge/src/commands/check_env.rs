// meshbridge/src/commands/check_env.rs
//
// USE CASE: Verify the catalog endpoint environment before starting.

use miette::{Result, miette};

use meshbridge_core::infrastructure::config::CatalogEnvironment;

pub fn execute() -> Result<()> {
    match CatalogEnvironment::from_env() {
        Some(env) => {
            println!("✅ Catalog configured: {} (user: {})", env.endpoint, env.user);
            Ok(())
        }
        None => {
            let missing = CatalogEnvironment::missing_variables(|k| std::env::var(k).ok());
            Err(miette!(
                help = "Export the variables before starting the connector.",
                "Catalog environment is not configured; missing: {}",
                missing.join(", ")
            ))
        }
    }
}
