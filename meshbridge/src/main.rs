// meshbridge/src/main.rs

mod cli;
mod commands;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use commands::to_catalog::ToCatalogArgs;

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Logs go to stderr so stdout only carries the translated document.
    // RUST_LOG=debug meshbridge to-catalog ... for details
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = cli.format;

    match cli.command {
        Commands::Engines => commands::engines::execute(format),

        Commands::ToCatalog {
            engine,
            input,
            credentials,
            settings_dir,
            output,
        } => {
            let args = ToCatalogArgs {
                engine,
                input,
                credentials,
                settings_dir,
                output,
            };
            commands::to_catalog::execute(args, format).await
        }

        Commands::FromCatalog {
            engine,
            table,
            input,
            output,
        } => commands::from_catalog::execute(engine, table, input, output, format),

        Commands::Equivalent {
            engine,
            request,
            service,
            check,
        } => commands::equivalent::execute(engine, request, service, check),

        Commands::Names {
            engine,
            request,
            service,
        } => commands::names::execute(engine, request, service, format),

        Commands::CheckEnv => commands::check_env::execute(),
    }
}
