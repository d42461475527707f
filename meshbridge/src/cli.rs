// meshbridge/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "meshbridge")]
#[command(
    about = "Translates connection configs between the policy framework and the data catalog",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Output document format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Yaml,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 📋 Lists the supported engine types
    Engines,

    /// ➡️  Policy-framework config -> catalog config
    ToCatalog {
        /// Engine type tag (ex: "mysql")
        #[arg(long, short)]
        engine: String,

        /// YAML/JSON file holding the policy-framework connection config
        #[arg(long, short)]
        input: PathBuf,

        /// Vault path of the credentials secret
        #[arg(long)]
        credentials: Option<String>,

        /// Directory containing meshbridge.yaml (vault settings)
        #[arg(long, env = "MESHBRIDGE_SETTINGS_DIR")]
        settings_dir: Option<PathBuf>,

        /// Write the result here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// ⬅️  Catalog config -> policy-framework config
    FromCatalog {
        #[arg(long, short)]
        engine: String,

        /// Table name from the catalog asset metadata
        #[arg(long, short)]
        table: String,

        /// YAML/JSON file holding the catalog connection config
        #[arg(long, short)]
        input: PathBuf,

        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// ⚖️  Checks whether an existing catalog service config covers a request
    Equivalent {
        #[arg(long, short)]
        engine: String,

        /// Config derived from the request
        #[arg(long)]
        request: PathBuf,

        /// Config of the existing catalog service
        #[arg(long)]
        service: PathBuf,

        /// Exit with error if the configs differ
        #[arg(long)]
        check: bool,
    },

    /// 🏷️  Computes catalog names for an asset creation request
    Names {
        #[arg(long, short)]
        engine: String,

        /// YAML/JSON asset creation request
        #[arg(long)]
        request: PathBuf,

        /// Catalog service name used as the first segment of the qualified name
        #[arg(long)]
        service: Option<String>,
    },

    /// 🔐 Verifies the catalog endpoint environment variables
    CheckEnv,
}
