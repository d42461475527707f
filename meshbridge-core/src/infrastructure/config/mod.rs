pub mod environment;
pub mod settings;

pub use environment::CatalogEnvironment;
pub use settings::{
    ConnectorSettings, VaultSettings, load_settings, load_settings_file, settings_from_env,
};
