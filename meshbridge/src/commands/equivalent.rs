// meshbridge/src/commands/equivalent.rs
//
// USE CASE: Decide whether an existing catalog service can be reused.

use miette::Result;
use std::path::PathBuf;

use meshbridge_core::{ConfigMap, ConfigValue};

use crate::commands::{build_registry, load_document, translator};

pub fn execute(engine: String, request: PathBuf, service: PathBuf, check: bool) -> Result<()> {
    let registry = build_registry(None)?;
    let translator = translator(&registry, &engine)?;

    let request_config: ConfigMap = load_document(&request)?;
    let service_config: ConfigMap = load_document(&service)?;

    if translator.configs_equivalent(&request_config, &service_config) {
        println!("equivalent");
        return Ok(());
    }

    println!("different");
    let diverging = diverging_keys(&request_config, &service_config);
    eprintln!("⚠️  Keys missing or different in the service config: {:?}", diverging);

    if check {
        eprintln!("💥 --check mode: configs differ.");
        std::process::exit(1);
    }
    Ok(())
}

/// Request keys that would make the containment check fail. Absent service keys compare as null.
fn diverging_keys<'a>(request: &'a ConfigMap, service: &ConfigMap) -> Vec<&'a String> {
    request
        .iter()
        .filter(|(k, v)| service.get(*k).unwrap_or(&ConfigValue::Null) != *v)
        .map(|(k, _)| k)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(yaml: &str) -> ConfigMap {
        #[allow(clippy::unwrap_used)]
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_null_request_key_absent_from_service_is_not_listed() {
        let request = map("a: ~\nb: 1");
        let service = map("b: 2");

        assert_eq!(diverging_keys(&request, &service), vec!["b"]);
    }

    #[test]
    fn test_missing_and_changed_keys_are_listed() {
        let request = map("a: 1\nb: x\nc: true");
        let service = map("b: y\nc: true\nextra: 0");

        assert_eq!(diverging_keys(&request, &service), vec!["a", "b"]);
    }
}
