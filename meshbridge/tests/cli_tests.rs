use anyhow::Result;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::path::PathBuf;
use std::process::Command;

const SCRUBBED_ENV: [&str; 6] = [
    "MESHBRIDGE_VAULT_ADDRESS",
    "MESHBRIDGE_VAULT_TOKEN",
    "MESHBRIDGE_SETTINGS_DIR",
    "OPENMETADATA_ENDPOINT",
    "OPENMETADATA_USER",
    "OPENMETADATA_PASSWORD",
];

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn meshbridge() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("meshbridge"));
    for var in SCRUBBED_ENV {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_engines_lists_mysql() -> Result<()> {
    meshbridge()
        .arg("engines")
        .assert()
        .success()
        .stdout("- mysql\n");
    Ok(())
}

#[test]
fn test_to_catalog_without_vault() -> Result<()> {
    let output = meshbridge()
        .args(["to-catalog", "--engine", "mysql", "--input"])
        .arg(fixture("fybrik_mysql.yaml"))
        .output()?;
    assert!(output.status.success());

    let doc: serde_yaml::Value = serde_yaml::from_slice(&output.stdout)?;
    assert_eq!(doc["hostPort"], "mysql.fybrik-system:3306");
    assert_eq!(doc["databaseSchema"], "sales");
    assert_eq!(doc["scheme"], "mysql+pymysql");
    assert!(doc.get("username").is_none());
    assert!(doc.get("ssl").is_none());
    Ok(())
}

#[test]
fn test_to_catalog_survives_unreachable_vault() -> Result<()> {
    let settings = tempfile::tempdir()?;
    std::fs::copy(
        fixture("unreachable_vault.yaml"),
        settings.path().join("meshbridge.yaml"),
    )?;

    meshbridge()
        .args(["to-catalog", "-e", "mysql", "--credentials", "/v1/secret/db", "-i"])
        .arg(fixture("fybrik_mysql.yaml"))
        .arg("--settings-dir")
        .arg(settings.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("hostPort: mysql.fybrik-system:3306"))
        .stdout(predicate::str::contains("username").not());
    Ok(())
}

#[test]
fn test_to_catalog_writes_output_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let out = dir.path().join("catalog.json");

    meshbridge()
        .args(["--format", "json", "to-catalog", "-e", "mysql", "-i"])
        .arg(fixture("fybrik_mysql.yaml"))
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    let doc: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(out)?)?;
    assert_eq!(doc["hostPort"], "mysql.fybrik-system:3306");
    Ok(())
}

#[test]
fn test_from_catalog_strips_credentials() -> Result<()> {
    let output = meshbridge()
        .args(["from-catalog", "-e", "mysql", "-t", "orders", "-i"])
        .arg(fixture("catalog_mysql.yaml"))
        .output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(!stdout.contains("do-not-leak"));
    assert!(!stdout.contains("svc-reader"));
    insta::assert_snapshot!("from_catalog_mysql", stdout);
    Ok(())
}

#[test]
fn test_unsupported_engine_fails() -> Result<()> {
    meshbridge()
        .args(["from-catalog", "-e", "MySQL", "-t", "orders", "-i"])
        .arg(fixture("catalog_mysql.yaml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported engine type"));
    Ok(())
}

#[test]
fn test_equivalent_is_containment() -> Result<()> {
    let request = tempfile::NamedTempFile::new()?;
    std::fs::write(
        request.path(),
        "hostPort: mysql.fybrik-system:3306\ndatabaseSchema: sales\n",
    )?;

    meshbridge()
        .args(["equivalent", "-e", "mysql", "--request"])
        .arg(request.path())
        .arg("--service")
        .arg(fixture("service_mysql.yaml"))
        .assert()
        .success()
        .stdout("equivalent\n");

    // Reversed: the service config carries a key the request lacks.
    meshbridge()
        .args(["equivalent", "-e", "mysql", "--check", "--request"])
        .arg(fixture("service_mysql.yaml"))
        .arg("--service")
        .arg(request.path())
        .assert()
        .failure()
        .stdout("different\n");
    Ok(())
}

#[test]
fn test_names_from_request() -> Result<()> {
    let output = meshbridge()
        .args(["--format", "json", "names", "-e", "mysql"])
        .args(["--service", "mysql-svc", "--request"])
        .arg(fixture("create_asset_request.json"))
        .output()?;
    assert!(output.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(doc["database"], "default");
    assert_eq!(doc["schema"], "sales");
    assert_eq!(doc["table"], "orders.2024");
    assert_eq!(doc["qualified_name"], "mysql-svc.default.sales.\"orders.2024\"");
    Ok(())
}

#[test]
fn test_check_env() -> Result<()> {
    meshbridge()
        .arg("check-env")
        .env("OPENMETADATA_ENDPOINT", "http://openmetadata:8585/api")
        .assert()
        .failure()
        .stderr(predicate::str::contains("OPENMETADATA_USER"));

    meshbridge()
        .arg("check-env")
        .env("OPENMETADATA_ENDPOINT", "http://openmetadata:8585/api")
        .env("OPENMETADATA_USER", "admin")
        .env("OPENMETADATA_PASSWORD", "admin")
        .assert()
        .success()
        .stdout(predicate::str::contains("http://openmetadata:8585/api"));
    Ok(())
}
