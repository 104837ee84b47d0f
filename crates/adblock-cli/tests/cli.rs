//! Binary smoke tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("adblock-sync").unwrap();
    cmd.env_remove("CLOUDFLARE_ACCOUNT_ID")
        .env_remove("CLOUDFLARE_TOKEN")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cloudflare"))
        .stdout(predicate::str::contains("--account-id"))
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn test_missing_account_id() {
    let dir = tempfile::tempdir().unwrap();

    cmd()
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cloudflare account id required"));
}

#[test]
fn test_missing_token() {
    let dir = tempfile::tempdir().unwrap();

    cmd()
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .env("CLOUDFLARE_ACCOUNT_ID", "acc")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cloudflare API token required"));
}

#[test]
fn test_unreadable_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "feeds = 3").unwrap();

    cmd()
        .arg("--config")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}
