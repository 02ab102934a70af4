// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{fs, path::Path};

use assert_cmd::Command;
use tempfile::TempDir;

const TOKEN_SIERRA: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../starkdeploy-tools/testdata/token.contract_class.json"
);

const MANIFEST: &str = r#"
[contracts.ethrx]
spec = "ethrx"
sierra_path = "target/dev/ethrx.contract_class.json"
casm_path = "target/dev/ethrx.compiled_contract_class.json"

[contracts.ethrx.args]
owner = "0x1"
name = "A"
symbol = "B"
base_uri = "C"
contract_uri = "D"
mint_token = "0x2"
mint_price = 5
max_supply = 7

[contracts.ethrx.networks.mainnet]
max_supply = 9
"#;

fn project(manifest: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("Starkdeploy.toml"), manifest).unwrap();
    dir
}

/// A project holding only the Sierra class of the token contract.
fn sierra_only_project(manifest: &str) -> TempDir {
    let dir = project(manifest);
    let target = dir.path().join("target/dev");
    fs::create_dir_all(&target).unwrap();
    fs::copy(TOKEN_SIERRA, target.join("token.contract_class.json")).unwrap();
    dir
}

fn calldata(dir: &Path, network: &str) -> Vec<String> {
    let output = Command::cargo_bin("starkdeploy")
        .unwrap()
        .current_dir(dir)
        .args(["calldata", "--network", network])
        .output()
        .unwrap();
    assert!(output.status.success(), "{output:?}");
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn encodes_registry_spec_without_artifacts() {
    let dir = project(MANIFEST);
    let expected = [
        "0x1", // owner
        "0x0", "0x41", "0x1", // name
        "0x0", "0x42", "0x1", // symbol
        "0x0", "0x43", "0x1", // base_uri
        "0x0", "0x44", "0x1", // contract_uri
        "0x2", // mint_token
        "0x5", "0x0", // mint_price
        "0x7", "0x0", // max_supply
    ];
    assert_eq!(calldata(dir.path(), "local"), expected);

    let mainnet = calldata(dir.path(), "mainnet");
    assert_eq!(mainnet[16], "0x9");
}

#[test]
fn rejects_unknown_argument() {
    let manifest = MANIFEST.replace("max_supply = 7", "max_supply = 7\nsupply = 7");
    let dir = project(&manifest);
    Command::cargo_bin("starkdeploy")
        .unwrap()
        .current_dir(dir.path())
        .arg("calldata")
        .assert()
        .failure()
        .stdout("");
}

#[test]
fn missing_manifest() {
    let dir = TempDir::new().unwrap();
    Command::cargo_bin("starkdeploy")
        .unwrap()
        .current_dir(dir.path())
        .args(["calldata", "--contract", "ethrx"])
        .assert()
        .failure();
}

#[test]
fn rejects_unquoted_hex_address() {
    let manifest = MANIFEST.replace(r#"owner = "0x1""#, "owner = 0x1");
    let dir = project(&manifest);
    Command::cargo_bin("starkdeploy")
        .unwrap()
        .current_dir(dir.path())
        .arg("calldata")
        .assert()
        .failure()
        .stdout("");
}

#[test]
fn derives_spec_from_sierra_without_casm() {
    let dir = sierra_only_project(
        r#"
[contracts.token]
sierra_path = "target/dev/token.contract_class.json"
casm_path = "target/dev/token.compiled_contract_class.json"

[contracts.token.args]
owner = "0x1"
initial_supply = 5
"#,
    );
    assert_eq!(calldata(dir.path(), "local"), ["0x1", "0x5", "0x0"]);
}

#[test]
fn checks_registry_spec_against_sierra_without_casm() {
    let manifest = MANIFEST
        .replace("ethrx.contract_class.json", "token.contract_class.json")
        .replace("ethrx.compiled_contract_class.json", "token.compiled_contract_class.json");
    let dir = sierra_only_project(&manifest);
    Command::cargo_bin("starkdeploy")
        .unwrap()
        .current_dir(dir.path())
        .arg("calldata")
        .assert()
        .failure()
        .stdout("");
}
