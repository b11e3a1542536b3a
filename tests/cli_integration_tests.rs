//! Integration tests for `criteria`, `schema`, and top-level CLI behavior.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn help_lists_subcommands() {
    vpat!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("criteria"))
        .stdout(predicate::str::contains("schema"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn missing_subcommand_is_usage_error() {
    vpat!().assert().code(2);
}

#[test]
fn criteria_lists_full_catalog() {
    vpat!()
        .args(["criteria"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1.1.1   A   Non-text Content [automated]"))
        .stdout(predicate::str::contains("4.1.3   AA  Status Messages [hybrid]"))
        .stdout(predicate::str::ends_with("55 criteria\n"));
}

#[test]
fn criteria_filters_level_as_json() {
    let output = vpat!()
        .args(["criteria", "--level", "aa", "-f", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let criteria: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let criteria = criteria.as_array().unwrap();
    assert_eq!(criteria.len(), 24);
    assert!(criteria.iter().all(|c| c["level"] == "AA"));
    assert!(criteria[0].get("ruleIds").is_some());
}

#[test]
fn criteria_rejects_unknown_level() {
    vpat!()
        .args(["criteria", "--level", "aaaa"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown WCAG level"));
}

#[test]
fn schema_prints_json_schema() {
    let output = vpat!().args(["schema"]).output().unwrap();
    assert!(output.status.success());

    let schema: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        schema["$id"],
        "https://github.com/agentplexus/vibium-go/vpat/vpat.schema.json"
    );
    assert_eq!(schema["title"], "VPAT Report Schema");
}

#[test]
fn schema_writes_file() {
    let fixture = TestFixture::new();

    vpat!()
        .current_dir(fixture.path())
        .args(["schema", "-o", "vpat.schema.json"])
        .assert()
        .success();

    assert!(fixture.read("vpat.schema.json").contains("\"$id\""));
}

#[test]
fn quiet_schema_still_prints() {
    vpat!()
        .args(["-q", "schema"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"$id\""));
}
