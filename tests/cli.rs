use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn fixture(name: &str) -> std::path::PathBuf {
    Path::new("tests").join("fixtures").join(name)
}

fn cmd() -> Command {
    Command::cargo_bin("accountant-import").unwrap()
}

#[test]
fn writes_document_and_reports_counts() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("import.json");

    cmd()
        .arg("--suppliers")
        .arg(fixture("suppliers.csv"))
        .arg("--invoices")
        .arg(fixture("invoices.csv"))
        .arg("--out")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Wrote {}", out.display())))
        .stdout(predicate::str::contains("Suppliers: 3"))
        .stdout(predicate::str::contains("Expenses: 5"));

    let document: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
    assert_eq!(document["suppliers"].as_array().unwrap().len(), 3);
    assert_eq!(document["expenses"].as_array().unwrap().len(), 5);
    assert_eq!(document["files"], serde_json::json!([]));
}

#[test]
fn missing_input_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("import.json");

    cmd()
        .args(["-s", "does-not-exist.csv", "-i"])
        .arg(fixture("invoices.csv"))
        .arg("-o")
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist.csv"));

    assert!(!out.exists(), "no partial output on input failure");
}

#[test]
fn aliases_file_overrides_columns() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("import.json");
    let aliases = dir.path().join("aliases.ron");
    std::fs::write(&aliases, r#"(invoice: (description: ["Date"]))"#).unwrap();

    cmd()
        .arg("-s")
        .arg(fixture("suppliers.csv"))
        .arg("-i")
        .arg(fixture("invoices.csv"))
        .arg("-o")
        .arg(&out)
        .arg("-a")
        .arg(&aliases)
        .assert()
        .success();

    let document: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
    assert_eq!(document["expenses"][0]["description"], "2024-01-01");
}

#[test]
fn broken_aliases_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let aliases = dir.path().join("aliases.ron");
    std::fs::write(&aliases, "(invoice: [").unwrap();

    cmd()
        .arg("-s")
        .arg(fixture("suppliers.csv"))
        .arg("-i")
        .arg(fixture("invoices.csv"))
        .arg("-o")
        .arg(dir.path().join("import.json"))
        .arg("-a")
        .arg(&aliases)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not load aliases"));
}
