//! End-to-end tests for the jobmeta binary.
//!
//! Each test runs the binary against a temporary jobs root with HOME and
//! XDG_CONFIG_HOME pointed at the temp dir, so no user config leaks in.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    fn jobmeta(&self) -> Command {
        let mut cmd = Command::cargo_bin("jobmeta").unwrap();
        cmd.env("HOME", self.dir.path())
            .env("XDG_CONFIG_HOME", self.dir.path().join("xdg"))
            .env_remove("JOBMETA_CONFIG")
            .env_remove("JOBMETA_ROOT")
            .arg("--root")
            .arg(self.dir.path().join("jobs"));
        cmd
    }
}

#[test]
fn version_flag_works() {
    Command::cargo_bin("jobmeta")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("jobmeta"));
}

#[test]
fn set_then_get() {
    let sandbox = Sandbox::new();

    sandbox
        .jobmeta()
        .args(["set", "nightly", "env=prod", "owner=teamX", "env=staging"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved 3 metadata entries"));

    sandbox
        .jobmeta()
        .args(["get", "nightly", "env"])
        .assert()
        .success()
        .stdout("prod\n");
}

#[test]
fn show_raw_rendering() {
    let sandbox = Sandbox::new();
    sandbox
        .jobmeta()
        .args(["set", "nightly", "env=prod", "owner=teamX"])
        .assert()
        .success();

    sandbox
        .jobmeta()
        .args(["show", "nightly", "--raw"])
        .assert()
        .success()
        .stdout("MetadataCollection{env=prod;owner=teamX;}\n");
}

#[test]
fn show_json_document() {
    let sandbox = Sandbox::new();
    sandbox
        .jobmeta()
        .args(["set", "nightly", "env=prod"])
        .assert()
        .success();

    sandbox
        .jobmeta()
        .args(["show", "nightly", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kind\": \"jobmeta.job-property\""));
}

#[test]
fn get_missing_key_exits_nonzero() {
    let sandbox = Sandbox::new();
    sandbox
        .jobmeta()
        .args(["set", "nightly", "env=prod"])
        .assert()
        .success();

    sandbox
        .jobmeta()
        .args(["get", "nightly", "region"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("error: "));
}

#[test]
fn apply_from_stdin() {
    let sandbox = Sandbox::new();

    sandbox
        .jobmeta()
        .args(["apply", "nightly"])
        .write_stdin(
            r#"{"metadataJobProperty": "on", "listOfMetaData": {"key": "env", "value": "prod"}}"#,
        )
        .assert()
        .success();

    sandbox
        .jobmeta()
        .args(["get", "nightly", "env"])
        .assert()
        .success()
        .stdout("prod\n");
}

#[test]
fn second_identical_save_is_unchanged() {
    let sandbox = Sandbox::new();

    for _ in 0..2 {
        sandbox
            .jobmeta()
            .args(["set", "nightly", "env=prod"])
            .assert()
            .success();
    }

    sandbox
        .jobmeta()
        .args(["set", "nightly", "env=prod"])
        .assert()
        .success()
        .stdout(predicate::str::contains("unchanged"));
}

#[test]
fn quiet_suppresses_status() {
    let sandbox = Sandbox::new();
    sandbox
        .jobmeta()
        .args(["-q", "set", "nightly", "env=prod"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn list_and_clear() {
    let sandbox = Sandbox::new();
    for job in ["release", "nightly"] {
        sandbox
            .jobmeta()
            .args(["set", job, "env=prod"])
            .assert()
            .success();
    }

    sandbox
        .jobmeta()
        .arg("list")
        .assert()
        .success()
        .stdout("nightly\nrelease\n");

    sandbox.jobmeta().args(["clear", "nightly"]).assert().success();

    sandbox
        .jobmeta()
        .arg("list")
        .assert()
        .success()
        .stdout("release\n");
}

#[test]
fn config_file_sets_output() {
    let sandbox = Sandbox::new();
    let config_path = sandbox.dir.path().join("config.toml");
    std::fs::write(&config_path, "output = \"json\"\n").unwrap();

    sandbox
        .jobmeta()
        .args(["set", "nightly", "env=prod"])
        .assert()
        .success();

    sandbox
        .jobmeta()
        .env("JOBMETA_CONFIG", &config_path)
        .args(["get", "nightly", "env"])
        .assert()
        .success()
        .stdout("{\"key\":\"env\",\"value\":\"prod\"}\n");
}

#[test]
fn invalid_config_is_reported() {
    let sandbox = Sandbox::new();
    let config_path = sandbox.dir.path().join("config.toml");
    std::fs::write(&config_path, "output = \"xml\"\n").unwrap();

    sandbox
        .jobmeta()
        .env("JOBMETA_CONFIG", &config_path)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid output format"));
}
