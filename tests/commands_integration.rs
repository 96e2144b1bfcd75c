//! Integration tests for command handlers.
//!
//! Handlers are invoked directly with a Context pointing at a temporary
//! jobs root; results are checked through the JobStore.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use jobmeta::cli::{commands, Context};
use jobmeta::core::config::OutputFormat;
use jobmeta::core::metadata::{JobStore, MetadataCollection, MetadataEntry};
use jobmeta::core::types::JobName;

// =============================================================================
// Test Fixtures
// =============================================================================

struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    fn root(&self) -> PathBuf {
        self.dir.path().join("jobs")
    }

    fn context(&self) -> Context {
        Context {
            root: self.root(),
            output: OutputFormat::Text,
            debug: false,
            quiet: true,
        }
    }

    fn store(&self) -> JobStore {
        JobStore::open(self.root())
    }

    fn metadata(&self, job: &str) -> Option<MetadataCollection> {
        self.store()
            .metadata(&JobName::new(job).unwrap())
            .expect("load metadata")
    }

    fn write_form(&self, contents: &str) -> PathBuf {
        let path = self.dir.path().join("form.json");
        fs::write(&path, contents).unwrap();
        path
    }
}

fn args(pairs: &[&str]) -> Vec<String> {
    pairs.iter().map(|p| p.to_string()).collect()
}

// =============================================================================
// set
// =============================================================================

#[test]
fn set_replaces_metadata() {
    let env = TestEnv::new();
    let ctx = env.context();

    commands::set(&ctx, "nightly", &args(&["env=prod", "owner=teamX"]), false).unwrap();
    commands::set(&ctx, "nightly", &args(&["ticket=CI-1"]), false).unwrap();

    assert_eq!(
        env.metadata("nightly"),
        Some(MetadataCollection::from_pairs([("ticket", "CI-1")]))
    );
}

#[test]
fn set_append_extends_existing() {
    let env = TestEnv::new();
    let ctx = env.context();

    commands::set(&ctx, "nightly", &args(&["env=prod"]), false).unwrap();
    commands::set(&ctx, "nightly", &args(&["env=staging", "note="]), true).unwrap();

    let metadata = env.metadata("nightly").unwrap();
    assert_eq!(
        metadata.to_string(),
        "MetadataCollection{env=prod;env=staging;note=;}"
    );
    assert_eq!(metadata.value_of("env"), Some("prod"));
}

#[test]
fn set_with_no_pairs_stores_empty_collection() {
    let env = TestEnv::new();
    commands::set(&env.context(), "nightly", &[], false).unwrap();
    assert_eq!(env.metadata("nightly"), Some(MetadataCollection::empty()));
}

#[test]
fn set_rejects_invalid_job_name() {
    let env = TestEnv::new();
    let result = commands::set(&env.context(), "../escape", &args(&["a=1"]), false);
    assert!(result.is_err());
}

// =============================================================================
// get / show
// =============================================================================

#[test]
fn get_existing_key() {
    let env = TestEnv::new();
    let ctx = env.context();
    commands::set(&ctx, "nightly", &args(&["env=prod"]), false).unwrap();

    assert!(commands::get(&ctx, "nightly", "env").is_ok());
}

#[test]
fn get_absent_value_succeeds() {
    let env = TestEnv::new();
    let ctx = env.context();
    commands::set(&ctx, "nightly", &args(&["owner"]), false).unwrap();

    assert!(commands::get(&ctx, "nightly", "owner").is_ok());
}

#[test]
fn get_missing_key_fails() {
    let env = TestEnv::new();
    let ctx = env.context();
    commands::set(&ctx, "nightly", &args(&["env=prod"]), false).unwrap();

    let err = commands::get(&ctx, "nightly", "region").unwrap_err();
    assert!(err.to_string().contains("region"));
}

#[test]
fn get_job_without_metadata_fails() {
    let env = TestEnv::new();
    assert!(commands::get(&env.context(), "nightly", "env").is_err());
}

#[test]
fn show_job_without_metadata_fails() {
    let env = TestEnv::new();
    assert!(commands::show(&env.context(), "nightly", false).is_err());
}

#[test]
fn show_all_formats() {
    let env = TestEnv::new();
    let mut ctx = env.context();
    commands::set(&ctx, "nightly", &args(&["env=prod"]), false).unwrap();

    commands::show(&ctx, "nightly", false).unwrap();
    commands::show(&ctx, "nightly", true).unwrap();
    ctx.output = OutputFormat::Json;
    commands::show(&ctx, "nightly", false).unwrap();
}

// =============================================================================
// apply / clear
// =============================================================================

#[test]
fn apply_checked_form() {
    let env = TestEnv::new();
    let form = env.write_form(
        r#"{
            "metadataJobProperty": true,
            "listOfMetaData": [
                { "key": "env", "value": "prod" },
                { "key": "", "value": "" },
                { "key": "owner", "value": null }
            ]
        }"#,
    );

    commands::apply(&env.context(), "nightly", Some(form.as_path())).unwrap();

    assert_eq!(
        env.metadata("nightly").unwrap().entries(),
        &[
            MetadataEntry::with_value("env", "prod"),
            MetadataEntry::with_value("", ""),
            MetadataEntry::absent("owner"),
        ]
    );
}

#[test]
fn apply_unchecked_form_removes_metadata() {
    let env = TestEnv::new();
    let ctx = env.context();
    commands::set(&ctx, "nightly", &args(&["env=prod"]), false).unwrap();

    let form = env.write_form(r#"{ "metadataJobProperty": false }"#);
    commands::apply(&ctx, "nightly", Some(form.as_path())).unwrap();

    assert_eq!(env.metadata("nightly"), None);
}

#[test]
fn apply_invalid_json_fails() {
    let env = TestEnv::new();
    let form = env.write_form("metadataJobProperty=true");
    assert!(commands::apply(&env.context(), "nightly", Some(form.as_path())).is_err());
}

#[test]
fn apply_invalid_row_fails_without_writing() {
    let env = TestEnv::new();
    let form = env.write_form(r#"{ "metadataJobProperty": true, "listOfMetaData": [42] }"#);

    assert!(commands::apply(&env.context(), "nightly", Some(form.as_path())).is_err());
    assert_eq!(env.metadata("nightly"), None);
}

#[test]
fn clear_removes_metadata() {
    let env = TestEnv::new();
    let ctx = env.context();
    commands::set(&ctx, "nightly", &args(&["env=prod"]), false).unwrap();

    commands::clear(&ctx, "nightly").unwrap();
    assert_eq!(env.metadata("nightly"), None);

    // Clearing again is not an error
    commands::clear(&ctx, "nightly").unwrap();
}

#[test]
fn list_with_and_without_jobs() {
    let env = TestEnv::new();
    let ctx = env.context();
    commands::list(&ctx).unwrap();

    commands::set(&ctx, "nightly", &args(&["env=prod"]), false).unwrap();
    commands::list(&ctx).unwrap();
    assert_eq!(
        env.store().list_jobs().unwrap(),
        vec![JobName::new("nightly").unwrap()]
    );
}
