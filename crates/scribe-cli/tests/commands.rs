//! End-to-end command runs against the repository suite

use scribe_cli::cli::{ExtractArgs, TckArgs};
use scribe_cli::commands::{self, tck::ALL_GREEN};
use std::fs;
use std::path::{Path, PathBuf};

fn repo_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../..")
}

#[test]
fn test_tck_all_green() {
    let args = TckArgs {
        config: repo_root().join("tck.toml"),
        anchor: None,
    };
    assert_eq!(commands::execute_tck(args).unwrap(), ALL_GREEN);
}

#[test]
fn test_tck_anchor_override() {
    let args = TckArgs {
        config: repo_root().join("tck.toml"),
        anchor: Some("persona_state".to_string()),
    };
    assert!(commands::execute_tck(args).is_ok());

    let args = TckArgs {
        config: repo_root().join("tck.toml"),
        anchor: Some("missing_topics".to_string()),
    };
    let err = commands::execute_tck(args).unwrap_err();
    assert!(err.to_string().contains("anchor input rejected at run 1"));
}

#[test]
fn test_tck_missing_config() {
    let args = TckArgs {
        config: PathBuf::from("/nonexistent/tck.toml"),
        anchor: None,
    };
    assert!(commands::execute_tck(args).is_err());
}

#[test]
fn test_extract_golden_inputs_as_json() {
    let golden = repo_root().join("tck/l1");
    let text = fs::read_to_string(golden.join("persona_state_input.txt")).unwrap();
    let raw = fs::read_to_string(golden.join("persona_state_expected.json")).unwrap();
    let expected: serde_json::Value = serde_json::from_str(&raw).unwrap();

    let args = ExtractArgs {
        format: scribe_cli::CliFormat::Json,
        rules: Some(repo_root().join("tck/l0/rules.json")),
        config: None,
    };
    let out = commands::execute_extract(&args, &text).unwrap();
    let actual: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(actual, expected);
}
