//! CLI integration tests for axiom
//!
//! Runs the `axiom` binary end-to-end using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

const FALLBACK: &str = "Your query could not be processed by the ADLM. Please ask about a known topic like 'Rust' or 'SSI'.";

fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("..")
}

fn sample_knowledge_base() -> PathBuf {
    workspace_root().join("data").join("knowledge_base.json")
}

/// Helper to create a command isolated from the caller's environment
#[allow(deprecated)]
fn axiom_cmd() -> Command {
    let mut cmd = Command::cargo_bin("axiom").unwrap();
    cmd.env_remove("AXIOM_KNOWLEDGE_BASE");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn run_json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "axiom failed: {:?}", output);
    serde_json::from_slice(&output.stdout).unwrap()
}

fn citation_ids(json: &serde_json::Value) -> Vec<String> {
    json["response"]["citations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["source_id"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_what_is_without_grounding() {
    axiom_cmd()
        .args(["--prompt", "what is rust"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "\"text\": \"Rust is a systems programming language.\"",
        ))
        .stdout(predicate::str::contains("\"citations\": []"));
}

#[test]
fn test_result_record_layout() {
    let json = run_json(axiom_cmd().args(["--prompt", "explain ssi"]));

    assert!(json["response"]["text"]
        .as_str()
        .unwrap()
        .starts_with("Ssi is a model for digital identity"));
    assert_eq!(
        json["telemetry"]["model_usage"]["model_name"],
        "Axiom-Dynamic-Logic-Model-v2.1"
    );
    assert!(json["telemetry"]["run_id"].is_string());
    assert_eq!(json["cost_summary"]["unit"], "local_compute");
    assert!(json["cost_summary"]["cpu_time_ms"].as_f64().unwrap() >= 0.0);
    assert!(json["cost_summary"]["peak_memory_mb"].as_f64().unwrap() >= 0.0);
}

#[test]
fn test_grounding_cites_matching_document() {
    let json = run_json(axiom_cmd().args([
        "--prompt",
        "explain rust",
        "--grounding",
        "--knowledge-base",
        sample_knowledge_base().to_str().unwrap(),
    ]));

    let citation = &json["response"]["citations"][0];
    assert_eq!(citation["source_id"], "doc1");
    assert_eq!(citation["document_title"], "Rust Ownership and Memory Safety");
    assert_eq!(citation["match_score"], 1.0);
    assert_eq!(citation_ids(&json), vec!["doc1"]);
}

#[test]
fn test_grounding_excludes_scores_at_threshold() {
    // doc4 matches "model" and "sovereign": 2 of 5 keywords is exactly 0.4.
    let json = run_json(axiom_cmd().args([
        "--prompt",
        "explain ssi",
        "--grounding",
        "--knowledge-base",
        sample_knowledge_base().to_str().unwrap(),
    ]));

    assert_eq!(citation_ids(&json), vec!["doc2"]);
}

#[test]
fn test_grounding_orders_citations_by_id() {
    let json = run_json(axiom_cmd().args([
        "--prompt",
        "compare deterministic execution and axiom model",
        "--grounding",
        "--knowledge-base",
        sample_knowledge_base().to_str().unwrap(),
    ]));

    assert_eq!(citation_ids(&json), vec!["doc3", "doc4"]);
    assert_eq!(json["response"]["citations"][0]["match_score"], 0.5);
    assert_eq!(json["response"]["citations"][1]["match_score"], 0.6);
}

#[test]
fn test_default_knowledge_base_from_workspace_root() {
    let json = run_json(
        axiom_cmd()
            .current_dir(workspace_root())
            .args(["--prompt", "explain rust", "--grounding"]),
    );

    assert_eq!(citation_ids(&json), vec!["doc1"]);
}

#[test]
fn test_verbose_logs_pipeline_to_stderr() {
    axiom_cmd()
        .args(["--prompt", "what is rust", "-v"])
        .assert()
        .success()
        .stderr(predicate::str::contains("recognized query"));
}

#[test]
fn test_quiet_by_default() {
    axiom_cmd()
        .args(["--prompt", "what is rust"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_knowledge_base_ignored_without_grounding() {
    let json = run_json(axiom_cmd().args([
        "--prompt",
        "explain rust",
        "--knowledge-base",
        sample_knowledge_base().to_str().unwrap(),
    ]));

    assert!(citation_ids(&json).is_empty());
}

#[test]
fn test_knowledge_base_from_environment() {
    let json = run_json(
        axiom_cmd()
            .env("AXIOM_KNOWLEDGE_BASE", sample_knowledge_base())
            .args(["--prompt", "explain rust", "--grounding"]),
    );

    assert_eq!(citation_ids(&json), vec!["doc1"]);
}

#[test]
fn test_missing_knowledge_base_degrades_to_no_citations() {
    let temp_dir = TempDir::new().unwrap();

    let json = run_json(
        axiom_cmd()
            .current_dir(&temp_dir)
            .args(["--prompt", "explain rust", "--grounding"]),
    );

    assert!(json["response"]["text"]
        .as_str()
        .unwrap()
        .starts_with("Rust is"));
    assert!(citation_ids(&json).is_empty());
}

#[test]
fn test_malformed_knowledge_base_degrades_to_no_citations() {
    let temp_dir = TempDir::new().unwrap();
    let kb = temp_dir.path().join("knowledge_base.json");
    std::fs::write(&kb, "{ \"not\": \"an array\" }").unwrap();

    let json = run_json(axiom_cmd().args([
        "--prompt",
        "explain rust",
        "--grounding",
        "--knowledge-base",
        kb.to_str().unwrap(),
    ]));

    assert!(citation_ids(&json).is_empty());
}

#[test]
fn test_config_file_sets_model_name() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("axiom.toml");
    std::fs::write(&config, "model_name = \"ADLM-test\"\n").unwrap();

    let json = run_json(axiom_cmd().args([
        "--prompt",
        "what is ssi",
        "--config",
        config.to_str().unwrap(),
    ]));

    assert_eq!(json["telemetry"]["model_usage"]["model_name"], "ADLM-test");
}

#[test]
fn test_unknown_prompt_falls_back() {
    let json = run_json(axiom_cmd().args(["--prompt", "how tall is mount everest"]));
    assert_eq!(json["response"]["text"], FALLBACK);
}

#[test]
fn test_compact_output() {
    axiom_cmd()
        .args(["--prompt", "what is rust", "--compact"])
        .assert()
        .success()
        .stdout(predicate::str::contains("{\"response\":{\"text\":\"Rust is"))
        .stdout(predicate::str::is_match("^[^\n]*\n$").unwrap());
}

#[test]
fn test_missing_prompt_fails() {
    axiom_cmd()
        .arg("--grounding")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--prompt"));
}

#[test]
fn test_missing_config_file_fails() {
    let temp_dir = TempDir::new().unwrap();

    axiom_cmd()
        .args(["--prompt", "what is rust", "--config"])
        .arg(temp_dir.path().join("absent.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load config"));
}
