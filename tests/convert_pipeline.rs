use std::fs;
use std::path::PathBuf;

use solview::errors::SolviewError;
use solview::loader::load_report;
use solview::models::{RunStatus, VerificationOutcome};
use solview::reporting::{convert_file, render_report};
use tempfile::TempDir;

// The smallest log exercising every entity: one run, one iteration, one
// verification verdict.
const MINIMAL_LOG: &str = r#"{"problem_statement":"P","timestamp":"T","model":"M","runs":[{"status":"success","iterations":[{"solution_text":"S&T","verification":{"outcome":"correct"}}]}]}"#;

fn write_log(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn make_test_log() -> String {
    serde_json::json!({
        "problem_statement": "*** Problem Statement ***\n\nProve that x > 0 for all x.",
        "timestamp": "2025-07-16T09:30:05Z",
        "model": "prover-large",
        "runs": [
            {
                "status": "success",
                "timestamp": "2025-07-16T09:31:00Z",
                "iterations": [
                    {
                        "solution_text": "Assume x > 0. Done.",
                        "verification": {"outcome": "error", "bug_report": "Circular reasoning.\nStep 1 assumes the goal."}
                    },
                    {
                        "solution_text": "By positivity of squares, x^2 >= 0.",
                        "verification": {"outcome": "correct", "details": "All steps check out."}
                    }
                ]
            },
            {
                "status": "failed",
                "reason": "max iterations reached",
                "iterations": [
                    {
                        "solution_text": "Trivial.",
                        "verification": {"outcome": "inconclusive"}
                    }
                ]
            }
        ]
    })
    .to_string()
}

fn extract_stat(html: &str, label: &str) -> usize {
    let label_tag = format!("<div class=\"stat-label\">{label}</div>");
    let at = html
        .find(&label_tag)
        .unwrap_or_else(|| panic!("stat label {label} not found in HTML"));
    let rest = &html[at + label_tag.len()..];
    let start = rest.find("stat-value\">").unwrap() + "stat-value\">".len();
    let rest = &rest[start..];
    let end = rest.find('<').unwrap();
    rest[..end].trim().parse().unwrap()
}

#[test]
fn test_load_minimal_log() {
    let dir = TempDir::new().unwrap();
    let path = write_log(&dir, "minimal.json", MINIMAL_LOG);

    let report = load_report(&path).unwrap();
    assert_eq!(report.problem_statement, "P");
    assert_eq!(report.timestamp, "T");
    assert_eq!(report.model, "M");
    assert_eq!(report.runs.len(), 1);
    assert_eq!(report.runs[0].index, 1);
    assert_eq!(report.runs[0].status, RunStatus::Success);
    assert_eq!(report.runs[0].iterations.len(), 1);
    assert_eq!(report.runs[0].iterations[0].solution_text, "S&T");
    assert_eq!(
        report.runs[0].iterations[0].verification.outcome,
        VerificationOutcome::Correct
    );
}

#[test]
fn test_minimal_log_stats_and_escaping() {
    let dir = TempDir::new().unwrap();
    let path = write_log(&dir, "minimal.json", MINIMAL_LOG);

    let report = load_report(&path).unwrap();
    let stats = report.stats();
    assert_eq!(stats.total_runs, 1);
    assert_eq!(stats.successful_runs, 1);
    assert_eq!(stats.failed_runs, 0);
    assert_eq!(stats.total_iterations, 1);
    assert_eq!(stats.total_correct, 1);
    assert_eq!(stats.total_errors, 0);

    let html = render_report(&report);
    assert!(html.contains("S&amp;T"));
    assert!(!html.contains("S&T"));
}

#[test]
fn test_rendered_stats_match_fresh_aggregation() {
    let dir = TempDir::new().unwrap();
    let path = write_log(&dir, "full.json", &make_test_log());

    let report = load_report(&path).unwrap();
    let html = render_report(&report);
    let stats = report.stats();

    assert_eq!(extract_stat(&html, "Total Runs"), stats.total_runs);
    assert_eq!(extract_stat(&html, "Successful Runs"), stats.successful_runs);
    assert_eq!(extract_stat(&html, "Failed Runs"), stats.failed_runs);
    assert_eq!(extract_stat(&html, "Total Iterations"), stats.total_iterations);
    assert_eq!(extract_stat(&html, "Total Correct"), stats.total_correct);
    assert_eq!(extract_stat(&html, "Total Errors"), stats.total_errors);

    // Spot-check the aggregation itself against the fixture.
    assert_eq!(stats.total_runs, 2);
    assert_eq!(stats.successful_runs, 1);
    assert_eq!(stats.failed_runs, 1);
    assert_eq!(stats.total_iterations, 3);
    assert_eq!(stats.total_correct, 1);
    assert_eq!(stats.total_errors, 1);
}

#[test]
fn test_render_preserves_input_order() {
    let dir = TempDir::new().unwrap();
    let log = serde_json::json!({
        "runs": [
            {"status": "failed", "iterations": []},
            {"status": "success", "iterations": []},
            {"status": "failed", "iterations": []}
        ]
    })
    .to_string();
    let path = write_log(&dir, "ordered.json", &log);

    let report = load_report(&path).unwrap();
    assert_eq!(
        report.runs.iter().map(|r| r.index).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );

    let html = render_report(&report);
    let first = html.find("Run 1").unwrap();
    let second = html.find("Run 2").unwrap();
    let third = html.find("Run 3").unwrap();
    assert!(first < second && second < third);
}

#[test]
fn test_render_is_deterministic_across_loads() {
    let dir = TempDir::new().unwrap();
    let path = write_log(&dir, "full.json", &make_test_log());

    let first = render_report(&load_report(&path).unwrap());
    let second = render_report(&load_report(&path).unwrap());
    assert_eq!(first, second);
}

#[test]
fn test_render_escapes_markup_in_fields() {
    let dir = TempDir::new().unwrap();
    let log = serde_json::json!({
        "problem_statement": "Show <b>bold</b> claims & \"quotes\"",
        "model": "<script>alert('x')</script>",
        "runs": [{
            "status": "success",
            "iterations": [{
                "solution_text": "<script>alert('solution')</script>",
                "verification": {"outcome": "correct", "bug_report": "found <tag> & issue"}
            }]
        }]
    })
    .to_string();
    let path = write_log(&dir, "hostile.json", &log);

    let html = render_report(&load_report(&path).unwrap());
    assert!(!html.contains("<script>alert"));
    assert!(html.contains("&lt;script&gt;alert(&#39;solution&#39;)&lt;/script&gt;"));
    assert!(html.contains("Show &lt;b&gt;bold&lt;/b&gt; claims &amp; &quot;quotes&quot;"));
    assert!(html.contains("found &lt;tag&gt; &amp; issue"));
}

#[test]
fn test_missing_fields_degrade_to_placeholders() {
    let dir = TempDir::new().unwrap();
    let log = serde_json::json!({
        "model": "",
        "runs": [{
            "status": "success",
            "iterations": [{
                "solution_text": "x = 1",
                "verification": {"outcome": "correct"}
            }]
        }]
    })
    .to_string();
    let path = write_log(&dir, "sparse.json", &log);

    let html = render_report(&load_report(&path).unwrap());
    assert!(html.contains("No problem statement provided"));
    assert!(html.contains("<strong>Bug Report:</strong> N/A"));
    assert!(html.contains("<strong>Details:</strong> N/A"));
    // model and timestamp fall back too
    assert!(html.contains("N/A"));
}

#[test]
fn test_legacy_log_shape_loads() {
    let dir = TempDir::new().unwrap();
    let log = serde_json::json!({
        "metadata": {
            "problem_statement": "*** Problem Statement ***\n\nProve it.",
            "timestamp": "2025-07-16T09:30:05Z",
            "model_name": "prover-legacy"
        },
        "runs": [{
            "status": "failed",
            "reason": "max iterations",
            "iterations": [{
                "corrected_solution": "x = 1",
                "verification_result": "error",
                "correct_count": 2,
                "error_count": 3,
                "verification": {"bug_report": "step 2 invalid"}
            }]
        }]
    })
    .to_string();
    let path = write_log(&dir, "legacy_run.json", &log);

    let report = load_report(&path).unwrap();
    assert_eq!(report.problem_statement, "Prove it.");
    assert_eq!(report.model, "prover-legacy");
    assert_eq!(report.runs[0].status, RunStatus::Failed);
    assert_eq!(report.runs[0].reason.as_deref(), Some("max iterations"));

    let iteration = &report.runs[0].iterations[0];
    assert_eq!(iteration.solution_text, "x = 1");
    assert_eq!(iteration.verification.outcome, VerificationOutcome::Error);
    assert_eq!(iteration.verification.bug_report.as_deref(), Some("step 2 invalid"));
    assert_eq!(iteration.correct_count, Some(2));
    assert_eq!(iteration.error_count, Some(3));

    let html = render_report(&report);
    assert!(html.contains("Correct: 2, Errors: 3"));
    assert!(html.contains("2025-07-16 09:30:05"));
}

#[test]
fn test_runs_not_a_list_is_schema_error() {
    let dir = TempDir::new().unwrap();
    let path = write_log(&dir, "bad.json", r#"{"runs": "not-a-list"}"#);

    let err = load_report(&path).unwrap_err();
    assert!(matches!(err, SolviewError::Schema(_)), "got {err:?}");
}

#[test]
fn test_non_object_root_is_schema_error() {
    let dir = TempDir::new().unwrap();
    let path = write_log(&dir, "array.json", "[1, 2, 3]");

    let err = load_report(&path).unwrap_err();
    assert!(matches!(err, SolviewError::Schema(_)));
}

#[test]
fn test_invalid_json_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_log(&dir, "broken.json", "{not json at all");

    let err = load_report(&path).unwrap_err();
    assert!(matches!(err, SolviewError::Parse(_)));
}

#[test]
fn test_missing_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    let err = load_report(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, SolviewError::NotFound(_)));
}

#[test]
fn test_title_derived_from_filename() {
    let dir = TempDir::new().unwrap();
    let path = write_log(&dir, "solution_run_07.json", MINIMAL_LOG);

    let report = load_report(&path).unwrap();
    assert_eq!(report.title, "Solution Analysis - Solution Run 07");
}

#[test]
fn test_convert_file_writes_next_to_input() {
    let dir = TempDir::new().unwrap();
    let path = write_log(&dir, "solution_01.json", &make_test_log());

    let output = convert_file(&path, None).unwrap();
    assert_eq!(output, dir.path().join("solution_01_converted.html"));

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Solution Analysis - Solution 01"));
}

#[test]
fn test_convert_file_honors_output_dir() {
    let dir = TempDir::new().unwrap();
    let path = write_log(&dir, "solution_02.json", MINIMAL_LOG);
    let out_dir = dir.path().join("reports").join("html");

    let output = convert_file(&path, Some(&out_dir)).unwrap();
    assert_eq!(output, out_dir.join("solution_02_converted.html"));
    assert!(output.exists());
}

#[test]
fn test_convert_file_propagates_loader_errors() {
    let dir = TempDir::new().unwrap();
    let path = write_log(&dir, "bad.json", "{");

    let err = convert_file(&path, None).unwrap_err();
    assert!(matches!(err, SolviewError::Parse(_)));
    assert!(!dir.path().join("bad_converted.html").exists());
}
