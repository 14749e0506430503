use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::errors::SolviewError;
use crate::models::{Iteration, Report, Run, RunStatus, Verification, VerificationOutcome};
use crate::utils::formatting::{clean_problem_statement, report_title};

/// Parses a solver log file into a [`Report`].
///
/// A missing file maps to `NotFound`; bytes that are not UTF-8 or text that
/// is not JSON map to `Parse`; a structurally invalid document (non-object
/// root, `runs` that is not an array of objects) maps to `Schema`. Absent
/// fields fall back to type-appropriate defaults, so any document passing
/// those checks loads into a renderable report.
pub fn load_report(path: &Path) -> Result<Report, SolviewError> {
    if !path.exists() {
        return Err(SolviewError::NotFound(path.display().to_string()));
    }

    let bytes = fs::read(path)?;
    let content = String::from_utf8(bytes)
        .map_err(|_| SolviewError::Parse(format!("{} is not valid UTF-8", path.display())))?;
    let root: Value = serde_json::from_str(&content)
        .map_err(|e| SolviewError::Parse(format!("{}: {}", path.display(), e)))?;

    let root = root
        .as_object()
        .ok_or_else(|| SolviewError::Schema("log root is not a JSON object".into()))?;

    // Older logs nest the problem metadata under a "metadata" object.
    let legacy = root.get("metadata").and_then(Value::as_object);

    let problem_statement = clean_problem_statement(
        str_key(root, legacy, "problem_statement", "problem_statement").unwrap_or(""),
    );
    let timestamp = str_key(root, legacy, "timestamp", "timestamp")
        .unwrap_or("")
        .to_string();
    let model = str_key(root, legacy, "model", "model_name")
        .unwrap_or("")
        .to_string();

    let runs = match root.get("runs") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(entries)) => entries
            .iter()
            .enumerate()
            .map(|(i, entry)| parse_run(entry, i + 1))
            .collect::<Result<Vec<_>, _>>()?,
        Some(other) => {
            return Err(SolviewError::Schema(format!(
                "'runs' must be an array, found {}",
                json_type(other)
            )))
        }
    };

    Ok(Report {
        title: report_title(path),
        problem_statement,
        timestamp,
        model,
        runs,
    })
}

fn parse_run(entry: &Value, index: usize) -> Result<Run, SolviewError> {
    let obj = entry
        .as_object()
        .ok_or_else(|| SolviewError::Schema(format!("runs[{}] is not a JSON object", index - 1)))?;

    let status = RunStatus::from_log(obj.get("status").and_then(Value::as_str).unwrap_or(""));

    let iterations = match obj.get("iterations") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(entries)) => entries
            .iter()
            .enumerate()
            .map(|(i, entry)| parse_iteration(entry, index, i + 1))
            .collect::<Result<Vec<_>, _>>()?,
        Some(other) => {
            return Err(SolviewError::Schema(format!(
                "runs[{}].iterations must be an array, found {}",
                index - 1,
                json_type(other)
            )))
        }
    };

    Ok(Run {
        index,
        status,
        timestamp: optional_text(obj, "timestamp"),
        reason: optional_text(obj, "reason"),
        iterations,
    })
}

fn parse_iteration(
    entry: &Value,
    run_index: usize,
    index: usize,
) -> Result<Iteration, SolviewError> {
    let obj = entry.as_object().ok_or_else(|| {
        SolviewError::Schema(format!(
            "runs[{}].iterations[{}] is not a JSON object",
            run_index - 1,
            index - 1
        ))
    })?;

    // Older logs store the refined text under "corrected_solution".
    let solution_text = obj
        .get("solution_text")
        .and_then(Value::as_str)
        .or_else(|| obj.get("corrected_solution").and_then(Value::as_str))
        .unwrap_or("")
        .to_string();

    // Older logs carry the verdict as a flat "verification_result" string
    // instead of "verification.outcome".
    let verification_obj = obj.get("verification").and_then(Value::as_object);
    let outcome_raw = verification_obj
        .and_then(|v| v.get("outcome"))
        .and_then(Value::as_str)
        .or_else(|| obj.get("verification_result").and_then(Value::as_str))
        .unwrap_or("");

    let verification = Verification {
        outcome: VerificationOutcome::from_log(outcome_raw),
        bug_report: verification_obj.and_then(|v| optional_text(v, "bug_report")),
        details: verification_obj.and_then(|v| optional_text(v, "details")),
    };

    Ok(Iteration {
        index,
        solution_text,
        verification,
        correct_count: obj.get("correct_count").and_then(Value::as_u64),
        error_count: obj.get("error_count").and_then(Value::as_u64),
    })
}

fn str_key<'a>(
    root: &'a Map<String, Value>,
    legacy: Option<&'a Map<String, Value>>,
    key: &str,
    legacy_key: &str,
) -> Option<&'a str> {
    root.get(key)
        .and_then(Value::as_str)
        .or_else(|| legacy.and_then(|m| m.get(legacy_key)).and_then(Value::as_str))
}

fn optional_text(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(String::from)
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
