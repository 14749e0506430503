use std::path::Path;

use chrono::{DateTime, NaiveDateTime};

/// Format a log timestamp to human-readable datetime (YYYY-MM-DD HH:MM:SS).
/// Accepts RFC 3339 (with `Z` or an offset) or naive ISO-8601; anything else
/// passes through unchanged.
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%Y-%m-%d %H:%M:%S").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%Y-%m-%d %H:%M:%S").to_string();
    }
    raw.to_string()
}

/// Derive the report title from the log filename: underscores become spaces,
/// words are title-cased.
pub fn report_title(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let pretty = stem
        .split('_')
        .filter(|w| !w.is_empty())
        .map(title_case_word)
        .collect::<Vec<_>>()
        .join(" ");
    format!("Solution Analysis - {pretty}")
}

fn title_case_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Strip the solver's banner prefix from a problem statement and trim it.
pub fn clean_problem_statement(raw: &str) -> String {
    raw.replace("*** Problem Statement ***\n\n", "")
        .trim()
        .to_string()
}
