use serde::{Deserialize, Serialize};
use super::verification::Iteration;

/// Completion status of a solution attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Success,
    Failed,
}

impl RunStatus {
    /// Normalizes the raw status string from a log. Only "failed" marks a
    /// failure; anything else counts as success, so successful + failed
    /// always equals the run total.
    pub fn from_log(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("failed") {
            RunStatus::Failed
        } else {
            RunStatus::Success
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RunStatus::Success)
    }

    /// Text shown on the status badge.
    pub fn label(&self) -> &'static str {
        match self {
            RunStatus::Success => "SUCCESS",
            RunStatus::Failed => "FAILED",
        }
    }

    /// CSS class suffix used to color the status badge.
    pub fn css_class(&self) -> &'static str {
        match self {
            RunStatus::Success => "success",
            RunStatus::Failed => "failed",
        }
    }
}

/// A single solution attempt with its refinement iterations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Run {
    /// 1-based position of the run in the log.
    pub index: usize,
    pub status: RunStatus,
    /// When the attempt was recorded, if the solver logged it.
    pub timestamp: Option<String>,
    /// Failure reason recorded by the solver, if any.
    pub reason: Option<String>,
    pub iterations: Vec<Iteration>,
}
