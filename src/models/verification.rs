use serde::{Deserialize, Serialize};

/// Verdict reached by the verifier for one candidate solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationOutcome {
    Correct,
    Error,
    /// Any outcome string the verifier emits that is neither of the above.
    Other,
}

impl VerificationOutcome {
    /// Normalizes the raw outcome string from a log. Unrecognized values
    /// map to `Other`.
    pub fn from_log(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "correct" => VerificationOutcome::Correct,
            "error" => VerificationOutcome::Error,
            _ => VerificationOutcome::Other,
        }
    }

    /// Text shown on the outcome badge.
    pub fn label(&self) -> &'static str {
        match self {
            VerificationOutcome::Correct => "CORRECT",
            VerificationOutcome::Error => "ERROR",
            VerificationOutcome::Other => "OTHER",
        }
    }

    /// CSS class suffix used to color the outcome badge.
    pub fn css_class(&self) -> &'static str {
        match self {
            VerificationOutcome::Correct => "success",
            VerificationOutcome::Error => "failed",
            VerificationOutcome::Other => "other",
        }
    }
}

/// What the verifier reported about one candidate solution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verification {
    pub outcome: VerificationOutcome,
    /// Verifier's bug report, present when it found a flaw.
    pub bug_report: Option<String>,
    pub details: Option<String>,
}

/// One refinement step inside a run: a candidate solution and its
/// verification verdict.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Iteration {
    /// 1-based position of the iteration within its run.
    pub index: usize,
    pub solution_text: String,
    pub verification: Verification,
    /// Per-iteration verifier tallies, when the solver logged them. These
    /// are display-only; report statistics count outcomes instead.
    pub correct_count: Option<u64>,
    pub error_count: Option<u64>,
}
