use serde::{Deserialize, Serialize};
use super::run::Run;
use super::verification::VerificationOutcome;

/// A fully parsed solver log: problem metadata plus the ordered solution
/// attempts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Display title derived from the log filename.
    pub title: String,
    pub problem_statement: String,
    pub timestamp: String,
    pub model: String,
    pub runs: Vec<Run>,
}

/// Aggregate counters shown in the statistics summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportStats {
    pub total_runs: usize,
    pub successful_runs: usize,
    pub failed_runs: usize,
    pub total_iterations: usize,
    pub total_correct: usize,
    pub total_errors: usize,
}

impl Report {
    /// Computes the statistics summary with a fresh pass over the runs.
    /// Never cached: the displayed numbers must always match the tree.
    pub fn stats(&self) -> ReportStats {
        let total_runs = self.runs.len();
        let successful_runs = self.runs.iter().filter(|r| r.status.is_success()).count();
        let total_iterations = self.runs.iter().map(|r| r.iterations.len()).sum();
        let total_correct = self
            .runs
            .iter()
            .flat_map(|r| &r.iterations)
            .filter(|i| i.verification.outcome == VerificationOutcome::Correct)
            .count();
        let total_errors = self
            .runs
            .iter()
            .flat_map(|r| &r.iterations)
            .filter(|i| i.verification.outcome == VerificationOutcome::Error)
            .count();

        ReportStats {
            total_runs,
            successful_runs,
            failed_runs: total_runs - successful_runs,
            total_iterations,
            total_correct,
            total_errors,
        }
    }
}
