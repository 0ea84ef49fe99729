//! Severity ratings for template changes and integrity issues.

use crate::placeholders::PlaceholderDiff;
use serde::Serialize;

/// How disruptive a template edit is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        })
    }
}

/// Rates a change from its placeholder diff and the number of affected records.
///
/// - more than `high_threshold` affected records: `High`, whatever the diff;
/// - otherwise any added or removed placeholder: `Medium`;
/// - otherwise `Low` (no bound records, or a cosmetic-only edit).
pub fn classify(diff: &PlaceholderDiff, affected_count: usize, high_threshold: usize) -> Severity {
    if affected_count > high_threshold {
        Severity::High
    } else if !diff.is_empty() {
        Severity::Medium
    } else {
        Severity::Low
    }
}

/// Severity of a single integrity issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueSeverity {
    Warning,
    Critical,
}

/// Health of the whole system after a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallStatus {
    Healthy,
    Warning,
    Critical,
}

impl OverallStatus {
    /// Worst issue severity wins; no issues means healthy.
    pub fn from_severities(severities: impl IntoIterator<Item = IssueSeverity>) -> Self {
        match severities.into_iter().max() {
            Some(IssueSeverity::Critical) => OverallStatus::Critical,
            Some(IssueSeverity::Warning) => OverallStatus::Warning,
            None => OverallStatus::Healthy,
        }
    }
}

impl std::fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            OverallStatus::Healthy => "healthy",
            OverallStatus::Warning => "warning",
            OverallStatus::Critical => "critical",
        })
    }
}
