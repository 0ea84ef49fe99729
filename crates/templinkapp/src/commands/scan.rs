//! # System Integrity Scan
//!
//! Sweeps every content record against its *currently saved* templates.
//!
//! For each record:
//! - If its content template no longer resolves, one `orphaned_content` issue
//!   is raised (critical, no placeholder lists) and the record is not
//!   classified further.
//! - Otherwise it is classified with all three buckets. Any non-empty bucket
//!   raises a `placeholder_mismatch` issue: critical when the record cannot
//!   fill its templates (missing or unsupplied URL parameters), a warning
//!   when the only finding is unused data.
//!
//! A dangling URL template reference contributes no URL placeholders and is
//! logged. Malformed stored data never aborts the scan; the record is scanned
//! as if it stored nothing.
//!
//! Issues are listed in record order.

use crate::analysis::{classify_record, Classification, IssueSeverity, OverallStatus};
use crate::error::Result;
use crate::model::{BoundContent, StoredData};
use crate::placeholders::placeholder_set;
use crate::rules::RuleSet;
use crate::store::DataStore;
use serde::Serialize;
use std::collections::BTreeSet;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    PlaceholderMismatch,
    OrphanedContent,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntegrityIssue {
    #[serde(rename = "type")]
    pub kind: IssueKind,
    pub content_id: Uuid,
    pub content_name: String,
    pub template_id: Option<Uuid>,
    pub url_template_id: Option<Uuid>,
    /// Always `None` for orphaned content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mismatch: Option<Classification>,
    pub severity: IssueSeverity,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntegrityStatus {
    pub overall_status: OverallStatus,
    pub total_issues: usize,
    pub critical_issues: usize,
    pub warning_issues: usize,
    pub scanned_records: usize,
    pub issues: Vec<IntegrityIssue>,
}

pub fn run<S: DataStore>(store: &S, rules: &RuleSet) -> Result<IntegrityStatus> {
    let bound = store.all_bound_content()?;
    let scanned_records = bound.len();

    let issues: Vec<IntegrityIssue> = bound
        .iter()
        .filter_map(|content| inspect(content, rules))
        .collect();

    let critical_issues = issues
        .iter()
        .filter(|i| i.severity == IssueSeverity::Critical)
        .count();
    let warning_issues = issues.len() - critical_issues;
    let overall_status = OverallStatus::from_severities(issues.iter().map(|i| i.severity));

    tracing::info!(
        scanned = scanned_records,
        critical = critical_issues,
        warnings = warning_issues,
        status = %overall_status,
        "integrity scan finished"
    );

    Ok(IntegrityStatus {
        overall_status,
        total_issues: issues.len(),
        critical_issues,
        warning_issues,
        scanned_records,
        issues,
    })
}

fn inspect(content: &BoundContent, rules: &RuleSet) -> Option<IntegrityIssue> {
    let record = &content.record;

    let Some(template) = &content.template else {
        return Some(IntegrityIssue {
            kind: IssueKind::OrphanedContent,
            content_id: record.id,
            content_name: record.name.clone(),
            template_id: Some(record.template_id),
            url_template_id: record.url_template_id,
            mismatch: None,
            severity: IssueSeverity::Critical,
        });
    };

    let url_names = match (&content.url_template, record.url_template_id) {
        (Some(url_template), _) => placeholder_set(&url_template.pattern),
        (None, Some(dangling)) => {
            tracing::warn!(
                content = %record.id,
                url_template = %dangling,
                "URL template no longer exists, scanning without URL parameters"
            );
            BTreeSet::new()
        }
        (None, None) => BTreeSet::new(),
    };

    let classification = classify_record(
        &placeholder_set(&template.body),
        &url_names,
        &StoredData::decode_or_empty(record.id, &record.data).keys(),
        rules,
    );
    if classification.is_clean() {
        return None;
    }

    let severity = if classification.fills_templates() {
        IssueSeverity::Warning
    } else {
        IssueSeverity::Critical
    };

    Some(IntegrityIssue {
        kind: IssueKind::PlaceholderMismatch,
        content_id: record.id,
        content_name: record.name.clone(),
        template_id: Some(template.id),
        url_template_id: record.url_template_id,
        mismatch: Some(classification),
        severity,
    })
}
