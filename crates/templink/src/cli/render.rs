//! Text rendering for reports.
//!
//! Every renderer returns a `String` and never prints, so output can be tested
//! without a terminal. Colors come from `console` and switch off by themselves
//! when stdout is not a TTY. JSON output bypasses this module entirely: reports
//! are serialized as-is (see [`to_json`]).

use console::style;
use serde::Serialize;
use std::collections::BTreeMap;
use templinkapp::analysis::{IssueSeverity, OverallStatus, Severity};
use templinkapp::api::{IntegrityStatus, RecordValidation};
use templinkapp::commands::scan::{IntegrityIssue, IssueKind};
use templinkapp::commands::ImpactReport;
use templinkapp::config::TemplinkConfig;
use templinkapp::placeholders::naming::NameCheck;

pub fn to_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

/// Joins rendered lines, each terminated by a newline.
fn text_block(lines: impl IntoIterator<Item = String>) -> String {
    lines.into_iter().map(|line| line + "\n").collect()
}

pub fn render_names_list(names: &[String]) -> String {
    text_block(names.iter().cloned())
}

pub fn render_name_check(check: &NameCheck) -> String {
    if check.is_valid() {
        return format!("{}\n", style("All placeholder names are valid.").green());
    }
    let messages = check.messages.iter().map(|m| style(m).red().to_string());
    text_block(messages)
}

pub fn render_samples(samples: &BTreeMap<String, String>) -> String {
    let width = samples.keys().map(String::len).max().unwrap_or(0);
    samples
        .iter()
        .map(|(name, value)| format!("{:width$}  {}\n", name, value, width = width))
        .collect()
}

fn severity_label(severity: Severity) -> String {
    let label = severity.to_string();
    match severity {
        Severity::High => style(label).red().bold().to_string(),
        Severity::Medium => style(label).yellow().bold().to_string(),
        Severity::Low => style(label).green().to_string(),
    }
}

fn list_or_dash(names: &[String]) -> String {
    if names.is_empty() {
        "-".to_string()
    } else {
        names.join(", ")
    }
}

pub fn render_impact(report: &ImpactReport) -> String {
    let title = style(&report.template_name).bold();
    let id = style(format!("({})", report.template_id)).dim();
    let mut lines = vec![
        format!("{} {}", title, id),
        format!("Severity: {}", severity_label(report.severity)),
    ];

    let diff = &report.diff;
    if diff.is_empty() {
        lines.push("Placeholders: unchanged".to_string());
    } else {
        let added = diff.added.iter().map(|n| style(format!("+{}", n)).green());
        let removed = diff.removed.iter().map(|n| style(format!("-{}", n)).red());
        let parts: Vec<String> = added.chain(removed).map(|part| part.to_string()).collect();
        lines.push(format!("Placeholders: {}", parts.join(" ")));
    }
    if !diff.unchanged.is_empty() {
        lines.push(format!("Unchanged: {}", diff.unchanged.join(", ")));
    }

    lines.push(format!("Affected records: {}", report.total_affected));
    for record in &report.affected {
        let status = style(format!("[{}]", record.status)).dim();
        lines.push(format!(
            "  {} {}  missing: {}  unused: {}",
            record.name,
            status,
            list_or_dash(&record.missing),
            list_or_dash(&record.unused)
        ));
    }
    text_block(lines)
}

pub fn render_validation(result: &RecordValidation) -> String {
    let verdict = if result.is_valid {
        style("valid").green().to_string()
    } else {
        style("invalid").red().bold().to_string()
    };
    text_block([
        format!(
            "Record {} against template '{}': {}",
            result.content_id, result.template_name, verdict
        ),
        format!("  missing: {}", list_or_dash(&result.missing)),
        format!("  unused: {}", list_or_dash(&result.unused)),
        format!(
            "  unsupplied URL parameters: {}",
            list_or_dash(&result.unsupplied_url)
        ),
    ])
}

fn status_label(status: OverallStatus) -> String {
    let label = status.to_string();
    match status {
        OverallStatus::Critical => style(label).red().bold().to_string(),
        OverallStatus::Warning => style(label).yellow().bold().to_string(),
        OverallStatus::Healthy => style(label).green().bold().to_string(),
    }
}

fn issue_line(issue: &IntegrityIssue) -> String {
    let tag = match issue.severity {
        IssueSeverity::Critical => style("[critical]").red().to_string(),
        IssueSeverity::Warning => style("[warning]").yellow().to_string(),
    };
    let detail = match (&issue.kind, &issue.mismatch) {
        (IssueKind::OrphanedContent, _) => match issue.template_id {
            Some(id) => format!("content template {} no longer exists", id),
            None => "content template no longer exists".to_string(),
        },
        (IssueKind::PlaceholderMismatch, Some(mismatch)) => {
            let mut parts = Vec::new();
            if !mismatch.missing.is_empty() {
                parts.push(format!("missing: {}", mismatch.missing.join(", ")));
            }
            if !mismatch.unsupplied_url.is_empty() {
                parts.push(format!(
                    "unsupplied URL: {}",
                    mismatch.unsupplied_url.join(", ")
                ));
            }
            if !mismatch.unused.is_empty() {
                parts.push(format!("unused: {}", mismatch.unused.join(", ")));
            }
            parts.join("  ")
        }
        (IssueKind::PlaceholderMismatch, None) => String::new(),
    };
    format!(
        "  {} {} {}  {}",
        tag,
        issue.content_name,
        style(format!("({})", issue.content_id)).dim(),
        detail
    )
}

pub fn render_scan(status: &IntegrityStatus) -> String {
    let summary = format!(
        "Status: {} ({} issues: {} critical, {} warning; {} records scanned)",
        status_label(status.overall_status),
        status.total_issues,
        status.critical_issues,
        status.warning_issues,
        status.scanned_records
    );
    let issues = status.issues.iter().map(issue_line);
    text_block(std::iter::once(summary).chain(issues))
}

pub fn render_config(config: &TemplinkConfig) -> String {
    let threshold = format!(
        "high_severity_threshold = {}",
        config.high_severity_threshold
    );
    let mut lines = vec![threshold, "[aliases]".to_string()];
    for (from, to) in config.aliases() {
        lines.push(format!("  {} -> {}", from, to));
    }
    let standard = config.standard_parameters().join(", ");
    lines.push(format!("standard_parameters = {}", standard));
    text_block(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use console::strip_ansi_codes;
    use templinkapp::analysis::Classification;
    use templinkapp::commands::AffectedRecord;
    use templinkapp::model::ContentStatus;
    use templinkapp::placeholders::PlaceholderDiff;
    use uuid::Uuid;

    fn plain(s: String) -> String {
        strip_ansi_codes(&s).to_string()
    }

    #[test]
    fn test_render_impact() {
        let report = ImpactReport {
            template_id: Uuid::nil(),
            template_name: "Card".to_string(),
            diff: PlaceholderDiff {
                added: vec!["image".to_string()],
                removed: vec![],
                unchanged: vec!["title".to_string()],
            },
            affected: vec![AffectedRecord {
                id: Uuid::nil(),
                name: "Spring".to_string(),
                status: ContentStatus::Active,
                missing: vec!["image".to_string()],
                unused: vec![],
            }],
            total_affected: 1,
            severity: Severity::Medium,
        };

        let out = plain(render_impact(&report));
        assert!(out.contains("Severity: medium"));
        assert!(out.contains("Placeholders: +image"));
        assert!(out.contains("Unchanged: title"));
        assert!(out.contains("Spring [active]  missing: image  unused: -"));
    }

    #[test]
    fn test_render_scan_orphan_and_mismatch() {
        let status = IntegrityStatus {
            overall_status: OverallStatus::Critical,
            total_issues: 2,
            critical_issues: 1,
            warning_issues: 1,
            scanned_records: 4,
            issues: vec![
                IntegrityIssue {
                    kind: IssueKind::OrphanedContent,
                    content_id: Uuid::nil(),
                    content_name: "Lost".to_string(),
                    template_id: Some(Uuid::nil()),
                    url_template_id: None,
                    mismatch: None,
                    severity: IssueSeverity::Critical,
                },
                IntegrityIssue {
                    kind: IssueKind::PlaceholderMismatch,
                    content_id: Uuid::nil(),
                    content_name: "Extra".to_string(),
                    template_id: Some(Uuid::nil()),
                    url_template_id: None,
                    mismatch: Some(Classification {
                        unused: vec!["legacy".to_string()],
                        ..Classification::default()
                    }),
                    severity: IssueSeverity::Warning,
                },
            ],
        };

        let out = plain(render_scan(&status));
        let summary = "Status: critical (2 issues: 1 critical, 1 warning; 4 records scanned)";
        assert!(out.starts_with(summary));
        assert!(out.contains("[critical] Lost"));
        assert!(out.contains("no longer exists"));
        assert!(out.contains("[warning] Extra"));
        assert!(out.contains("unused: legacy"));
    }

    #[test]
    fn test_render_name_check() {
        let ok = plain(render_name_check(&NameCheck::default()));
        assert!(ok.contains("All placeholder names are valid."));

        let bad = NameCheck {
            invalid: vec!["foo".to_string()],
            messages: vec!["Invalid placeholder name 'foo'".to_string()],
        };
        assert_eq!(
            plain(render_name_check(&bad)),
            "Invalid placeholder name 'foo'\n"
        );
    }

    #[test]
    fn test_render_samples_aligns_names() {
        let samples: BTreeMap<String, String> = [
            ("price", "$49.99"),
            ("title", "Senior Product Designer"),
            ("hero_image", "https://placehold.co/600x400"),
        ]
        .into_iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();

        let out = render_samples(&samples);
        assert!(out.contains("price       $49.99\n"));
        assert!(out.contains("hero_image  https://placehold.co/600x400\n"));
    }

    #[test]
    fn test_render_validation_lines() {
        let result = RecordValidation {
            content_id: Uuid::nil(),
            template_name: "Card".to_string(),
            is_valid: false,
            missing: vec!["image".to_string()],
            unused: vec![],
            unsupplied_url: vec!["ref".to_string()],
        };

        let out = plain(render_validation(&result));
        assert_eq!(out.lines().count(), 4);
        assert!(out.contains("template 'Card': invalid"));
        assert!(out.contains("  missing: image\n"));
        assert!(out.contains("  unused: -\n"));
        assert!(out.contains("  unsupplied URL parameters: ref\n"));
    }

    #[test]
    fn test_render_names_list() {
        let names = vec!["image".to_string(), "title".to_string()];
        assert_eq!(render_names_list(&names), "image\ntitle\n");
        assert_eq!(render_names_list(&[]), "");
    }

    #[test]
    fn test_render_config_defaults() {
        let out = render_config(&TemplinkConfig::default());
        assert!(out.contains("high_severity_threshold = 5"));
        assert!(out.contains("link -> baseUrl"));
        assert!(out.contains("utm_source"));
    }
}
