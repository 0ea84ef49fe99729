//! URL-template change preview.
//!
//! Every record bound to the URL template is affected by an edit to it, so all
//! of them are listed and counted. Parameters added by the edit are never
//! reported: they are assumed to be filled in elsewhere. A record's `unused`
//! list holds the keys that still point at a removed parameter, directly or
//! through an alias, and that nothing else uses any more: a key its content
//! template still renders stays off the list. `missing` is always empty in
//! this mode.
//!
//! Each bound record's content template is fetched once per call. A dangling
//! one contributes no placeholders; the system scan reports it as an orphan.

use super::{content_template_names, AffectedRecord, ImpactReport, NamesCache};
use crate::analysis::consistency::keys_orphaned_by_url_removal;
use crate::analysis::severity;
use crate::error::Result;
use crate::placeholders::{diff, extract_placeholders, placeholder_set};
use crate::rules::RuleSet;
use crate::store::DataStore;
use uuid::Uuid;

pub fn run<S: DataStore>(
    store: &S,
    rules: &RuleSet,
    url_template_id: &Uuid,
    candidate_pattern: &str,
    candidate_name: Option<&str>,
) -> Result<ImpactReport> {
    let url_template = store.get_url_template(url_template_id)?;
    let placeholder_diff = diff(
        &extract_placeholders(&url_template.pattern),
        candidate_pattern,
    );

    let candidate_names = placeholder_set(candidate_pattern);

    let records = store.records_for_url_template(url_template_id)?;
    let mut template_names = NamesCache::default();
    let fetch = |id: &Uuid| content_template_names(store, id);
    let mut affected = Vec::with_capacity(records.len());
    for record in records {
        let record_template_names = template_names.get_or_fetch(record.template_id, fetch)?;
        affected.push(AffectedRecord {
            unused: keys_orphaned_by_url_removal(
                &placeholder_diff.removed,
                record_template_names,
                &candidate_names,
                &record.data_keys,
                rules,
            ),
            missing: Vec::new(),
            id: record.id,
            name: record.name,
            status: record.status,
        });
    }

    let total_affected = affected.len();
    let severity = severity::classify(
        &placeholder_diff,
        total_affected,
        rules.high_severity_threshold(),
    );
    tracing::debug!(
        url_template = %url_template_id,
        removed = placeholder_diff.removed.len(),
        affected = total_affected,
        %severity,
        "previewed URL template change"
    );

    Ok(ImpactReport {
        template_id: *url_template_id,
        template_name: candidate_name
            .map(str::to_string)
            .unwrap_or(url_template.name),
        diff: placeholder_diff,
        affected,
        total_affected,
        severity,
    })
}
