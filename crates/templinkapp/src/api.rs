//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the
//! placeholder primitives. It is the single entry point for every templink
//! operation, whichever client drives it.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the matching command function
//! - **Owns the rule tables** ([`RuleSet`]) so callers never thread them through
//! - **Returns structured types**, never strings
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O operations**: No stdout, stderr, or formatting
//! - **Caching**: A scan result is recomputed on every call; callers that want a
//!   time-boxed cache keep it themselves
//!
//! ## Generic Over DataStore
//!
//! `TemplinkApi<S: DataStore>` works against any storage backend:
//! - CLI: `TemplinkApi<InMemoryStore>` loaded from a snapshot file
//! - Testing: `TemplinkApi<InMemoryStore>` built by `StoreFixture`
//!
//! API tests verify dispatch and argument passing only. Command logic is
//! tested in the command modules.

use crate::commands::{self, ImpactReport};
use crate::error::Result;
use crate::placeholders::{self, naming::NameCheck};
use crate::rules::RuleSet;
use crate::store::DataStore;
use std::collections::BTreeMap;
use uuid::Uuid;

pub use crate::commands::scan::IntegrityStatus;
pub use crate::commands::validate::RecordValidation;

/// The main API facade for templink operations.
pub struct TemplinkApi<S: DataStore> {
    store: S,
    rules: RuleSet,
}

impl<S: DataStore> TemplinkApi<S> {
    pub fn new(store: S, rules: RuleSet) -> Self {
        Self { store, rules }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn extract_placeholders(&self, text: &str) -> Vec<String> {
        placeholders::extract_placeholders(text)
    }

    pub fn is_valid_placeholder_name(&self, name: &str) -> bool {
        placeholders::is_valid_placeholder_name(name)
    }

    pub fn sample_value(&self, name: &str) -> String {
        placeholders::sample_value(name)
    }

    pub fn check_placeholder_names(&self, text: &str) -> NameCheck {
        placeholders::naming::check_names(text)
    }

    pub fn sample_data(&self, text: &str) -> BTreeMap<String, String> {
        placeholders::sample::sample_data(text)
    }

    pub fn preview_template_change(
        &self,
        template_id: &Uuid,
        candidate_body: &str,
        candidate_name: Option<&str>,
    ) -> Result<ImpactReport> {
        commands::preview_template::run(
            &self.store,
            &self.rules,
            template_id,
            candidate_body,
            candidate_name,
        )
    }

    pub fn preview_url_template_change(
        &self,
        url_template_id: &Uuid,
        candidate_pattern: &str,
        candidate_name: Option<&str>,
    ) -> Result<ImpactReport> {
        commands::preview_url::run(
            &self.store,
            &self.rules,
            url_template_id,
            candidate_pattern,
            candidate_name,
        )
    }

    pub fn validate_record_integrity(&self, content_id: &Uuid) -> Result<RecordValidation> {
        commands::validate::run(&self.store, &self.rules, content_id)
    }

    pub fn run_system_integrity_scan(&self) -> Result<IntegrityStatus> {
        commands::scan::run(&self.store, &self.rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{OverallStatus, Severity};
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use serde_json::json;

    fn api_with(fx: StoreFixture) -> TemplinkApi<InMemoryStore> {
        TemplinkApi::new(fx.store, RuleSet::default())
    }

    #[test]
    fn test_text_helpers_dispatch() {
        let api = api_with(StoreFixture::new());
        assert_eq!(
            api.extract_placeholders("{{ title }} {{image}}"),
            vec!["image", "title"]
        );
        assert!(api.is_valid_placeholder_name("hero_image"));
        assert!(!api.is_valid_placeholder_name("foo"));
        assert_eq!(api.sample_value("price"), "$49.99");
        assert!(!api.check_placeholder_names("{{foo}}").is_valid());
        assert_eq!(api.sample_data("{{title}}").len(), 1);
    }

    #[test]
    fn test_previews_dispatch() {
        let mut fx = StoreFixture::new();
        let t = fx.template("Card", "{{title}}");
        let u = fx.url_template("Landing", "{{baseUrl}}");
        fx.record("One", t, Some(u), json!({"title": "a", "link": "x"}));
        let api = api_with(fx);

        let content = api
            .preview_template_change(&t, "{{title}}{{image}}", None)
            .unwrap();
        assert_eq!(content.severity, Severity::Medium);
        assert_eq!(content.affected[0].missing, vec!["image"]);

        let url = api
            .preview_url_template_change(&u, "https://fixed.test", Some("Fixed"))
            .unwrap();
        assert_eq!(url.template_name, "Fixed");
        assert_eq!(url.affected[0].unused, vec!["link"]);
    }

    #[test]
    fn test_rules_are_applied() {
        let mut fx = StoreFixture::new();
        let t = fx.template("Card", "{{title}}");
        fx.records("Card", 2, t, None, json!({"title": "a"}));
        let api = TemplinkApi::new(fx.store, RuleSet::default().with_high_severity_threshold(1));

        let report = api
            .preview_template_change(&t, "{{title}}{{image}}", None)
            .unwrap();
        assert_eq!(report.severity, Severity::High);
    }

    #[test]
    fn test_validate_and_scan_dispatch() {
        let mut fx = StoreFixture::new();
        let t = fx.template("Card", "{{title}}");
        let id = fx.record("One", t, None, json!({"title": "a"}));
        let api = api_with(fx);

        assert!(api.validate_record_integrity(&id).unwrap().is_valid);
        assert_eq!(
            api.run_system_integrity_scan().unwrap().overall_status,
            OverallStatus::Healthy
        );
    }

    #[test]
    fn test_not_found_propagates() {
        let api = api_with(StoreFixture::new());
        let id = Uuid::new_v4();
        let content = api.preview_template_change(&id, "", None).unwrap_err();
        let url = api.preview_url_template_change(&id, "", None).unwrap_err();
        let record = api.validate_record_integrity(&id).unwrap_err();
        assert!(content.is_not_found());
        assert!(url.is_not_found());
        assert!(record.is_not_found());
    }
}
