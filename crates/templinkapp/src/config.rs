//! # Configuration
//!
//! Templink configuration is a [`confique`] struct, loaded in layers by
//! [`clapfig`] (see [`crate::init`]).
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `TEMPLINK__HIGH_SEVERITY_THRESHOLD`, etc.
//! 2. **Explicit directory**: `templink.toml` in the directory given to the client.
//! 3. **Global Config**: OS-appropriate config directory (via `directories` crate).
//! 4. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `high_severity_threshold` | `5` | Affected-record count above which a change is `high` |
//! | `aliases` | `link = "baseUrl"`, `url = "baseUrl"` | Content-template name → URL-template parameter |
//! | `standard_parameters` | `utm_*`, `baseUrl` | Names never reported as unused |
//!
//! The alias and standard-parameter tables are UTM/English-centric defaults.
//! Organizations with other URL conventions override them here rather than in
//! code; see [`crate::rules`].
//!
//! `high_severity_threshold` is different: the severity rule calls any change
//! touching more than 5 records `high`, and overriding the threshold departs
//! from that rule rather than tuning a convention.

use confique::Config;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_HIGH_SEVERITY_THRESHOLD: usize = 5;

pub fn default_aliases() -> BTreeMap<String, String> {
    [("link", "baseUrl"), ("url", "baseUrl")]
        .into_iter()
        .map(|(from, to)| (from.to_string(), to.to_string()))
        .collect()
}

pub fn default_standard_parameters() -> Vec<String> {
    [
        "utm_source",
        "utm_medium",
        "utm_campaign",
        "utm_term",
        "utm_content",
        "baseUrl",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

/// Configuration for templink, stored in `templink.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct TemplinkConfig {
    /// Changes touching more records than this are rated `high`.
    ///
    /// The standard severity rule fixes this at 5. Any other value is a local
    /// policy change: with a threshold of 10, six affected records no longer
    /// make a change `high`.
    #[config(default = 5)]
    pub high_severity_threshold: usize,

    /// Alias table (content-template name → URL-template parameter).
    /// When absent, defaults to `link → baseUrl` and `url → baseUrl`.
    pub aliases: Option<BTreeMap<String, String>>,

    /// Parameters populated out-of-band and exempt from "unused" reports.
    /// When absent, defaults to the UTM parameters plus `baseUrl`.
    pub standard_parameters: Option<Vec<String>>,
}

impl Default for TemplinkConfig {
    fn default() -> Self {
        Self {
            high_severity_threshold: DEFAULT_HIGH_SEVERITY_THRESHOLD,
            aliases: None,
            standard_parameters: None,
        }
    }
}

impl TemplinkConfig {
    /// Get the alias table, using defaults if not configured.
    pub fn aliases(&self) -> BTreeMap<String, String> {
        self.aliases.clone().unwrap_or_else(default_aliases)
    }

    /// Get the standard parameters, using defaults if not configured.
    pub fn standard_parameters(&self) -> Vec<String> {
        self.standard_parameters
            .clone()
            .unwrap_or_else(default_standard_parameters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TemplinkConfig::default();
        assert_eq!(config.high_severity_threshold, 5);
        let aliases = config.aliases();
        assert_eq!(aliases.get("link").map(String::as_str), Some("baseUrl"));
        assert_eq!(aliases.get("url").map(String::as_str), Some("baseUrl"));
        let standard = config.standard_parameters();
        assert!(standard.contains(&"utm_source".to_string()));
        assert!(standard.contains(&"baseUrl".to_string()));
    }

    #[test]
    fn test_custom_tables_replace_defaults() {
        let config = TemplinkConfig {
            aliases: Some(BTreeMap::from([("cta".to_string(), "target".to_string())])),
            standard_parameters: Some(vec!["ref".to_string()]),
            ..Default::default()
        };
        assert_eq!(config.aliases().len(), 1);
        assert!(config.aliases().get("link").is_none());
        assert_eq!(config.standard_parameters(), vec!["ref"]);
    }

    #[test]
    fn test_parses_from_toml() {
        let text = r#"
            high_severity_threshold = 10
            standard_parameters = ["gclid", "baseUrl"]

            [aliases]
            link = "target"
        "#;
        let config: TemplinkConfig = toml::from_str(text).unwrap();
        assert_eq!(config.high_severity_threshold, 10);
        let aliases = config.aliases();
        assert_eq!(aliases.get("link").map(String::as_str), Some("target"));
        assert_eq!(config.standard_parameters(), vec!["gclid", "baseUrl"]);
    }
}
