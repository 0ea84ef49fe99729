//! Rule tables consulted by the consistency analyzer.
//!
//! Two small tables decide what counts as a mismatch:
//!
//! - **Aliases**: a name used on the content-template side that means the same
//!   field as a differently-named URL-template parameter (`link → baseUrl`).
//!   Lookups work in both directions: [`RuleSet::alias_of`] goes content → URL,
//!   [`RuleSet::aliases_targeting`] goes URL → content.
//! - **Standard parameters**: names populated out-of-band (UTM tags, the base
//!   URL) that are never reported as unused.
//!
//! A [`RuleSet`] also carries the severity threshold. It is an immutable value
//! passed into every analysis, so tests and callers can swap tables without
//! touching the algorithm.

use crate::config::TemplinkConfig;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    aliases: BTreeMap<String, String>,
    reverse_aliases: BTreeMap<String, BTreeSet<String>>,
    standard_parameters: BTreeSet<String>,
    high_severity_threshold: usize,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::from_config(&TemplinkConfig::default())
    }
}

impl RuleSet {
    /// A rule set with no aliases and no standard parameters.
    pub fn empty(high_severity_threshold: usize) -> Self {
        Self {
            aliases: BTreeMap::new(),
            reverse_aliases: BTreeMap::new(),
            standard_parameters: BTreeSet::new(),
            high_severity_threshold,
        }
    }

    pub fn from_config(config: &TemplinkConfig) -> Self {
        let mut rules = Self::empty(config.high_severity_threshold);
        for (from, to) in config.aliases() {
            rules = rules.with_alias(from, to);
        }
        for name in config.standard_parameters() {
            rules = rules.with_standard_parameter(name);
        }
        rules
    }

    pub fn with_alias(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        let (from, to) = (from.into(), to.into());
        if let Some(previous) = self.aliases.insert(from.clone(), to.clone()) {
            if let Some(sources) = self.reverse_aliases.get_mut(&previous) {
                sources.remove(&from);
            }
        }
        self.reverse_aliases.entry(to).or_default().insert(from);
        self
    }

    pub fn with_standard_parameter(mut self, name: impl Into<String>) -> Self {
        self.standard_parameters.insert(name.into());
        self
    }

    /// Overrides the affected-record count above which a change is high
    /// severity. Anything but the default of 5 departs from the standard rule.
    pub fn with_high_severity_threshold(mut self, threshold: usize) -> Self {
        self.high_severity_threshold = threshold;
        self
    }

    /// The URL-template parameter `name` is an alias for, if any.
    pub fn alias_of(&self, name: &str) -> Option<&str> {
        self.aliases.get(name).map(String::as_str)
    }

    /// Content-side names declared as aliases of the URL parameter `target`.
    pub fn aliases_targeting<'a>(&'a self, target: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.reverse_aliases
            .get(target)
            .into_iter()
            .flat_map(|sources| sources.iter().map(String::as_str))
    }

    pub fn is_standard_parameter(&self, name: &str) -> bool {
        self.standard_parameters.contains(name)
    }

    pub fn high_severity_threshold(&self) -> usize {
        self.high_severity_threshold
    }
}
