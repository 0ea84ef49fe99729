//! # Context Setup
//!
//! Clients build a ready-to-use [`TemplinkContext`] with [`initialize`]: the
//! configuration is resolved, turned into a [`RuleSet`], and the snapshot file
//! is loaded into an [`InMemoryStore`].
//!
//! ## Config Resolution
//!
//! `templink.toml` is looked up, lowest priority first, in:
//! 1. the OS config directory (`directories::ProjectDirs`, e.g.
//!    `~/.config/templink/` on Linux),
//! 2. the explicit directory passed by the client, if any.
//!
//! Both files are merged, later entries overriding earlier ones, and
//! `TEMPLINK__*` environment variables override both. An unreadable or
//! invalid config is logged and replaced by the compiled defaults; it never
//! stops an analysis.

use crate::api::TemplinkApi;
use crate::config::TemplinkConfig;
use crate::error::Result;
use crate::rules::RuleSet;
use crate::store::memory::InMemoryStore;
use crate::store::snapshot;
use clapfig::{Clapfig, SearchMode, SearchPath};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "templink.toml";

pub struct TemplinkContext {
    pub api: TemplinkApi<InMemoryStore>,
    pub config: TemplinkConfig,
}

/// Directories searched for `templink.toml`, lowest priority first.
pub fn config_search_dirs(config_dir: Option<&Path>) -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Some(proj_dirs) = ProjectDirs::from("com", "templink", "templink") {
        dirs.push(proj_dirs.config_dir().to_path_buf());
    }
    if let Some(dir) = config_dir {
        dirs.push(dir.to_path_buf());
    }
    dirs
}

pub fn load_config(config_dir: Option<&Path>) -> TemplinkConfig {
    let search_paths = config_search_dirs(config_dir)
        .into_iter()
        .map(SearchPath::Path)
        .collect();

    match Clapfig::builder::<TemplinkConfig>()
        .app_name("templink")
        .file_name(CONFIG_FILE_NAME)
        .search_paths(search_paths)
        .search_mode(SearchMode::Merge)
        .load()
    {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "could not load configuration, using defaults");
            TemplinkConfig::default()
        }
    }
}

/// Loads config and the snapshot at `data_path`.
///
/// A missing or unparsable snapshot is an error: there is nothing to analyze.
pub fn initialize(data_path: &Path, config_dir: Option<&Path>) -> Result<TemplinkContext> {
    let config = load_config(config_dir);
    let rules = RuleSet::from_config(&config);
    let store = snapshot::load(data_path)?;
    tracing::debug!(
        data = %data_path.display(),
        threshold = config.high_severity_threshold,
        "initialized templink context"
    );

    Ok(TemplinkContext {
        api: TemplinkApi::new(store, rules),
        config,
    })
}
