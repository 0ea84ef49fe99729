//! # CLI Layer
//!
//! This module is **one possible UI client** for templink, not the
//! application itself. It is the only place that:
//! - Reads template text from files or stdin
//! - Writes to stdout
//! - Decides exit codes
//!
//! Text-only commands (`extract`, `names`, `sample`) never touch the snapshot.
//! Everything else loads it through [`initialize`] and goes through the
//! [`TemplinkApi`](templinkapp::api::TemplinkApi) facade.

use super::render;
use super::setup::{Cli, Commands};
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::json;
use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use templinkapp::analysis::OverallStatus;
use templinkapp::init::{initialize, load_config, TemplinkContext};
use templinkapp::placeholders::{self, naming, sample};

pub const EXIT_OK: i32 = 0;
pub const EXIT_INVALID_NAMES: i32 = 1;
pub const EXIT_CRITICAL: i32 = 2;

struct Output {
    json: bool,
}

impl Output {
    fn emit<T: Serialize>(&self, value: &T, text: impl FnOnce(&T) -> String) -> Result<()> {
        if self.json {
            println!("{}", render::to_json(value)?);
        } else {
            print!("{}", text(value));
        }
        Ok(())
    }
}

/// Reads `input` as a file path, or stdin when it is `-`.
pub fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("could not read stdin")?;
        Ok(text)
    } else {
        fs::read_to_string(input).with_context(|| format!("could not read {}", input))
    }
}

/// Editors end files with a newline the stored template does not have.
fn without_final_newline(text: &str) -> &str {
    let text = text.strip_suffix('\n').unwrap_or(text);
    text.strip_suffix('\r').unwrap_or(text)
}

fn context(cli: &Cli) -> Result<TemplinkContext> {
    initialize(&cli.data, cli.config.as_deref())
        .with_context(|| format!("could not load snapshot {}", cli.data.display()))
}

pub fn dispatch(cli: &Cli) -> Result<i32> {
    let out = Output { json: cli.json };
    tracing::debug!(command = ?cli.command, json = cli.json, "dispatching");

    match &cli.command {
        Commands::Extract { input } => {
            let names = placeholders::extract_placeholders(&read_input(input)?);
            out.emit(&names, |n| render::render_names_list(n))?;
            Ok(EXIT_OK)
        }
        Commands::Names { input } => {
            let check = naming::check_names(&read_input(input)?);
            out.emit(&check, render::render_name_check)?;
            Ok(if check.is_valid() {
                EXIT_OK
            } else {
                EXIT_INVALID_NAMES
            })
        }
        Commands::Sample { names, from } => {
            let samples: BTreeMap<String, String> = match from {
                Some(path) => sample::sample_data(&read_input(path)?),
                None => names
                    .iter()
                    .map(|name| (name.clone(), placeholders::sample_value(name)))
                    .collect(),
            };
            out.emit(&samples, render::render_samples)?;
            Ok(EXIT_OK)
        }
        Commands::PreviewTemplate { id, input, name } => {
            let text = read_input(input)?;
            let body = without_final_newline(&text);
            let name = name.as_deref();
            let ctx = context(cli)?;
            let report = ctx.api.preview_template_change(id, body, name)?;
            out.emit(&report, render::render_impact)?;
            Ok(EXIT_OK)
        }
        Commands::PreviewUrl { id, input, name } => {
            let text = read_input(input)?;
            let pattern = without_final_newline(&text);
            let name = name.as_deref();
            let ctx = context(cli)?;
            let report = ctx.api.preview_url_template_change(id, pattern, name)?;
            out.emit(&report, render::render_impact)?;
            Ok(EXIT_OK)
        }
        Commands::Validate { content_id } => {
            let result = context(cli)?.api.validate_record_integrity(content_id)?;
            out.emit(&result, render::render_validation)?;
            Ok(EXIT_OK)
        }
        Commands::Scan => {
            let status = context(cli)?.api.run_system_integrity_scan()?;
            out.emit(&status, render::render_scan)?;
            Ok(match status.overall_status {
                OverallStatus::Critical => EXIT_CRITICAL,
                _ => EXIT_OK,
            })
        }
        Commands::Config => {
            let config = load_config(cli.config.as_deref());
            if cli.json {
                let resolved = json!({
                    "high_severity_threshold": config.high_severity_threshold,
                    "aliases": config.aliases(),
                    "standard_parameters": config.standard_parameters(),
                });
                println!("{}", render::to_json(&resolved)?);
            } else {
                print!("{}", render::render_config(&config));
            }
            Ok(EXIT_OK)
        }
    }
}
