use clap::{Parser, Subcommand};
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(
    name = "templink",
    bin_name = "templink",
    version,
    disable_help_subcommand = true,
    after_help = "Inputs named FILE accept `-` for stdin.\nSet RUST_LOG (e.g. RUST_LOG=templinkapp=debug) for detailed logs."
)]
#[command(
    about = "Placeholder consistency checks for content and URL templates",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Snapshot file with templates, URL templates and records
    #[arg(
        short,
        long,
        global = true,
        value_name = "PATH",
        default_value = "templink.json",
        help_heading = "Options"
    )]
    pub data: PathBuf,

    /// Directory holding templink.toml
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true, help_heading = "Options")]
    pub json: bool,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the placeholders of a template body or URL pattern
    Extract {
        /// Template file, or `-` for stdin
        #[arg(value_name = "FILE")]
        input: String,
    },

    /// Check placeholder names against the naming convention
    Names {
        /// Template file, or `-` for stdin
        #[arg(value_name = "FILE")]
        input: String,
    },

    /// Show sample values for placeholder names
    Sample {
        /// Placeholder names
        #[arg(value_name = "NAME", required_unless_present = "from")]
        names: Vec<String>,

        /// Sample every placeholder of a template file instead
        #[arg(long, value_name = "FILE", conflicts_with = "names")]
        from: Option<String>,
    },

    /// Preview the impact of a content-template edit
    #[command(name = "preview-template")]
    PreviewTemplate {
        /// Content template id
        id: Uuid,

        /// File with the candidate body, or `-` for stdin
        #[arg(value_name = "FILE")]
        input: String,

        /// Candidate template name
        #[arg(long)]
        name: Option<String>,
    },

    /// Preview the impact of a URL-template edit
    #[command(name = "preview-url")]
    PreviewUrl {
        /// URL template id
        id: Uuid,

        /// File with the candidate pattern, or `-` for stdin
        #[arg(value_name = "FILE")]
        input: String,

        /// Candidate template name
        #[arg(long)]
        name: Option<String>,
    },

    /// Check one content record against its saved templates
    Validate {
        /// Content record id
        #[arg(value_name = "CONTENT_ID")]
        content_id: Uuid,
    },

    /// Scan every record for placeholder mismatches and orphans
    Scan,

    /// Show the resolved configuration
    Config,
}
