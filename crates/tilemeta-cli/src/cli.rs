//! CLI argument parsing using clap.

use clap::Parser;
use clap::Subcommand;
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tilemeta")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the product name and version of a package
    Inspect(InspectArgs),
    /// Generate shell completion scripts
    Completion(CompletionArgs),
}

#[derive(clap::Args)]
pub struct InspectArgs {
    /// Path to the package archive
    #[arg(value_name = "PACKAGE")]
    pub package: PathBuf,

    /// Fail if more than one metadata file is present
    #[arg(long)]
    pub strict: bool,

    /// Print the metadata document verbatim
    #[arg(long)]
    pub raw: bool,

    /// Maximum metadata file size in bytes
    #[arg(long, value_parser = parse_byte_size)]
    pub max_metadata_size: Option<u64>,

    /// Maximum number of entries in the package
    #[arg(long)]
    pub max_entries: Option<usize>,

    /// Maximum compression ratio of the metadata file
    #[arg(long, value_parser = parse_ratio)]
    pub max_compression_ratio: Option<f64>,
}

#[derive(clap::Args)]
pub struct CompletionArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Parse a positive compression ratio
fn parse_ratio(s: &str) -> Result<f64, String> {
    let ratio: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("Invalid compression ratio: {s}"))?;
    if ratio.is_finite() && ratio > 0.0 {
        Ok(ratio)
    } else {
        Err(format!("Compression ratio must be a positive number: {s}"))
    }
}

/// Parse byte size with optional suffix (K, M, G)
#[allow(clippy::option_if_let_else)]
fn parse_byte_size(s: &str) -> Result<u64, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty byte size".to_string());
    }

    let (num_str, multiplier) = if let Some(stripped) = s.strip_suffix('G') {
        (stripped, 1024_u64.pow(3))
    } else if let Some(stripped) = s.strip_suffix('M') {
        (stripped, 1024_u64.pow(2))
    } else if let Some(stripped) = s.strip_suffix('K') {
        (stripped, 1024)
    } else {
        (s, 1)
    };

    num_str
        .parse::<u64>()
        .map_err(|_| format!("invalid byte size: {s}"))
        .and_then(|n| {
            n.checked_mul(multiplier)
                .ok_or_else(|| format!("byte size overflow: {s}"))
        })
}
