//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use std::io::{self};
use tilemeta_core::Metadata;

pub struct JsonFormatter;

#[derive(Debug, Serialize)]
struct MetadataOutput<'a> {
    name: &'a str,
    version: &'a str,
    metadata_path: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    raw: Option<&'a str>,
}

impl<'a> MetadataOutput<'a> {
    fn new(metadata: &'a Metadata, include_raw: bool) -> Self {
        Self {
            name: metadata.name(),
            version: metadata.version(),
            metadata_path: metadata.path(),
            raw: include_raw.then(|| metadata.raw()),
        }
    }
}

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_metadata(&self, metadata: &Metadata, include_raw: bool) -> Result<()> {
        let output = JsonOutput::success("inspect", MetadataOutput::new(metadata, include_raw));
        Self::output(&output)
    }

    fn format_error(&self, error: &anyhow::Error) {
        let output = JsonOutput::<()>::error("inspect", format!("{error:#}"));
        let _ = Self::output(&output);
    }
}
