//! Inspect command implementation

use crate::cli::InspectArgs;
use crate::error::add_package_context;
use crate::output::OutputFormatter;
use anyhow::Result;
use tilemeta_core::CandidatePolicy;
use tilemeta_core::ExtractorConfig;
use tilemeta_core::MetadataExtractor;

pub fn execute(args: &InspectArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let config = build_config(args);

    let metadata = add_package_context(
        MetadataExtractor::with_config(config).extract_metadata(&args.package),
        &args.package,
    )?;

    formatter.format_metadata(&metadata, args.raw)?;

    Ok(())
}

fn build_config(args: &InspectArgs) -> ExtractorConfig {
    let defaults = ExtractorConfig::default();
    let policy = if args.strict {
        CandidatePolicy::Reject
    } else {
        CandidatePolicy::FirstInDirectory
    };

    ExtractorConfig {
        max_entry_count: args.max_entries.unwrap_or(defaults.max_entry_count),
        max_metadata_size: args.max_metadata_size.unwrap_or(defaults.max_metadata_size),
        max_compression_ratio: args
            .max_compression_ratio
            .unwrap_or(defaults.max_compression_ratio),
        candidate_policy: policy,
        ..defaults
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args() -> InspectArgs {
        InspectArgs {
            package: PathBuf::from("cf.pivotal"),
            strict: false,
            raw: false,
            max_metadata_size: None,
            max_entries: None,
            max_compression_ratio: None,
        }
    }

    #[test]
    fn test_build_config_defaults() {
        let config = build_config(&args());
        let defaults = ExtractorConfig::default();
        assert_eq!(config.max_entry_count, defaults.max_entry_count);
        assert_eq!(config.max_metadata_size, defaults.max_metadata_size);
        assert!((config.max_compression_ratio - defaults.max_compression_ratio).abs() < f64::EPSILON);
        assert_eq!(config.candidate_policy, CandidatePolicy::FirstInDirectory);
    }

    #[test]
    fn test_build_config_overrides() {
        let mut args = args();
        args.strict = true;
        args.max_metadata_size = Some(4096);
        args.max_entries = Some(10);
        args.max_compression_ratio = Some(2500.0);

        let config = build_config(&args);
        assert_eq!(config.max_entry_count, 10);
        assert_eq!(config.max_metadata_size, 4096);
        assert!((config.max_compression_ratio - 2500.0).abs() < f64::EPSILON);
        assert_eq!(config.candidate_policy, CandidatePolicy::Reject);
    }
}
