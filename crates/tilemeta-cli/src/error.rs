//! Error conversion utilities for CLI.
//!
//! Converts tilemeta-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use std::path::Path;
use tilemeta_core::MetadataError;

/// Converts `MetadataError` to user-friendly anyhow error with context
pub fn convert_metadata_error(err: MetadataError, package: &Path) -> anyhow::Error {
    match err {
        MetadataError::ArchiveOpen { source, .. } => {
            anyhow!(
                "Cannot open package '{}': {}\n\
                 HINT: Check the path and that the file is a zip-format package.",
                package.display(),
                source
            )
        }
        MetadataError::NoMetadataFile => {
            anyhow!(
                "{err} ('{}')\n\
                 HINT: The metadata document must sit directly in the top-level metadata/ directory.",
                package.display()
            )
        }
        MetadataError::AmbiguousMetadata { ref candidates } => {
            anyhow!(
                "Package '{}' has {} metadata files: {}\n\
                 HINT: Drop --strict to use the first one in the archive directory.",
                package.display(),
                candidates.len(),
                candidates.join(", ")
            )
        }
        MetadataError::QuotaExceeded { resource } => {
            anyhow!(
                "Limit exceeded for '{}': {}\n\
                 HINT: Use --max-metadata-size or --max-entries to raise limits.",
                package.display(),
                resource
            )
        }
        MetadataError::CompressionRatio { ref path, ratio, .. } => {
            anyhow!(
                "Metadata file '{path}' in '{}' is compressed {ratio:.1}:1, above the allowed ratio\n\
                 HINT: Use --max-compression-ratio to inspect highly compressible documents.",
                package.display()
            )
        }
        MetadataError::Decode(_) | MetadataError::MissingField { .. } => {
            anyhow!("{err} ('{}')", package.display())
        }
        _ => anyhow::Error::from(err)
            .context(format!("Error reading package '{}'", package.display())),
    }
}

/// Adds package context to a metadata result
pub fn add_package_context<T>(
    result: Result<T, MetadataError>,
    package: &Path,
) -> anyhow::Result<T> {
    result.map_err(|e| convert_metadata_error(e, package))
}
