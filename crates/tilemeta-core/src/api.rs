//! High-level public API for metadata extraction.

use std::path::Path;

use crate::ExtractorConfig;
use crate::Metadata;
use crate::MetadataExtractor;
use crate::Result;

/// Extracts product metadata from the package archive at `archive_path`
/// using the default configuration.
///
/// # Errors
///
/// Returns an error if:
/// - Archive file cannot be opened or is not a zip archive
/// - No `metadata/<file>` entry exists
/// - The metadata document cannot be decoded
/// - The product name or version is missing
///
/// # Examples
///
/// ```no_run
/// use tilemeta_core::extract_metadata;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let metadata = extract_metadata("cf-2.0.1.pivotal")?;
/// println!("{} {}", metadata.name(), metadata.version());
/// # Ok(())
/// # }
/// ```
pub fn extract_metadata<P: AsRef<Path>>(archive_path: P) -> Result<Metadata> {
    MetadataExtractor::new().extract_metadata(archive_path)
}

/// Extracts product metadata with an explicit configuration.
///
/// # Errors
///
/// Same as [`extract_metadata`], plus limit violations from `config`.
pub fn extract_metadata_with_config<P: AsRef<Path>>(
    archive_path: P,
    config: &ExtractorConfig,
) -> Result<Metadata> {
    MetadataExtractor::with_config(config.clone()).extract_metadata(archive_path)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::MetadataError;
    use crate::test_utils::write_test_package;
    use tempfile::TempDir;

    #[test]
    fn test_extract_metadata_from_file() {
        let temp = TempDir::new().unwrap();
        let path = write_test_package(
            temp.path(),
            "product.pivotal",
            &[("metadata/product.yml", "name: product\nproduct_version: 3.1.0")],
        );

        let metadata = extract_metadata(&path).unwrap();
        assert_eq!(metadata.name(), "product");
        assert_eq!(metadata.version(), "3.1.0");
    }

    #[test]
    fn test_extract_metadata_with_config_applies_limits() {
        let temp = TempDir::new().unwrap();
        let path = write_test_package(
            temp.path(),
            "product.pivotal",
            &[("metadata/product.yml", "name: product\nproduct_version: 3.1.0")],
        );
        let config = ExtractorConfig::default().with_max_entry_count(0);

        let result = extract_metadata_with_config(&path, &config);
        assert!(matches!(result, Err(MetadataError::QuotaExceeded { .. })));
    }
}
