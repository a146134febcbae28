//! Metadata extraction from package archives.

use std::io::Read;
use std::io::Seek;
use std::path::Path;

use tracing::debug;

use crate::ExtractorConfig;
use crate::Metadata;
use crate::MetadataError;
use crate::Result;
use crate::archive::PackageArchive;
use crate::decode::DecodeError;
use crate::decode::DocumentDecoder;
use crate::decode::Fields;
use crate::decode::YamlDecoder;
use crate::limits::validate_compression_ratio;
use crate::limits::validate_declared_size;
use crate::selection::select_candidate;

/// Field holding the product name.
pub const NAME_FIELD: &str = "name";

/// Field holding the product version.
pub const VERSION_FIELD: &str = "product_version";

/// Extracts product metadata from package archives.
///
/// The extractor holds no per-archive state; one instance can serve any
/// number of calls.
///
/// # Examples
///
/// ```no_run
/// use tilemeta_core::MetadataExtractor;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let extractor = MetadataExtractor::new();
/// let metadata = extractor.extract_metadata("cf-2.0.1.pivotal")?;
/// println!("{} {}", metadata.name(), metadata.version());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct MetadataExtractor<D = YamlDecoder> {
    config: ExtractorConfig,
    decoder: D,
}

impl MetadataExtractor {
    /// Creates an extractor with the default configuration and YAML decoder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an extractor with the given configuration.
    #[must_use]
    pub fn with_config(config: ExtractorConfig) -> Self {
        Self {
            config,
            decoder: YamlDecoder,
        }
    }
}

impl<D: DocumentDecoder> MetadataExtractor<D> {
    /// Replaces the document decoder.
    #[must_use]
    pub fn with_decoder<E: DocumentDecoder>(self, decoder: E) -> MetadataExtractor<E> {
        MetadataExtractor {
            config: self.config,
            decoder,
        }
    }

    /// Returns the extraction configuration.
    #[must_use]
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extracts metadata from the package archive at `archive_path`.
    ///
    /// # Errors
    ///
    /// - [`MetadataError::ArchiveOpen`] if the file is missing or not a zip
    /// - [`MetadataError::NoMetadataFile`] if no `metadata/<file>` entry exists
    /// - [`MetadataError::Decode`] if the document cannot be decoded
    /// - [`MetadataError::MissingField`] if the name or version is absent
    /// - limit and read errors as described on [`MetadataError`]
    pub fn extract_metadata<P: AsRef<Path>>(&self, archive_path: P) -> Result<Metadata> {
        let archive_path = archive_path.as_ref();
        debug!(archive = %archive_path.display(), "extracting product metadata");

        let mut archive = PackageArchive::open(archive_path)?;
        self.extract_from_archive(&mut archive)
    }

    /// Extracts metadata from a package held in any seekable reader.
    ///
    /// # Errors
    ///
    /// Same as [`extract_metadata`](Self::extract_metadata).
    pub fn extract_from_reader<R: Read + Seek>(&self, reader: R) -> Result<Metadata> {
        let mut archive = PackageArchive::from_reader(reader, "<reader>")?;
        self.extract_from_archive(&mut archive)
    }

    fn extract_from_archive<R: Read + Seek>(
        &self,
        archive: &mut PackageArchive<R>,
    ) -> Result<Metadata> {
        let entries = archive.entries(self.config.max_entry_count)?;
        let entry = select_candidate(&entries, self.config.candidate_policy)?;
        debug!(entry = %entry.path, size = entry.size, "selected metadata file");

        validate_declared_size(entry, &self.config)?;
        validate_compression_ratio(entry, &self.config)?;

        let bytes = archive.read_entry(entry, self.config.max_metadata_size)?;
        let raw = String::from_utf8(bytes)
            .map_err(|e| MetadataError::Decode(DecodeError::InvalidUtf8(e.utf8_error())))?;

        let fields = self.decoder.decode(&raw).map_err(MetadataError::Decode)?;
        let (name, version) = product_details(fields)?;

        debug!(name = %name, version = %version, "extracted product metadata");
        Ok(Metadata::new(name, version, raw, entry.path.clone()))
    }
}

/// Pulls the required, non-empty name and version out of decoded fields.
fn product_details(mut fields: Fields) -> Result<(String, String)> {
    let mut take = |key: &'static str| fields.remove(key).filter(|value| !value.is_empty());

    match (take(NAME_FIELD), take(VERSION_FIELD)) {
        (Some(name), Some(version)) => Ok((name, version)),
        (name, version) => {
            let missing = [(NAME_FIELD, name.is_none()), (VERSION_FIELD, version.is_none())]
                .into_iter()
                .filter_map(|(field, absent)| absent.then_some(field))
                .collect();
            Err(MetadataError::MissingField { missing })
        }
    }
}
