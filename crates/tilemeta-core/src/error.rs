//! Error types for metadata extraction.

use std::path::PathBuf;

use thiserror::Error;

use crate::decode::DecodeError;

/// Result type alias using `MetadataError`.
pub type Result<T> = std::result::Result<T, MetadataError>;

/// Represents a specific limit that was exceeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuotaResource {
    /// Archive holds more entries than allowed.
    EntryCount {
        /// Number of entries in the central directory.
        current: usize,
        /// Maximum allowed entry count.
        max: usize,
    },
    /// Metadata entry is larger than allowed.
    MetadataSize {
        /// Uncompressed size in bytes (declared or observed).
        size: u64,
        /// Maximum allowed size in bytes.
        max: u64,
    },
}

impl std::fmt::Display for QuotaResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EntryCount { current, max } => {
                write!(f, "quota exceeded: archive entry count ({current} > {max})")
            }
            Self::MetadataSize { size, max } => {
                write!(f, "quota exceeded: metadata file size ({size} > {max})")
            }
        }
    }
}

/// Errors that can occur while extracting product metadata.
#[derive(Error, Debug)]
pub enum MetadataError {
    /// Archive could not be opened or is not a readable zip file.
    #[error("could not open package archive {}: {source}", .path.display())]
    ArchiveOpen {
        /// Path that was passed in.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// No entry matched the `metadata/<file>` location.
    #[error("no metadata file was found in provided .pivotal")]
    NoMetadataFile,

    /// More than one entry matched and the policy rejects ambiguity.
    #[error("multiple metadata files were found in provided .pivotal: {}", .candidates.join(", "))]
    AmbiguousMetadata {
        /// Paths of every matching entry, in directory order.
        candidates: Vec<String>,
    },

    /// Reading the selected entry failed.
    #[error("could not read metadata file {path}: {source}")]
    EntryRead {
        /// Entry path inside the archive.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Metadata document could not be decoded.
    #[error("could not extract product metadata: {0}")]
    Decode(#[source] DecodeError),

    /// Decoded document lacks the product name or version.
    #[error("could not extract product metadata: could not find product details in metadata file")]
    MissingField {
        /// Names of the required fields that were absent or empty.
        missing: Vec<&'static str>,
    },

    /// A configured limit was exceeded.
    #[error("{resource}")]
    QuotaExceeded {
        /// Description of the exceeded resource.
        resource: QuotaResource,
    },

    /// Metadata entry compresses suspiciously well.
    #[error(
        "metadata file {path} exceeds compression ratio limit: compressed={compressed} bytes, uncompressed={uncompressed} bytes (ratio: {ratio:.2})"
    )]
    CompressionRatio {
        /// Entry path inside the archive.
        path: String,
        /// Compressed size in bytes.
        compressed: u64,
        /// Uncompressed size in bytes.
        uncompressed: u64,
        /// Compression ratio.
        ratio: f64,
    },
}

impl MetadataError {
    /// Returns a stable machine-readable code for this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use tilemeta_core::MetadataError;
    ///
    /// assert_eq!(MetadataError::NoMetadataFile.code(), "NO_METADATA_FILE");
    /// ```
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::ArchiveOpen { .. } => "ARCHIVE_OPEN",
            Self::NoMetadataFile => "NO_METADATA_FILE",
            Self::AmbiguousMetadata { .. } => "AMBIGUOUS_METADATA",
            Self::EntryRead { .. } => "ENTRY_READ",
            Self::Decode(_) => "DECODE",
            Self::MissingField { .. } => "MISSING_FIELD",
            Self::QuotaExceeded { .. } => "QUOTA_EXCEEDED",
            Self::CompressionRatio { .. } => "COMPRESSION_RATIO",
        }
    }

    /// Returns `true` if the error was raised by a configured limit rather
    /// than by the package contents being wrong.
    ///
    /// # Examples
    ///
    /// ```
    /// use tilemeta_core::MetadataError;
    /// use tilemeta_core::QuotaResource;
    ///
    /// let err = MetadataError::QuotaExceeded {
    ///     resource: QuotaResource::EntryCount { current: 11, max: 10 },
    /// };
    /// assert!(err.is_limit_violation());
    /// assert!(!MetadataError::NoMetadataFile.is_limit_violation());
    /// ```
    #[must_use]
    pub const fn is_limit_violation(&self) -> bool {
        matches!(
            self,
            Self::QuotaExceeded { .. } | Self::CompressionRatio { .. }
        )
    }

    /// Returns the quota resource that was exceeded, if applicable.
    #[must_use]
    pub const fn quota_resource(&self) -> Option<&QuotaResource> {
        match self {
            Self::QuotaExceeded { resource } => Some(resource),
            _ => None,
        }
    }
}
