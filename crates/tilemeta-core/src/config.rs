//! Extraction limits and candidate selection policy.

/// How to resolve more than one `metadata/<file>` entry in a package.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CandidatePolicy {
    /// Use the first matching entry in central directory order.
    #[default]
    FirstInDirectory,
    /// Fail with [`MetadataError::AmbiguousMetadata`](crate::MetadataError::AmbiguousMetadata).
    Reject,
}

/// Configuration for a metadata extraction.
///
/// Limits bound the work done on untrusted packages: the entry count is
/// checked before scanning, the size and compression ratio before and while
/// reading the selected entry.
///
/// # Examples
///
/// ```
/// use tilemeta_core::CandidatePolicy;
/// use tilemeta_core::ExtractorConfig;
///
/// // Use defaults
/// let config = ExtractorConfig::default();
///
/// // Refuse packages with more than one metadata file
/// let strict = ExtractorConfig::default()
///     .with_candidate_policy(CandidatePolicy::Reject)
///     .with_max_metadata_size(64 * 1024);
/// assert_eq!(strict.max_metadata_size, 64 * 1024);
/// ```
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Maximum number of entries in the archive's central directory.
    pub max_entry_count: usize,

    /// Maximum uncompressed size of the metadata file in bytes.
    pub max_metadata_size: u64,

    /// Maximum compression ratio (uncompressed / compressed) of the
    /// metadata file.
    pub max_compression_ratio: f64,

    /// Behaviour when several entries qualify.
    pub candidate_policy: CandidatePolicy,
}

impl Default for ExtractorConfig {
    /// Default values:
    /// - `max_entry_count`: 100,000
    /// - `max_metadata_size`: 50 MB
    /// - `max_compression_ratio`: 100.0
    /// - `candidate_policy`: `FirstInDirectory`
    fn default() -> Self {
        Self {
            max_entry_count: 100_000,
            max_metadata_size: 50 * 1024 * 1024, // 50 MB
            max_compression_ratio: 100.0,
            candidate_policy: CandidatePolicy::FirstInDirectory,
        }
    }
}

impl ExtractorConfig {
    /// Sets the maximum archive entry count.
    #[must_use]
    pub const fn with_max_entry_count(mut self, max: usize) -> Self {
        self.max_entry_count = max;
        self
    }

    /// Sets the maximum metadata file size in bytes.
    #[must_use]
    pub const fn with_max_metadata_size(mut self, max: u64) -> Self {
        self.max_metadata_size = max;
        self
    }

    /// Sets the maximum compression ratio.
    #[must_use]
    pub const fn with_max_compression_ratio(mut self, ratio: f64) -> Self {
        self.max_compression_ratio = ratio;
        self
    }

    /// Sets the multiple-candidate policy.
    #[must_use]
    pub const fn with_candidate_policy(mut self, policy: CandidatePolicy) -> Self {
        self.candidate_policy = policy;
        self
    }
}
