//! Metadata entry selection.
//!
//! Selection is a pure filter over [`EntryInfo`] values read from the
//! archive's central directory, so the path rules can be exercised without
//! building archives.

use tracing::debug;
use tracing::warn;

use crate::CandidatePolicy;
use crate::MetadataError;
use crate::Result;

/// Top-level directory that holds the metadata document.
pub const METADATA_DIR: &str = "metadata";

/// Central directory facts about one archive entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryInfo {
    /// Position in the central directory.
    pub index: usize,
    /// Entry name as stored in the archive.
    pub path: String,
    /// Declared uncompressed size in bytes.
    pub size: u64,
    /// Declared compressed size in bytes.
    pub compressed_size: u64,
    /// Whether the entry is a directory.
    pub is_dir: bool,
}

impl EntryInfo {
    /// Describes a regular file entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use tilemeta_core::selection::EntryInfo;
    ///
    /// let entry = EntryInfo::file(0, "metadata/product.yml", 120, 90);
    /// assert!(!entry.is_dir);
    /// ```
    #[must_use]
    pub fn file(index: usize, path: impl Into<String>, size: u64, compressed_size: u64) -> Self {
        Self {
            index,
            path: path.into(),
            size,
            compressed_size,
            is_dir: false,
        }
    }

    /// Describes a directory entry.
    #[must_use]
    pub fn directory(index: usize, path: impl Into<String>) -> Self {
        Self {
            index,
            path: path.into(),
            size: 0,
            compressed_size: 0,
            is_dir: true,
        }
    }
}

/// Normalizes an archive entry path.
///
/// Empty and `.` segments are dropped, so `./metadata//x.yml` becomes
/// `metadata/x.yml`. Absolute paths and paths containing `..` yield `None`.
///
/// # Examples
///
/// ```
/// use tilemeta_core::selection::normalize_entry_path;
///
/// assert_eq!(
///     normalize_entry_path("./metadata/product.yml").as_deref(),
///     Some("metadata/product.yml")
/// );
/// assert_eq!(normalize_entry_path("../metadata/product.yml"), None);
/// assert_eq!(normalize_entry_path("/metadata/product.yml"), None);
/// ```
#[must_use]
pub fn normalize_entry_path(path: &str) -> Option<String> {
    if path.starts_with('/') {
        return None;
    }

    let mut segments = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => return None,
            other => segments.push(other),
        }
    }

    if segments.is_empty() {
        return None;
    }

    Some(segments.join("/"))
}

/// Returns `true` if `path` names a file directly inside the top-level
/// `metadata` directory.
///
/// Hidden files, including macOS `._` resource forks, are rejected.
///
/// # Examples
///
/// ```
/// use tilemeta_core::selection::is_metadata_path;
///
/// assert!(is_metadata_path("metadata/product.yml"));
/// assert!(!is_metadata_path("product.yml"));
/// assert!(!is_metadata_path("metadata/sub/product.yml"));
/// assert!(!is_metadata_path("__MACOSX/metadata/._product.yml"));
/// assert!(!is_metadata_path("metadata/._product.yml"));
/// ```
#[must_use]
pub fn is_metadata_path(path: &str) -> bool {
    let Some(normalized) = normalize_entry_path(path) else {
        return false;
    };

    match normalized.split_once('/') {
        Some((dir, file_name)) => {
            dir == METADATA_DIR && !file_name.contains('/') && !file_name.starts_with('.')
        }
        None => false,
    }
}

/// Returns `true` if the entry qualifies as the metadata document.
#[must_use]
pub fn is_metadata_candidate(entry: &EntryInfo) -> bool {
    !entry.is_dir && is_metadata_path(&entry.path)
}

/// Picks the metadata entry out of an archive listing.
///
/// `entries` must be in central directory order; with
/// [`CandidatePolicy::FirstInDirectory`] the earliest candidate wins.
///
/// # Errors
///
/// Returns [`MetadataError::NoMetadataFile`] when nothing qualifies and
/// [`MetadataError::AmbiguousMetadata`] when several entries qualify under
/// [`CandidatePolicy::Reject`].
///
/// # Examples
///
/// ```
/// use tilemeta_core::CandidatePolicy;
/// use tilemeta_core::selection::EntryInfo;
/// use tilemeta_core::selection::select_candidate;
///
/// let entries = vec![
///     EntryInfo::file(0, "releases/product.tgz", 4096, 4000),
///     EntryInfo::file(1, "metadata/product.yml", 120, 90),
/// ];
/// let selected = select_candidate(&entries, CandidatePolicy::default()).unwrap();
/// assert_eq!(selected.index, 1);
/// ```
pub fn select_candidate(entries: &[EntryInfo], policy: CandidatePolicy) -> Result<&EntryInfo> {
    let candidates: Vec<&EntryInfo> = entries.iter().filter(|e| is_metadata_candidate(e)).collect();

    debug!(
        entries = entries.len(),
        candidates = candidates.len(),
        "scanned package entries"
    );

    match candidates.as_slice() {
        [] => Err(MetadataError::NoMetadataFile),
        [only] => Ok(*only),
        [first, ..] => match policy {
            CandidatePolicy::FirstInDirectory => {
                warn!(
                    selected = %first.path,
                    candidates = candidates.len(),
                    "multiple metadata files found, using the first"
                );
                Ok(*first)
            }
            CandidatePolicy::Reject => Err(MetadataError::AmbiguousMetadata {
                candidates: candidates.iter().map(|e| e.path.clone()).collect(),
            }),
        },
    }
}
