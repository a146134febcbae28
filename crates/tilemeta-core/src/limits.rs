//! Size and compression checks for the selected metadata entry.

use crate::ExtractorConfig;
use crate::MetadataError;
use crate::Result;
use crate::error::QuotaResource;
use crate::selection::EntryInfo;

/// Rejects entries whose declared uncompressed size is over the limit.
///
/// The declared size comes from the central directory and may lie; the
/// read itself is bounded as well.
pub fn validate_declared_size(entry: &EntryInfo, config: &ExtractorConfig) -> Result<()> {
    if entry.size > config.max_metadata_size {
        return Err(MetadataError::QuotaExceeded {
            resource: QuotaResource::MetadataSize {
                size: entry.size,
                max: config.max_metadata_size,
            },
        });
    }

    Ok(())
}

/// Validates the compression ratio of an entry.
///
/// Entries with a zero compressed size are accepted.
pub fn validate_compression_ratio(entry: &EntryInfo, config: &ExtractorConfig) -> Result<()> {
    if entry.compressed_size == 0 {
        return Ok(());
    }

    let ratio = entry.size as f64 / entry.compressed_size as f64;

    if ratio > config.max_compression_ratio {
        return Err(MetadataError::CompressionRatio {
            path: entry.path.clone(),
            compressed: entry.compressed_size,
            uncompressed: entry.size,
            ratio,
        });
    }

    Ok(())
}
