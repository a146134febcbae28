//! Read-only access to zip package archives.

use std::fs::File;
use std::io::BufReader;
use std::io::Read;
use std::io::Seek;
use std::path::Path;

use zip::ZipArchive;
use zip::result::ZipError;

use crate::MetadataError;
use crate::Result;
use crate::error::QuotaResource;
use crate::selection::EntryInfo;

/// A package archive opened for reading.
///
/// The underlying handle is released when the value is dropped.
#[derive(Debug)]
pub struct PackageArchive<R> {
    zip: ZipArchive<R>,
}

impl PackageArchive<BufReader<File>> {
    /// Opens the package archive at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::ArchiveOpen`] if the file cannot be opened
    /// or is not a zip archive.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let open_error = |source| MetadataError::ArchiveOpen {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(open_error)?;
        ZipArchive::new(BufReader::new(file))
            .map(|zip| Self { zip })
            .map_err(|e| open_error(zip_to_io(e)))
    }
}

impl<R: Read + Seek> PackageArchive<R> {
    /// Reads a package archive from any seekable reader.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::ArchiveOpen`] if the data is not a zip
    /// archive. `label` names the source in the error.
    pub fn from_reader(reader: R, label: &str) -> Result<Self> {
        ZipArchive::new(reader)
            .map(|zip| Self { zip })
            .map_err(|e| MetadataError::ArchiveOpen {
                path: label.into(),
                source: zip_to_io(e),
            })
    }

    /// Returns the number of entries in the central directory.
    #[must_use]
    pub fn len(&self) -> usize {
        self.zip.len()
    }

    /// Returns `true` if the archive has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.zip.len() == 0
    }

    /// Lists entries in central directory order without reading content.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::QuotaExceeded`] if the archive has more than
    /// `max_entries` entries.
    pub fn entries(&mut self, max_entries: usize) -> Result<Vec<EntryInfo>> {
        let count = self.zip.len();
        if count > max_entries {
            return Err(MetadataError::QuotaExceeded {
                resource: QuotaResource::EntryCount {
                    current: count,
                    max: max_entries,
                },
            });
        }

        let mut entries = Vec::with_capacity(count);
        for index in 0..count {
            let entry = self
                .zip
                .by_index_raw(index)
                .map_err(|e| MetadataError::EntryRead {
                    path: format!("#{index}"),
                    source: zip_to_io(e),
                })?;

            entries.push(EntryInfo {
                index,
                path: entry.name().to_string(),
                size: entry.size(),
                compressed_size: entry.compressed_size(),
                is_dir: entry.is_dir(),
            });
        }

        Ok(entries)
    }

    /// Reads the full decompressed content of an entry.
    ///
    /// At most `max_size` bytes are accepted, regardless of the size
    /// declared in the central directory.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::EntryRead`] if decompression fails and
    /// [`MetadataError::QuotaExceeded`] if the content is larger than
    /// `max_size`.
    pub fn read_entry(&mut self, entry: &EntryInfo, max_size: u64) -> Result<Vec<u8>> {
        let read_error = |source| MetadataError::EntryRead {
            path: entry.path.clone(),
            source,
        };

        let file = self
            .zip
            .by_index(entry.index)
            .map_err(|e| read_error(zip_to_io(e)))?;

        let capacity = usize::try_from(entry.size.min(max_size)).unwrap_or(0);
        let mut content = Vec::with_capacity(capacity);
        file.take(max_size.saturating_add(1))
            .read_to_end(&mut content)
            .map_err(read_error)?;

        let read = content.len() as u64;
        if read > max_size {
            return Err(MetadataError::QuotaExceeded {
                resource: QuotaResource::MetadataSize {
                    size: read,
                    max: max_size,
                },
            });
        }

        Ok(content)
    }
}

fn zip_to_io(err: ZipError) -> std::io::Error {
    match err {
        ZipError::Io(io_err) => io_err,
        other => std::io::Error::new(std::io::ErrorKind::InvalidData, other),
    }
}
