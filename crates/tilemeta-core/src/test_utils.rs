//! Test utilities for building package archives.
//!
//! This module provides reusable helpers for creating in-memory zip
//! packages, shared by unit tests, integration tests and the CLI tests.
//!
//! # Panics
//!
//! All functions in this module may panic on I/O errors since they are
//! designed for test use only where panics are acceptable.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::io::Cursor;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use zip::CompressionMethod;
use zip::write::SimpleFileOptions;
use zip::write::ZipWriter;

/// Creates an in-memory zip archive from a list of entries.
///
/// Each entry is a tuple of (path, content). Files are stored uncompressed
/// in the given order.
///
/// # Examples
///
/// ```
/// use tilemeta_core::test_utils::create_test_zip;
///
/// let zip_data = create_test_zip(&[
///     ("metadata/product.yml", "name: product\nproduct_version: 1.0.0"),
///     ("releases/product.tgz", "release"),
/// ]);
/// ```
#[must_use]
pub fn create_test_zip<C: AsRef<[u8]>>(entries: &[(&str, C)]) -> Vec<u8> {
    entries
        .iter()
        .fold(ZipTestBuilder::new(), |builder, (path, data)| {
            builder.add_file(path, data.as_ref())
        })
        .build()
}

/// Writes a zip package built from `entries` to `dir/name` and returns its
/// path.
pub fn write_test_package<C: AsRef<[u8]>>(dir: &Path, name: &str, entries: &[(&str, C)]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, create_test_zip(entries)).unwrap();
    path
}

/// Builder for zip test archives with directories and compressed entries.
///
/// # Examples
///
/// ```
/// use tilemeta_core::test_utils::ZipTestBuilder;
///
/// let zip_data = ZipTestBuilder::new()
///     .add_directory("metadata/")
///     .add_file("metadata/product.yml", b"name: product")
///     .add_deflated_file("releases/product.tgz", &[0u8; 4096])
///     .build();
/// ```
pub struct ZipTestBuilder {
    writer: ZipWriter<Cursor<Vec<u8>>>,
}

impl ZipTestBuilder {
    /// Creates a new zip test builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            writer: ZipWriter::new(Cursor::new(Vec::new())),
        }
    }

    /// Adds an uncompressed file.
    #[must_use]
    pub fn add_file(self, path: &str, data: &[u8]) -> Self {
        self.add_with_method(path, data, CompressionMethod::Stored)
    }

    /// Adds a deflate-compressed file.
    #[must_use]
    pub fn add_deflated_file(self, path: &str, data: &[u8]) -> Self {
        self.add_with_method(path, data, CompressionMethod::Deflated)
    }

    /// Adds a directory entry.
    #[must_use]
    pub fn add_directory(mut self, path: &str) -> Self {
        let options = SimpleFileOptions::default().unix_permissions(0o755);
        self.writer.add_directory(path, options).unwrap();
        self
    }

    /// Finishes the archive and returns its bytes.
    #[must_use]
    pub fn build(self) -> Vec<u8> {
        self.writer.finish().unwrap().into_inner()
    }

    fn add_with_method(mut self, path: &str, data: &[u8], method: CompressionMethod) -> Self {
        let options = SimpleFileOptions::default()
            .compression_method(method)
            .unix_permissions(0o644);
        self.writer.start_file(path, options).unwrap();
        self.writer.write_all(data).unwrap();
        self
    }
}

impl Default for ZipTestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
