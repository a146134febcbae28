//! Product metadata extraction from zip-packaged release archives.
//!
//! `tilemeta-core` locates the single metadata document stored directly
//! under the top-level `metadata/` directory of a package, decodes it, and
//! returns the product name and version together with the document text.
//! Decoy entries such as macOS resource forks, root-level YAML files and
//! nested directories are ignored.
//!
//! # Examples
//!
//! ```no_run
//! use tilemeta_core::extract_metadata;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let metadata = extract_metadata("cf-2.0.1.pivotal")?;
//! println!("{} {}", metadata.name(), metadata.version());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod archive;
pub mod config;
pub mod decode;
pub mod error;
pub mod extractor;
pub mod limits;
pub mod metadata;
pub mod selection;

#[doc(hidden)]
pub mod test_utils;

// Re-export main API types
pub use api::extract_metadata;
pub use api::extract_metadata_with_config;
pub use archive::PackageArchive;
pub use config::CandidatePolicy;
pub use config::ExtractorConfig;
pub use decode::DecodeError;
pub use decode::DocumentDecoder;
pub use decode::YamlDecoder;
pub use error::MetadataError;
pub use error::QuotaResource;
pub use error::Result;
pub use extractor::MetadataExtractor;
pub use metadata::Metadata;
