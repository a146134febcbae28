//! Extracted product metadata.

/// Product metadata read from a package archive.
///
/// Only the extractor constructs values of this type, and only after both
/// the name and version were found non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    name: String,
    version: String,
    raw: String,
    path: String,
}

impl Metadata {
    pub(crate) fn new(name: String, version: String, raw: String, path: String) -> Self {
        Self {
            name,
            version,
            raw,
            path,
        }
    }

    /// Product name (`name` field).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Product version (`product_version` field).
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Metadata document exactly as stored in the archive.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Archive entry the document was read from.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Parses the raw document into a generic YAML value.
    ///
    /// Useful for comparing documents regardless of key order or
    /// formatting.
    ///
    /// # Errors
    ///
    /// Returns an error if the raw document is not valid YAML, which cannot
    /// happen for values returned by the YAML decoder.
    pub fn document(&self) -> Result<serde_yaml::Value, serde_yaml::Error> {
        serde_yaml::from_str(&self.raw)
    }

    /// Consumes the metadata and returns the raw document.
    #[must_use]
    pub fn into_raw(self) -> String {
        self.raw
    }
}
