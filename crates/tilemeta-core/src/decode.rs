//! Metadata document decoding.
//!
//! The extractor only needs the top-level product fields of the document, so
//! decoders return them as a flat map of strings. [`YamlDecoder`] is the
//! default; other implementations can be injected through
//! [`MetadataExtractor::with_decoder`](crate::MetadataExtractor::with_decoder).

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_yaml::Value;
use thiserror::Error;

use crate::extractor::NAME_FIELD;
use crate::extractor::VERSION_FIELD;

/// Top-level product fields of a decoded document, keyed by field name.
pub type Fields = BTreeMap<String, String>;

/// Errors produced while decoding a metadata document.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Document bytes are not valid UTF-8.
    #[error("metadata file is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// YAML syntax error, with the parser's location information.
    #[error("yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Document root is not a mapping.
    #[error("expected a mapping at the document root, found {found}")]
    NotAMapping {
        /// Kind of value found at the root.
        found: &'static str,
    },

    /// Failure reported by a custom decoder.
    #[error("{0}")]
    Message(String),
}

/// Decodes a metadata document into its top-level product fields.
pub trait DocumentDecoder {
    /// Decodes `document`.
    ///
    /// Unknown keys must be tolerated.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is syntactically invalid.
    fn decode(&self, document: &str) -> Result<Fields, DecodeError>;
}

/// YAML metadata decoder backed by `serde_yaml`.
///
/// Only the product fields are extracted. Their values keep the scalar text
/// exactly as written, so `product_version: 1.10` stays `"1.10"`. Null
/// values are skipped, an empty document decodes to no fields, and only the
/// first document of a multi-document stream is read.
///
/// # Examples
///
/// ```
/// use tilemeta_core::decode::DocumentDecoder;
/// use tilemeta_core::decode::YamlDecoder;
///
/// let fields = YamlDecoder
///     .decode("---\nname: cf\nproduct_version: 2.10\nreleases: []\n")
///     .unwrap();
/// assert_eq!(fields["name"], "cf");
/// assert_eq!(fields["product_version"], "2.10");
/// assert!(!fields.contains_key("releases"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlDecoder;

#[derive(Deserialize)]
struct ProductFields {
    name: Option<String>,
    product_version: Option<String>,
}

fn first_document(document: &str) -> Option<serde_yaml::Deserializer<'_>> {
    serde_yaml::Deserializer::from_str(document).next()
}

impl DocumentDecoder for YamlDecoder {
    fn decode(&self, document: &str) -> Result<Fields, DecodeError> {
        let Some(root) = first_document(document) else {
            return Ok(Fields::new());
        };

        match Value::deserialize(root)? {
            Value::Mapping(_) => {}
            Value::Null => return Ok(Fields::new()),
            other => {
                return Err(DecodeError::NotAMapping {
                    found: value_kind(&other),
                });
            }
        }

        // String targets keep plain scalars as written.
        let Some(root) = first_document(document) else {
            return Ok(Fields::new());
        };
        let product = ProductFields::deserialize(root)?;

        let mut fields = Fields::new();
        if let Some(name) = product.name {
            fields.insert(NAME_FIELD.to_string(), name);
        }
        if let Some(version) = product.product_version {
            fields.insert(VERSION_FIELD.to_string(), version);
        }

        Ok(fields)
    }
}

const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
