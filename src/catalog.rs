//! Shower catalog document loading.
//!
//! The catalog is a JSON document with a `showers` map keyed by shower
//! identifier. Loading only checks document shape; per-record
//! validation is deferred to [`crate::models::shower`], so one bad
//! record never takes the rest of the catalog down. The raw text is
//! fingerprinted with SHA-256 for catalog update detection.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::models::record::ShowerRecord;

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default, rename = "shortName")]
    short_name: String,
    #[serde(default)]
    version: String,
    showers: BTreeMap<String, ShowerRecord>,
}

/// Parsed shower catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Display name from the document header.
    pub short_name: String,
    /// Catalog format version from the document header.
    pub version: String,
    /// SHA-256 of the raw document text, hex-encoded.
    pub checksum: String,
    records: Vec<ShowerRecord>,
}

impl Catalog {
    /// Parse a catalog document from its JSON text.
    ///
    /// The `showers` map key doubles as the shower identifier and is
    /// injected into records that do not carry their own `showerID`.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let document: CatalogDocument =
            serde_json::from_str(raw).context("invalid shower catalog JSON")?;

        let mut records = Vec::with_capacity(document.showers.len());
        for (key, mut record) in document.showers {
            if record.shower_id.is_none() {
                record.shower_id = Some(key);
            }
            records.push(record);
        }

        log::debug!(
            "loaded shower catalog `{}` version `{}` with {} records",
            document.short_name,
            document.version,
            records.len()
        );

        Ok(Catalog {
            short_name: document.short_name,
            version: document.version,
            checksum: calculate_checksum(raw),
            records,
        })
    }

    /// Read and parse a catalog file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read shower catalog {}", path.display()))?;
        Self::from_json_str(&raw)
            .with_context(|| format!("failed to parse shower catalog {}", path.display()))
    }

    /// Raw records in identifier order.
    pub fn records(&self) -> &[ShowerRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// SHA-256 of the raw catalog text, hex-encoded.
fn calculate_checksum(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let result = hasher.finalize();
    hex::encode(result)
}
