//! Schema layer: serde shapes of the profile document + validated structures.
//!
//! This module is intentionally separate from tree building and rendering.
//! It owns:
//! - the top-level document shape
//! - raw profile records
//! - statistic descriptors and their units

pub mod profile;
pub mod stats;

pub use profile::RawProfile;
pub use stats::{StatIndex, Unit};

use anyhow::Context;
use serde::Deserialize;

/// Top-level profile document as it arrives on the wire.
///
/// JSON shape:
/// {
///   "query_id": "...",
///   "statistics_desc": { "<name>": { "display_name", "index", "unit", "plain_statistics" } },
///   "profiles": [ { "id", "name", "parent_id", "title", "labels", "statistics", "errors"? } ]
/// }
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileDocument {
    pub query_id: String,

    /// Kept as a raw map so entries are checked one by one, in document order.
    pub statistics_desc: serde_json::Map<String, serde_json::Value>,

    pub profiles: Vec<RawProfile>,
}

impl ProfileDocument {
    /// Parse a document from its JSON text. Missing top-level keys are fatal.
    pub fn from_json(text: &str) -> crate::Result<Self> {
        serde_json::from_str(text).context("parse profile document")
    }
}
