//! Statistic descriptors (`statistics_desc`).
//!
//! Each entry describes one column of the per-node `statistics` array:
//!
//! "CpuTime": {
//!   "display_name": "cpu time",
//!   "index": 0,
//!   "unit": "NanoSeconds",
//!   "plain_statistics": true
//! }

use anyhow::Context;
use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Semantic unit of a statistic; selects the formatter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Unit {
    NanoSeconds,
    MillisSeconds,
    Bytes,
    Rows,
    Count,
    /// Any unit string we don't know; rendered as a plain integer.
    Unknown(String),
}

impl From<String> for Unit {
    fn from(s: String) -> Self {
        match s.as_str() {
            "NanoSeconds" => Unit::NanoSeconds,
            "MillisSeconds" => Unit::MillisSeconds,
            "Bytes" => Unit::Bytes,
            "Rows" => Unit::Rows,
            "Count" => Unit::Count,
            _ => Unit::Unknown(s),
        }
    }
}

/// Raw descriptor shape. All four fields are required.
#[derive(Debug, Clone, Deserialize)]
struct RawStatDesc {
    display_name: String,
    index: i64,
    unit: Unit,
    plain_statistics: bool,
}

/// Validated descriptor for one statistics column.
#[derive(Debug, Clone, PartialEq)]
pub struct StatDescriptor {
    pub name: String,
    pub display_name: String,
    pub index: i64,
    pub unit: Unit,
    #[allow(dead_code)]
    pub plain_statistics: bool,
}

/// Descriptors keyed by their position in the statistics array.
pub type StatIndex = BTreeMap<i64, StatDescriptor>;

/// Turn the raw `statistics_desc` map into an index -> descriptor lookup.
///
/// Entries are visited in document order; when two entries share an index the
/// later one replaces the earlier.
pub fn parse_statistics_desc(
    raw: &serde_json::Map<String, serde_json::Value>,
) -> crate::Result<StatIndex> {
    let mut out = StatIndex::new();
    for (name, value) in raw {
        let desc = RawStatDesc::deserialize(value)
            .with_context(|| format!("bad statistics_desc entry {:?}", name))?;

        if let Unit::Unknown(unit) = &desc.unit {
            debug!(stat = %name, unit = %unit, "unknown unit, values print as plain integers");
        }

        let stat = StatDescriptor {
            name: name.clone(),
            display_name: desc.display_name,
            index: desc.index,
            unit: desc.unit,
            plain_statistics: desc.plain_statistics,
        };

        if let Some(prev) = out.insert(stat.index, stat) {
            warn!(
                index = prev.index,
                replaced = %prev.name,
                by = %name,
                "duplicate statistic index"
            );
        }
    }
    Ok(out)
}
