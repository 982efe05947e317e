//! Raw profile records, one per operator.

use serde::Deserialize;

/// Raw record shape as it appears in `profiles`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawProfile {
    pub id: i64,
    pub name: String,

    /// `null` (or absent) marks a root.
    #[serde(default)]
    pub parent_id: Option<i64>,

    pub title: String,

    /// Opaque; carried through but not rendered.
    pub labels: Vec<serde_json::Value>,

    pub statistics: Vec<i128>,

    #[serde(default)]
    pub errors: Vec<String>,
}
