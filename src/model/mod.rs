//! Tree model: link flat profile records into a forest.
//!
//! Nodes live in a single arena (`ProfileTree::nodes`); parent/child links are
//! arena indices, so no node owns another.

use crate::schema::RawProfile;
use std::collections::HashMap;
use tracing::debug;

/// Index into `ProfileTree::nodes`.
pub type NodeIdx = usize;

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileNode {
    pub id: i64,
    pub name: String,
    pub parent_id: Option<i64>,
    pub title: String,
    /// Carried from the input; not rendered.
    #[allow(dead_code)]
    pub labels: Vec<serde_json::Value>,
    pub statistics: Vec<i128>,
    pub errors: Vec<String>,
    /// Children in input order.
    pub children: Vec<NodeIdx>,
}

impl From<RawProfile> for ProfileNode {
    fn from(raw: RawProfile) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            parent_id: raw.parent_id,
            title: raw.title,
            labels: raw.labels,
            statistics: raw.statistics,
            errors: raw.errors,
            children: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileTree {
    pub nodes: Vec<ProfileNode>,
    /// Root nodes in first-encounter order.
    pub roots: Vec<NodeIdx>,
}

impl ProfileTree {
    pub fn node(&self, idx: NodeIdx) -> &ProfileNode {
        &self.nodes[idx]
    }
}

/// Build the forest. Performs:
/// - materialize records into the arena (a repeated id replaces the earlier
///   record in place)
/// - attach each node to its parent, or make it a root when `parent_id` is
///   null or unknown
pub fn build_tree(profiles: Vec<RawProfile>) -> ProfileTree {
    // Phase 1: arena + id index.
    let mut nodes: Vec<ProfileNode> = Vec::with_capacity(profiles.len());
    let mut by_id: HashMap<i64, NodeIdx> = HashMap::new();

    for raw in profiles {
        let node = ProfileNode::from(raw);
        match by_id.get(&node.id).copied() {
            Some(idx) => {
                debug!(id = node.id, "duplicate profile id, keeping the later record");
                nodes[idx] = node;
            }
            None => {
                by_id.insert(node.id, nodes.len());
                nodes.push(node);
            }
        }
    }

    // Phase 2: link in arena order.
    let mut roots = Vec::new();
    for idx in 0..nodes.len() {
        let parent = nodes[idx].parent_id.and_then(|pid| {
            let found = by_id.get(&pid).copied();
            if found.is_none() {
                debug!(id = nodes[idx].id, parent_id = pid, "parent not found, treating as root");
            }
            found
        });

        match parent {
            Some(p) => nodes[p].children.push(idx),
            None => roots.push(idx),
        }
    }

    debug!(nodes = nodes.len(), roots = roots.len(), "built profile tree");

    ProfileTree { nodes, roots }
}
