//! Tree node and walk-result types

use std::path::PathBuf;

use chrono::{DateTime, Local};
use serde::Serialize;

/// Kind of filesystem entry a node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Directory,
    File,
}

/// One filesystem entry in the materialized tree.
///
/// Directory nodes carry the aggregated size of their descendants; file
/// nodes carry their own byte size. Children are ordered directories first,
/// then files, each partition case-insensitively by name.
#[derive(Debug, Clone, Serialize)]
pub struct Node {
    pub name: String,
    pub kind: NodeKind,
    pub size: u64,
    /// Root = 0; every child is exactly one deeper than its parent.
    pub depth: usize,
    /// Symlink or unreadable entry, rendered as a marked leaf.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub inaccessible: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    pub fn is_dir(&self) -> bool {
        self.kind == NodeKind::Directory
    }

    /// Count of immediate file children.
    pub fn file_child_count(&self) -> usize {
        self.children.iter().filter(|c| !c.is_dir()).count()
    }
}

/// The walker's output: one immutable tree plus aggregate statistics.
///
/// Constructed once per invocation and handed read-only to every renderer.
/// The generation timestamp is captured here, not at render time, so
/// rendering the same result repeatedly is byte-identical.
#[derive(Debug, Clone, Serialize)]
pub struct TreeResult {
    pub root: Node,
    pub root_path: PathBuf,
    /// The root directory itself is not counted.
    pub total_dirs: usize,
    pub total_files: usize,
    pub total_size: u64,
    /// Deepest depth actually materialized; at most the configured limit.
    pub max_depth: usize,
    pub generated_at: DateTime<Local>,
}
