//! TreeWalker - builds the full tree in memory for rendering

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::warn;

use crate::config::RenderConfig;
use crate::error::{Result, TreeError};

use super::node::{Node, NodeKind, TreeResult};
use super::utils::{is_excluded, is_hidden};

/// Running totals accumulated as the recursion returns.
#[derive(Debug, Default)]
struct Totals {
    dirs: usize,
    files: usize,
    size: u64,
    max_depth: usize,
}

impl Totals {
    fn note_depth(&mut self, depth: usize) {
        self.max_depth = self.max_depth.max(depth);
    }
}

/// A file-partition entry after classification. `None` size marks an entry
/// that could not be read (symlink or metadata failure).
type FileEntry = (String, Option<u64>);

/// Depth-first walker producing an immutable [`TreeResult`].
///
/// Traversal is single-threaded and fully materialized; identical
/// filesystem state yields an identical tree.
pub struct TreeWalker {
    config: RenderConfig,
}

impl TreeWalker {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Walk `root` up to the configured depth.
    ///
    /// Fails with `NotFound` / `NotADirectory` / `InvalidConfig` before any
    /// traversal; per-entry read failures degrade to inaccessible leaves.
    pub fn walk(&self, root: &Path) -> Result<TreeResult> {
        self.config.validate()?;

        let meta = fs::metadata(root).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => TreeError::NotFound {
                path: root.to_path_buf(),
            },
            _ => TreeError::Io(e),
        })?;
        if !meta.is_dir() {
            return Err(TreeError::NotADirectory {
                path: root.to_path_buf(),
            });
        }

        let name = root
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| ".".to_string());

        let mut totals = Totals::default();
        let children = if self.config.max_depth > 0 {
            let entries = fs::read_dir(root)?;
            self.collect_children(entries, 1, &mut totals)
        } else {
            Vec::new()
        };

        let size = children.iter().map(|c| c.size).sum();
        let root_node = Node {
            name,
            kind: NodeKind::Directory,
            size,
            depth: 0,
            inaccessible: false,
            children,
        };

        Ok(TreeResult {
            root: root_node,
            root_path: root.to_path_buf(),
            total_dirs: totals.dirs,
            total_files: totals.files,
            total_size: totals.size,
            max_depth: totals.max_depth,
            generated_at: Local::now(),
        })
    }

    /// List one directory's entries into ordered child nodes.
    ///
    /// Entries partition into directories and files, each sorted
    /// case-insensitively by name with listing order breaking ties.
    fn collect_children(&self, entries: fs::ReadDir, depth: usize, totals: &mut Totals) -> Vec<Node> {
        let mut dir_entries: Vec<(String, PathBuf)> = Vec::new();
        let mut file_entries: Vec<FileEntry> = Vec::new();

        for entry in entries {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    warn!(error = %e, "skipping unreadable directory entry");
                    continue;
                }
            };
            let name = entry.file_name().to_string_lossy().to_string();

            if !self.config.show_hidden && is_hidden(&name) {
                continue;
            }
            if is_excluded(&name, &self.config.exclude) {
                continue;
            }

            match entry.file_type() {
                Ok(ft) if ft.is_dir() => dir_entries.push((name, entry.path())),
                Ok(ft) if ft.is_symlink() => {
                    // Never followed; rendered as a marked leaf.
                    if self.config.include_files {
                        file_entries.push((name, None));
                    }
                }
                Ok(_) => {
                    if self.config.include_files {
                        match entry.metadata() {
                            Ok(m) => file_entries.push((name, Some(m.len()))),
                            Err(e) => {
                                warn!(name = %name, error = %e, "file metadata unreadable");
                                file_entries.push((name, None));
                            }
                        }
                    }
                }
                Err(e) => {
                    warn!(name = %name, error = %e, "entry type unreadable");
                    if self.config.include_files {
                        file_entries.push((name, None));
                    }
                }
            }
        }

        // Stable sorts keep listing order for case-insensitive ties.
        dir_entries.sort_by_key(|(name, _)| name.to_lowercase());
        file_entries.sort_by_key(|(name, _)| name.to_lowercase());

        let mut children = Vec::with_capacity(dir_entries.len() + file_entries.len());

        for (name, path) in dir_entries {
            totals.dirs += 1;
            totals.note_depth(depth);
            children.push(self.dir_node(name, &path, depth, totals));
        }

        for (name, size) in file_entries {
            totals.files += 1;
            totals.note_depth(depth);
            let inaccessible = size.is_none();
            let size = size.unwrap_or(0);
            totals.size += size;
            children.push(Node {
                name,
                kind: NodeKind::File,
                size,
                depth,
                inaccessible,
                children: Vec::new(),
            });
        }

        children
    }

    /// Build the node for one subdirectory, descending while the depth
    /// limit allows. An unreadable directory becomes an inaccessible leaf
    /// instead of aborting the walk.
    fn dir_node(&self, name: String, path: &Path, depth: usize, totals: &mut Totals) -> Node {
        if depth < self.config.max_depth {
            match fs::read_dir(path) {
                Ok(entries) => {
                    let children = self.collect_children(entries, depth + 1, totals);
                    let size = children.iter().map(|c| c.size).sum();
                    return Node {
                        name,
                        kind: NodeKind::Directory,
                        size,
                        depth,
                        inaccessible: false,
                        children,
                    };
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "directory unreadable, kept as leaf");
                    return Node {
                        name,
                        kind: NodeKind::Directory,
                        size: 0,
                        depth,
                        inaccessible: true,
                        children: Vec::new(),
                    };
                }
            }
        }

        // At the depth limit: the directory appears, its contents do not.
        Node {
            name,
            kind: NodeKind::Directory,
            size: 0,
            depth,
            inaccessible: false,
            children: Vec::new(),
        }
    }
}
