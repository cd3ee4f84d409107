//! Shared row layout consumed by every renderer
//!
//! One pass over a `TreeResult` produces the header block, the connector
//! rows, and the summary footer. Text, PNG, SVG, and PDF all render this
//! same layout, so a tree reads identically across formats.

use crate::config::RenderConfig;
use crate::tree::{format_size, Node, TreeResult};

use super::icons::icon_for;

/// What a body row depicts, for coloring and pagination decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Root,
    Directory,
    File,
    /// Symlink or unreadable entry.
    Inaccessible,
    /// `... (N more entries)` placeholder for a capped directory.
    Marker,
}

/// One body row. The prefix carries indentation and connector glyphs; the
/// text is the entry label (icon, name, size, markers).
#[derive(Debug, Clone)]
pub struct Line {
    pub prefix: String,
    pub text: String,
    pub kind: LineKind,
}

impl Line {
    /// Number of display columns the full row occupies.
    pub fn width(&self) -> usize {
        self.prefix.chars().count() + self.text.chars().count()
    }
}

/// The complete laid-out document: header, tree body, summary footer.
#[derive(Debug, Clone)]
pub struct Layout {
    pub header: Vec<String>,
    pub body: Vec<Line>,
    pub footer: String,
}

impl Layout {
    /// Widest row across header, body, and footer, in display columns.
    pub fn max_width(&self) -> usize {
        self.header
            .iter()
            .map(|h| h.chars().count())
            .chain(self.body.iter().map(Line::width))
            .chain([self.footer.chars().count()])
            .max()
            .unwrap_or(0)
    }
}

/// Flatten a walk result into renderable rows.
pub fn layout(tree: &TreeResult, config: &RenderConfig) -> Layout {
    let header = vec![
        format!("Directory tree for {}", tree.root_path.display()),
        format!("Generated: {}", tree.generated_at.format("%Y-%m-%d %H:%M:%S")),
        "-".repeat(60),
    ];

    let mut body = Vec::new();
    push_node(&tree.root, "", true, true, config, &mut body);

    let footer = format!(
        "{} directories, {} files, {} total",
        tree.total_dirs,
        tree.total_files,
        format_size(tree.total_size)
    );

    Layout { header, body, footer }
}

fn push_node(
    node: &Node,
    prefix: &str,
    is_last: bool,
    is_root: bool,
    config: &RenderConfig,
    body: &mut Vec<Line>,
) {
    let glyphs = config.style.glyphs();
    let connector = if is_root {
        ""
    } else if is_last {
        glyphs.corner
    } else {
        glyphs.branch
    };

    let mut text = String::new();
    if config.include_icons {
        text.push_str(icon_for(&node.name, node.kind));
        text.push(' ');
    }
    text.push_str(&node.name);
    if is_root {
        text.push('/');
    }
    if config.show_sizes && !node.is_dir() && !node.inaccessible {
        text.push_str(&format!(" ({})", format_size(node.size)));
    }
    if node.inaccessible {
        text.push_str(" [inaccessible]");
    }

    let kind = if node.inaccessible {
        LineKind::Inaccessible
    } else if is_root {
        LineKind::Root
    } else if node.is_dir() {
        LineKind::Directory
    } else {
        LineKind::File
    };

    body.push(Line {
        prefix: format!("{}{}", prefix, connector),
        text,
        kind,
    });

    // Per-directory cap: surplus children collapse into one marker row.
    let (shown, hidden) = match config.max_entries {
        Some(cap) if node.children.len() > cap => {
            (&node.children[..cap], node.children.len() - cap)
        }
        _ => (&node.children[..], 0),
    };

    let child_prefix = if is_root {
        String::new()
    } else if is_last {
        format!("{}{}", prefix, glyphs.space)
    } else {
        format!("{}{}", prefix, glyphs.pipe)
    };

    for (i, child) in shown.iter().enumerate() {
        let child_is_last = hidden == 0 && i == shown.len() - 1;
        push_node(child, &child_prefix, child_is_last, false, config, body);
    }

    if hidden > 0 {
        body.push(Line {
            prefix: format!("{}{}", child_prefix, glyphs.corner),
            text: format!("... ({} more entries)", hidden),
            kind: LineKind::Marker,
        });
    }
}

/// Cap body rows for single-page artifacts (PNG, SVG).
///
/// Returns how many rows to keep and, when rows were dropped, the
/// deterministic trailing marker row.
pub fn cap_rows(body: &[Line], max_rows: usize) -> (usize, Option<String>) {
    if body.len() <= max_rows {
        (body.len(), None)
    } else {
        let keep = max_rows.saturating_sub(1);
        (keep, Some(format!("... ({} more lines)", body.len() - keep)))
    }
}

/// Split body rows into page ranges of at most `rows_per_page` rows.
///
/// A truncation marker never opens a page: it stays on the page of the
/// directory it belongs to, even when that page runs one row long.
pub fn paginate(body: &[Line], rows_per_page: usize) -> Vec<(usize, usize)> {
    let mut pages = Vec::new();
    let mut start = 0;
    while start < body.len() {
        let mut end = (start + rows_per_page).min(body.len());
        while end < body.len() && body[end].kind == LineKind::Marker {
            end += 1;
        }
        pages.push((start, end));
        start = end;
    }
    pages
}
