//! Render configuration shared by the walker and every renderer

use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;
use glob::Pattern;

use crate::error::{Result, TreeError};

/// Default per-directory exclude patterns, matching common noise directories.
pub const DEFAULT_EXCLUDES: &[&str] = &[".git", "__pycache__", "node_modules", "target"];

const DEFAULT_MAX_ROWS: usize = 500;

/// Artifact formats a render pass can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum OutputFormat {
    /// Plain text with connector glyphs
    Text,
    /// Raster image
    Png,
    /// Vector image
    Svg,
    /// Paginated document
    Pdf,
}

impl OutputFormat {
    /// File extension for artifacts of this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Png => "png",
            OutputFormat::Svg => "svg",
            OutputFormat::Pdf => "pdf",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Text => "text",
            OutputFormat::Png => "png",
            OutputFormat::Svg => "svg",
            OutputFormat::Pdf => "pdf",
        };
        write!(f, "{}", name)
    }
}

/// Connector glyph presets for the tree body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ConnectorStyle {
    /// Classic `tree`-style connectors
    #[default]
    Simple,
    /// Narrower two-column connectors
    Artisanal,
    /// ASCII-only connectors
    Minimal,
}

/// The four glyph strings a style is made of.
pub struct ConnectorSet {
    /// More siblings follow below this entry.
    pub branch: &'static str,
    /// Last entry among its siblings.
    pub corner: &'static str,
    /// Continuation of an ancestor that still has siblings below.
    pub pipe: &'static str,
    /// Continuation under a closed ancestor.
    pub space: &'static str,
}

impl ConnectorStyle {
    pub fn glyphs(&self) -> &'static ConnectorSet {
        match self {
            ConnectorStyle::Simple => &ConnectorSet {
                branch: "├── ",
                corner: "└── ",
                pipe: "│   ",
                space: "    ",
            },
            ConnectorStyle::Artisanal => &ConnectorSet {
                branch: "├─ ",
                corner: "└─ ",
                pipe: "│  ",
                space: "   ",
            },
            ConnectorStyle::Minimal => &ConnectorSet {
                branch: "+ ",
                corner: "+ ",
                pipe: "| ",
                space: "  ",
            },
        }
    }
}

/// Configuration for one walk-and-render invocation.
///
/// Built by the presentation layer, handed to the walker and each renderer,
/// never mutated by either.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Stop descending beyond this depth (0 = root only).
    pub max_depth: usize,
    /// Include file nodes, or directories only.
    pub include_files: bool,
    /// Prefix entries with type glyphs.
    pub include_icons: bool,
    /// Append human-readable sizes to file entries.
    pub show_sizes: bool,
    /// Include dotfiles and dot-directories.
    pub show_hidden: bool,
    /// Glob patterns matched against entry names; matches are skipped.
    pub exclude: Vec<String>,
    /// Cap on children shown per directory; the rest collapse into a
    /// `... (N more entries)` marker.
    pub max_entries: Option<usize>,
    pub style: ConnectorStyle,
    /// Artifact formats to write.
    pub formats: Vec<OutputFormat>,
    /// Destination directory for artifacts.
    pub output_dir: PathBuf,
    /// Maximum rows per page (PDF) or per image (PNG, SVG).
    pub max_rows: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: 2,
            include_files: true,
            include_icons: false,
            show_sizes: false,
            show_hidden: false,
            exclude: DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect(),
            max_entries: None,
            style: ConnectorStyle::Simple,
            formats: vec![OutputFormat::Text],
            output_dir: PathBuf::from("."),
            max_rows: DEFAULT_MAX_ROWS,
        }
    }
}

impl RenderConfig {
    /// Reject configurations the walker and renderers cannot honor.
    /// Runs before any traversal so bad input never produces partial output.
    pub fn validate(&self) -> Result<()> {
        if self.max_rows == 0 {
            return Err(TreeError::InvalidConfig {
                message: "max_rows must be at least 1".to_string(),
            });
        }
        if let Some(0) = self.max_entries {
            return Err(TreeError::InvalidConfig {
                message: "max_entries must be at least 1".to_string(),
            });
        }
        for pattern in &self.exclude {
            if pattern.is_empty() {
                return Err(TreeError::InvalidConfig {
                    message: "exclude patterns must not be empty".to_string(),
                });
            }
            if let Err(e) = Pattern::new(pattern) {
                return Err(TreeError::InvalidConfig {
                    message: format!("invalid exclude pattern '{}': {}", pattern, e),
                });
            }
        }
        Ok(())
    }
}
