//! Canopy - snapshot a directory tree as text, PNG, SVG, or PDF

pub mod config;
pub mod error;
pub mod render;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{ConnectorStyle, OutputFormat, RenderConfig};
pub use error::{Result, TreeError};
pub use render::{print_json, render_artifacts, RenderReport, Renderer, TextRenderer};
pub use tree::{Node, NodeKind, TreeResult, TreeWalker};
