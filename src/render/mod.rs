//! Artifact rendering and dispatch
//!
//! Renderers consume an immutable [`TreeResult`] and write one artifact
//! each; none of them mutates the tree, and a failure in one format never
//! blocks the others.
//!
//! # Module Structure
//!
//! - `lines` - shared row layout all formats draw from
//! - `icons` - entry type glyphs
//! - `text` - text artifact and colored console preview
//! - `raster` - PNG artifact
//! - `svg` - SVG artifact
//! - `pdf` - paginated PDF artifact
//! - `json` - JSON output to stdout

mod icons;
mod json;
mod lines;
mod pdf;
mod raster;
mod svg;
mod text;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::{OutputFormat, RenderConfig};
use crate::error::{Result, TreeError};
use crate::tree::TreeResult;

// Re-export public types and functions
pub use icons::icon_for;
pub use json::print_json;
pub use lines::{cap_rows, layout, paginate, Layout, Line, LineKind};
pub use pdf::PdfRenderer;
pub use raster::PngRenderer;
pub use svg::SvgRenderer;
pub use text::TextRenderer;

/// Uniform rendering contract: one result in, one artifact out.
///
/// Adding a format means adding an implementation here; the walker never
/// changes.
pub trait Renderer {
    fn render(&self, tree: &TreeResult, config: &RenderConfig, path: &Path) -> Result<()>;
}

fn renderer_for(format: OutputFormat) -> Box<dyn Renderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer),
        OutputFormat::Png => Box::new(PngRenderer),
        OutputFormat::Svg => Box::new(SvgRenderer),
        OutputFormat::Pdf => Box::new(PdfRenderer),
    }
}

/// Outcome of one render pass: artifacts written, per-format failures.
#[derive(Debug, Default)]
pub struct RenderReport {
    pub written: Vec<(OutputFormat, PathBuf)>,
    pub failures: Vec<(OutputFormat, TreeError)>,
}

impl RenderReport {
    pub fn all_ok(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Destination path for one artifact: `output_dir/<root name>.<ext>`.
pub fn artifact_path(tree: &TreeResult, config: &RenderConfig, format: OutputFormat) -> PathBuf {
    config
        .output_dir
        .join(format!("{}.{}", artifact_stem(&tree.root.name), format.extension()))
}

/// Artifact names come from the root directory's name, cut down to
/// filesystem-safe characters.
fn artifact_stem(root_name: &str) -> String {
    let stem: String = root_name
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if stem.chars().all(|c| c == '.' || c == '_') {
        "tree".to_string()
    } else {
        stem
    }
}

/// Write every requested format, isolating failures per format.
///
/// The report carries the paths that were written and the formats that
/// failed; a `WriteError` in one format never aborts its siblings.
pub fn render_artifacts(tree: &TreeResult, config: &RenderConfig) -> RenderReport {
    let mut report = RenderReport::default();

    if let Err(e) = fs::create_dir_all(&config.output_dir) {
        for &format in &config.formats {
            let path = artifact_path(tree, config, format);
            report.failures.push((
                format,
                TreeError::write(format, path, io::Error::new(e.kind(), e.to_string())),
            ));
        }
        return report;
    }

    let mut seen = Vec::new();
    for &format in &config.formats {
        if seen.contains(&format) {
            continue;
        }
        seen.push(format);

        let path = artifact_path(tree, config, format);
        match renderer_for(format).render(tree, config, &path) {
            Ok(()) => {
                debug!(format = %format, path = %path.display(), "artifact written");
                report.written.push((format, path));
            }
            Err(e) => {
                warn!(format = %format, error = %e, "artifact failed");
                report.failures.push((format, e));
            }
        }
    }

    report
}
