//! Vector image artifact
//!
//! Assembles the SVG document directly: a styled header block followed by
//! monospace `<text>` rows, one per laid-out line. Leading connector
//! whitespace is significant, so every row preserves space explicitly.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::config::{OutputFormat, RenderConfig};
use crate::error::{Result, TreeError};
use crate::tree::TreeResult;

use super::lines::{cap_rows, layout};
use super::Renderer;

const CHAR_WIDTH: usize = 8;
const LINE_HEIGHT: usize = 18;
const PADDING: usize = 20;

pub struct SvgRenderer;

impl SvgRenderer {
    /// Build the full SVG document as a string.
    pub fn document(tree: &TreeResult, config: &RenderConfig) -> String {
        let l = layout(tree, config);
        let (keep, marker) = cap_rows(&l.body, config.max_rows);

        let row_count = l.header.len() + l.body[..keep].len()
            + marker.iter().count()
            + 3; // blank line, blank line, footer
        let width = l.max_width() * CHAR_WIDTH + PADDING * 2;
        let height = row_count * LINE_HEIGHT + PADDING * 2;

        let mut out = String::new();
        out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        let _ = writeln!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
            w = width,
            h = height
        );
        out.push_str("<style>\n");
        out.push_str(".header { font-family: sans-serif; font-size: 13px; fill: #444; }\n");
        out.push_str(".tree { font-family: monospace; font-size: 13px; fill: #000; white-space: pre; }\n");
        out.push_str("</style>\n");
        out.push_str("<rect width=\"100%\" height=\"100%\" fill=\"white\"/>\n");

        let mut y = PADDING + LINE_HEIGHT;
        for line in &l.header {
            push_text_row(&mut out, y, "header", line);
            y += LINE_HEIGHT;
        }
        y += LINE_HEIGHT;
        for line in &l.body[..keep] {
            push_text_row(&mut out, y, "tree", &format!("{}{}", line.prefix, line.text));
            y += LINE_HEIGHT;
        }
        if let Some(m) = marker {
            push_text_row(&mut out, y, "tree", &m);
            y += LINE_HEIGHT;
        }
        y += LINE_HEIGHT;
        push_text_row(&mut out, y, "header", &l.footer);

        out.push_str("</svg>\n");
        out
    }
}

impl Renderer for SvgRenderer {
    fn render(&self, tree: &TreeResult, config: &RenderConfig, path: &Path) -> Result<()> {
        fs::write(path, Self::document(tree, config))
            .map_err(|e| TreeError::write(OutputFormat::Svg, path, e))
    }
}

fn push_text_row(out: &mut String, y: usize, class: &str, text: &str) {
    let _ = writeln!(
        out,
        "<text x=\"{x}\" y=\"{y}\" class=\"{class}\" xml:space=\"preserve\">{text}</text>",
        x = PADDING,
        y = y,
        class = class,
        text = xml_escape(text)
    );
}

fn xml_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
