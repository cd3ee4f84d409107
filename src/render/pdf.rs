//! Paginated document artifact
//!
//! Lays the rows onto A4 pages with the builtin Courier face. The builtin
//! faces are WinAnsi-encoded, so connector and icon glyphs are folded to
//! ASCII before drawing; content and ordering match the other formats.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument};

use crate::config::{OutputFormat, RenderConfig};
use crate::error::{Result, TreeError};
use crate::tree::TreeResult;

use super::lines::{layout, paginate};
use super::Renderer;

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 15.0;
const HEADER_STEP: f32 = 6.0;
const BODY_STEP: f32 = 4.2;
const BODY_TOP: f32 = PAGE_HEIGHT - 50.0;
/// Rows that physically fit between BODY_TOP and the bottom margin.
const PAGE_ROW_LIMIT: usize = 52;

pub struct PdfRenderer;

impl Renderer for PdfRenderer {
    fn render(&self, tree: &TreeResult, config: &RenderConfig, path: &Path) -> Result<()> {
        let l = layout(tree, config);

        let (doc, first_page, first_layer) =
            PdfDocument::new(l.header[0].as_str(), Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "tree");
        let header_font = builtin_font(&doc, BuiltinFont::Helvetica, path)?;
        let body_font = builtin_font(&doc, BuiltinFont::Courier, path)?;

        let mut layer = doc.get_page(first_page).get_layer(first_layer);
        let mut y: f32 = PAGE_HEIGHT - 20.0;
        for line in &l.header {
            layer.use_text(ascii_fold(line), 10.0, Mm(MARGIN), Mm(y), &header_font);
            y -= HEADER_STEP;
        }

        let rows_per_page = config.max_rows.min(PAGE_ROW_LIMIT);
        let pages = paginate(&l.body, rows_per_page);

        y = BODY_TOP;
        for (i, &(start, end)) in pages.iter().enumerate() {
            if i > 0 {
                let (page, new_layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "tree");
                layer = doc.get_page(page).get_layer(new_layer);
                y = BODY_TOP;
            }
            for line in &l.body[start..end] {
                let text = ascii_fold(&format!("{}{}", line.prefix, line.text));
                layer.use_text(text, 9.0, Mm(MARGIN), Mm(y), &body_font);
                y -= BODY_STEP;
            }
        }

        y -= HEADER_STEP;
        if y < MARGIN {
            let (page, new_layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "tree");
            layer = doc.get_page(page).get_layer(new_layer);
            y = BODY_TOP;
        }
        layer.use_text(ascii_fold(&l.footer), 10.0, Mm(MARGIN), Mm(y), &header_font);

        let file = File::create(path).map_err(|e| TreeError::write(OutputFormat::Pdf, path, e))?;
        doc.save(&mut BufWriter::new(file)).map_err(|e| {
            TreeError::write(
                OutputFormat::Pdf,
                path,
                io::Error::new(io::ErrorKind::Other, e.to_string()),
            )
        })
    }
}

fn builtin_font(
    doc: &printpdf::PdfDocumentReference,
    font: BuiltinFont,
    path: &Path,
) -> Result<IndirectFontRef> {
    doc.add_builtin_font(font).map_err(|e| {
        TreeError::write(
            OutputFormat::Pdf,
            path,
            io::Error::new(io::ErrorKind::Other, e.to_string()),
        )
    })
}

/// Fold connector glyphs to ASCII and drop anything WinAnsi cannot carry.
fn ascii_fold(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '│' => folded.push('|'),
            '├' | '└' => folded.push('+'),
            '─' => folded.push('-'),
            c if c.is_ascii() => folded.push(c),
            _ => {}
        }
    }
    folded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_fold_connectors() {
        assert_eq!(ascii_fold("│   └── a.txt"), "|   +-- a.txt");
        assert_eq!(ascii_fold("├── B"), "+-- B");
    }

    #[test]
    fn test_ascii_fold_drops_icons() {
        assert_eq!(ascii_fold("📁 src"), " src");
        assert_eq!(ascii_fold("plain"), "plain");
    }
}
