//! Raster image artifact
//!
//! Draws the laid-out rows onto a white canvas with an 8x8 bitmap font.
//! ASCII and box-drawing glyphs render directly; anything else falls back
//! to `?`. Rows beyond the configured cap collapse into a trailing marker.

use std::io;
use std::path::Path;

use font8x8::legacy::{BASIC_LEGACY, BOX_LEGACY};
use image::{Rgb, RgbImage};

use crate::config::{OutputFormat, RenderConfig};
use crate::error::{Result, TreeError};
use crate::tree::TreeResult;

use super::lines::{cap_rows, layout};
use super::Renderer;

const CHAR_WIDTH: u32 = 8;
const LINE_HEIGHT: u32 = 14;
const PADDING: u32 = 16;

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

pub struct PngRenderer;

impl PngRenderer {
    /// All rows the image will carry, with the body capped at `max_rows`.
    fn rows(tree: &TreeResult, config: &RenderConfig) -> Vec<String> {
        let l = layout(tree, config);
        let (keep, marker) = cap_rows(&l.body, config.max_rows);

        let mut rows = l.header.clone();
        rows.push(String::new());
        for line in &l.body[..keep] {
            rows.push(format!("{}{}", line.prefix, line.text));
        }
        if let Some(m) = marker {
            rows.push(m);
        }
        rows.push(String::new());
        rows.push(l.footer.clone());
        rows
    }
}

impl Renderer for PngRenderer {
    fn render(&self, tree: &TreeResult, config: &RenderConfig, path: &Path) -> Result<()> {
        let rows = Self::rows(tree, config);
        let columns = rows.iter().map(|r| r.chars().count()).max().unwrap_or(1) as u32;

        let width = columns.max(1) * CHAR_WIDTH + PADDING * 2;
        let height = rows.len() as u32 * LINE_HEIGHT + PADDING * 2;
        let mut img = RgbImage::from_pixel(width, height, WHITE);

        for (row, text) in rows.iter().enumerate() {
            let y = PADDING + row as u32 * LINE_HEIGHT;
            draw_text(&mut img, PADDING, y, text);
        }

        img.save(path).map_err(|e| {
            TreeError::write(
                OutputFormat::Png,
                path,
                io::Error::new(io::ErrorKind::Other, e),
            )
        })
    }
}

fn draw_text(img: &mut RgbImage, x: u32, y: u32, text: &str) {
    for (col, ch) in text.chars().enumerate() {
        let bitmap = glyph(ch);
        let gx = x + col as u32 * CHAR_WIDTH;
        for (row, byte) in bitmap.iter().enumerate() {
            for bit in 0..8u32 {
                if byte & (1 << bit) != 0 {
                    img.put_pixel(gx + bit, y + row as u32, BLACK);
                }
            }
        }
    }
}

/// 8x8 bitmap for one character; bit 0 of each row byte is the left pixel.
fn glyph(ch: char) -> [u8; 8] {
    let code = ch as usize;
    if code < 0x80 {
        BASIC_LEGACY[code]
    } else if (0x2500..0x2580).contains(&code) {
        BOX_LEGACY[code - 0x2500]
    } else {
        BASIC_LEGACY[b'?' as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_coverage() {
        assert_ne!(glyph('A'), [0u8; 8]);
        assert_ne!(glyph('│'), [0u8; 8]);
        assert_ne!(glyph('└'), [0u8; 8]);
        // Outside both ranges: the fallback glyph.
        assert_eq!(glyph('🐍'), glyph('?'));
    }

    #[test]
    fn test_draw_text_marks_pixels() {
        let mut img = RgbImage::from_pixel(64, 16, WHITE);
        draw_text(&mut img, 0, 0, "X");
        assert!(img.pixels().any(|p| *p == BLACK));
    }
}
