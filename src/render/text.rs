//! Text artifact and console preview
//!
//! Writes the laid-out tree as a plain-text file and prints the colored
//! console preview the CLI shows before artifacts are written.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::config::{OutputFormat, RenderConfig};
use crate::error::{Result, TreeError};
use crate::tree::TreeResult;

use super::lines::{layout, LineKind};
use super::Renderer;

pub struct TextRenderer;

impl TextRenderer {
    /// The complete text document: header, tree body, summary footer.
    pub fn format(tree: &TreeResult, config: &RenderConfig) -> String {
        let l = layout(tree, config);
        let mut out = String::new();
        for line in &l.header {
            out.push_str(line);
            out.push('\n');
        }
        out.push('\n');
        for line in &l.body {
            out.push_str(&line.prefix);
            out.push_str(&line.text);
            out.push('\n');
        }
        out.push('\n');
        out.push_str(&l.footer);
        out.push('\n');
        out
    }

    /// Print the tree body and summary to stdout, coloring entries by kind.
    pub fn print(tree: &TreeResult, config: &RenderConfig, use_color: bool) -> io::Result<()> {
        let choice = if use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        let l = layout(tree, config);

        for line in &l.body {
            write!(stdout, "{}", line.prefix)?;
            match line.kind {
                LineKind::Root | LineKind::Directory => {
                    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
                }
                LineKind::File => {
                    stdout.set_color(ColorSpec::new().set_fg(Some(Color::White)))?;
                }
                LineKind::Inaccessible => {
                    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
                }
                LineKind::Marker => {
                    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
                }
            }
            write!(stdout, "{}", line.text)?;
            stdout.reset()?;
            writeln!(stdout)?;
        }

        writeln!(stdout)?;
        writeln!(stdout, "{}", l.footer)?;
        Ok(())
    }
}

impl Renderer for TextRenderer {
    fn render(&self, tree: &TreeResult, config: &RenderConfig, path: &Path) -> Result<()> {
        fs::write(path, Self::format(tree, config))
            .map_err(|e| TreeError::write(OutputFormat::Text, path, e))
    }
}
