//! CLI entry point for canopy

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use canopy::{
    print_json, render_artifacts, ConnectorStyle, OutputFormat, RenderConfig, TextRenderer,
    TreeWalker,
};
use clap::{Parser, ValueEnum};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "canopy")]
#[command(about = "Snapshot a directory tree as text, PNG, SVG, or PDF")]
#[command(version)]
struct Args {
    /// Directory to snapshot
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Descend only N levels deep (0 = root only)
    #[arg(short = 'L', long = "level", default_value_t = 2)]
    level: usize,

    /// List directories only
    #[arg(short = 'd', long = "dirs-only")]
    dirs_only: bool,

    /// Prefix entries with type icons
    #[arg(long = "icons")]
    icons: bool,

    /// Show file sizes next to filenames
    #[arg(short = 's', long = "size")]
    size: bool,

    /// Include hidden (dot) entries
    #[arg(long = "hidden")]
    hidden: bool,

    /// Skip entries matching pattern, in addition to the defaults
    /// (can be used multiple times)
    #[arg(short = 'I', long = "ignore")]
    ignore: Vec<String>,

    /// Show at most N entries per directory
    #[arg(long = "max-files", value_name = "N")]
    max_files: Option<usize>,

    /// Connector glyph style
    #[arg(long = "style", value_enum, default_value = "simple")]
    style: ConnectorStyle,

    /// Artifact formats to write (comma-separated: text,png,svg,pdf)
    #[arg(
        short = 'f',
        long = "formats",
        value_enum,
        value_delimiter = ',',
        default_value = "text"
    )]
    formats: Vec<OutputFormat>,

    /// Destination directory for artifacts
    #[arg(short = 'o', long = "output", default_value = ".")]
    output: PathBuf,

    /// Maximum rows per page (PDF) or per image (PNG, SVG)
    #[arg(long = "max-rows", default_value_t = 500)]
    max_rows: usize,

    /// Print the tree as JSON instead of the console preview
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = RenderConfig {
        max_depth: args.level,
        include_files: !args.dirs_only,
        include_icons: args.icons,
        show_sizes: args.size,
        show_hidden: args.hidden,
        max_entries: args.max_files,
        style: args.style,
        formats: args.formats.clone(),
        output_dir: args.output.clone(),
        max_rows: args.max_rows,
        ..Default::default()
    };
    config.exclude.extend(args.ignore.iter().cloned());

    let root = if args.path.is_absolute() {
        args.path.clone()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(&args.path)
    };

    let tree = match TreeWalker::new(config.clone()).walk(&root) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("canopy: {}", e);
            process::exit(1);
        }
    };

    let preview = if args.json {
        print_json(&tree)
    } else {
        TextRenderer::print(&tree, &config, should_use_color(args.color))
    };
    if let Err(e) = preview {
        eprintln!("canopy: error writing output: {}", e);
        process::exit(1);
    }

    let report = render_artifacts(&tree, &config);
    for (_, path) in &report.written {
        println!("wrote {}", path.display());
    }
    for (format, e) in &report.failures {
        eprintln!("canopy: warning: {} output failed: {}", format, e);
    }
    if report.written.is_empty() && !report.failures.is_empty() {
        process::exit(1);
    }
}
