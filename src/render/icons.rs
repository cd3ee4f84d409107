//! Entry type glyphs for decorated output

use std::path::Path;

use crate::tree::NodeKind;

/// Pick the glyph for an entry from its kind and file extension.
pub fn icon_for(name: &str, kind: NodeKind) -> &'static str {
    if kind == NodeKind::Directory {
        return "📁";
    }

    let ext = Path::new(name)
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "py" => "🐍",
        "js" | "ts" | "jsx" | "tsx" => "📜",
        "html" | "htm" => "🌐",
        "css" | "scss" | "sass" => "🎨",
        "png" | "jpg" | "jpeg" | "gif" | "svg" => "🖼",
        "pdf" | "doc" | "docx" | "txt" | "md" => "📋",
        "zip" | "tar" | "gz" | "rar" => "📦",
        "json" | "yaml" | "yml" | "toml" => "⚙",
        "db" | "sqlite" | "sql" => "🗄",
        "exe" | "bat" | "sh" => "⚡",
        _ => "📄",
    }
}
