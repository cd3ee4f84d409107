//! Shared helpers for tree walking

use glob::Pattern;

/// Check if an entry name matches any exclude pattern.
pub fn is_excluded(name: &str, patterns: &[String]) -> bool {
    patterns.iter().any(|p| name == p || glob_match(p, name))
}

/// Match a glob pattern against a name.
pub fn glob_match(pattern: &str, name: &str) -> bool {
    Pattern::new(pattern)
        .map(|p| p.matches(name))
        .unwrap_or(false)
}

/// Hidden entries are dot-prefixed names.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Format a size in bytes to human-readable form using 1024-based units.
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1}G", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1}M", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1}K", bytes as f64 / KB as f64)
    } else {
        format!("{}B", bytes)
    }
}
