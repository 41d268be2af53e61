/// Utility functions used throughout the application
use std::path::PathBuf;

use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

/// Get platform-specific debug log path
pub fn get_debug_log_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push("reeltui-debug.log");
    path
}

/// Terminal column width of a string
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Truncate a string to at most `max_width` terminal columns, appending an
/// ellipsis when anything was cut
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if display_width(text) <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        // Leave one column for the ellipsis
        if used + w > max_width.saturating_sub(1) {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Longest suffix of `text` that fits in `max_width` columns, so the end
/// of a long input line stays visible next to the cursor
pub fn tail_window(text: &str, max_width: usize) -> &str {
    if display_width(text) <= max_width {
        return text;
    }

    let mut used = 0;
    let mut start = text.len();
    for (idx, c) in text.char_indices().rev() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > max_width {
            break;
        }
        used += w;
        start = idx;
    }
    &text[start..]
}
