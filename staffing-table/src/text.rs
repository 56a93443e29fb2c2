//! Display-width aware text helpers.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::column::Alignment;

/// Display width of a string in terminal columns.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Cut `s` to at most `width` columns, ending with `…` when shortened.
pub fn truncate(s: &str, width: usize) -> String {
    if display_width(s) <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Truncate and pad `s` to exactly `width` columns.
pub fn fit(s: &str, width: usize, align: Alignment) -> String {
    let s = truncate(s, width);
    let gap = width.saturating_sub(display_width(&s));
    match align {
        Alignment::Left => format!("{s}{}", " ".repeat(gap)),
        Alignment::Right => format!("{}{s}", " ".repeat(gap)),
        Alignment::Center => {
            let left = gap / 2;
            format!("{}{s}{}", " ".repeat(left), " ".repeat(gap - left))
        }
    }
}

/// Word-wrap text to `width` columns, respecting existing line breaks.
///
/// Words wider than the line are broken.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    for line in text.lines() {
        let mut current = String::new();
        for word in line.split_whitespace() {
            let word_width = display_width(word);
            let current_width = display_width(&current);
            if !current.is_empty() && current_width + 1 + word_width <= width {
                current.push(' ');
                current.push_str(word);
                continue;
            }
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if word_width <= width {
                current.push_str(word);
            } else {
                let mut used = 0;
                for ch in word.chars() {
                    let w = ch.width().unwrap_or(0);
                    if used + w > width && !current.is_empty() {
                        lines.push(std::mem::take(&mut current));
                        used = 0;
                    }
                    current.push(ch);
                    used += w;
                }
            }
        }
        lines.push(current);
    }
    lines
}
