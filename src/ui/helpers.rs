//! Small text and layout helpers shared by the views.

use ratatui::layout::Rect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate `s` to at most `max_width` display columns, ending in `…` when cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// A rect of `height` rows, vertically centered in `area`.
pub fn center_vertically(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    let y_offset = area.height.saturating_sub(height) / 2;
    Rect::new(area.x, area.y + y_offset, area.width, height)
}
