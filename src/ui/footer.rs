//! Footer keybinding hints.

use ratatui::{
    style::Style,
    text::{Line, Span},
};

use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM};

const HINTS: [(&str, &str); 8] = [
    ("r", "refresh stats"),
    ("l", "load all"),
    ("s/S", "status"),
    ("p/P", "priority"),
    ("enter", "apply"),
    ("c", "clear"),
    ("j/k", "move"),
    ("q", "quit"),
];

/// Key hints that fit in `width` columns.
pub fn footer_line(width: u16) -> Line<'static> {
    let mut spans = Vec::new();
    let mut used = 0usize;

    for (key, action) in HINTS {
        let piece = key.len() + 1 + action.len() + 3;
        if used + piece > width as usize {
            break;
        }
        spans.push(Span::styled(key, Style::default().fg(COLOR_ACCENT)));
        spans.push(Span::styled(format!(" {}   ", action), Style::default().fg(COLOR_DIM)));
        used += piece;
    }

    Line::from(spans)
}
