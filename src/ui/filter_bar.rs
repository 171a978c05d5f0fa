//! Filter bar showing the current status and priority selection.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::state::{filter_label, AppState};
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM};

/// `Status [APPLIED]  Priority [ALL]`
pub fn filter_line(state: &AppState) -> Line<'static> {
    let value_style = Style::default()
        .fg(COLOR_ACCENT)
        .add_modifier(Modifier::BOLD);
    let label_style = Style::default().fg(COLOR_DIM);

    Line::from(vec![
        Span::styled("Status ", label_style),
        Span::styled(format!("[{}]", filter_label(&state.filter_status)), value_style),
        Span::styled("  Priority ", label_style),
        Span::styled(format!("[{}]", filter_label(&state.filter_priority)), value_style),
    ])
}
