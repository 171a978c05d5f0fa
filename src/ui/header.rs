//! Header: title, connection status and the last API error.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::state::{AppState, API_STATUS_FAILED};
use crate::ui::theme::{COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_SUCCESS};

pub const APP_TITLE: &str = "Job Organizer";

/// Braille spinner frames shown while requests are in flight.
const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Render the two header rows.
///
/// ```text
/// Job Organizer                                   ⠹ Connected ✅
/// Cannot connect to backend. Is it running?
/// ```
pub fn render(frame: &mut Frame, area: Rect, state: &AppState, loading: bool, tick: u64) {
    if area.height == 0 || area.width == 0 {
        return;
    }
    let buf = frame.buffer_mut();

    buf.set_stringn(
        area.x,
        area.y,
        APP_TITLE,
        area.width as usize,
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    );

    render_status(buf, area, state, loading, tick);

    if area.height > 1 && !state.api_error.is_empty() {
        buf.set_stringn(
            area.x,
            area.y + 1,
            &state.api_error,
            area.width as usize,
            Style::default().fg(COLOR_ERROR),
        );
    }
}

/// Right-aligned status text on row 0, skipped when it would hit the title.
fn render_status(buf: &mut Buffer, area: Rect, state: &AppState, loading: bool, tick: u64) {
    let mut text = String::new();
    if loading {
        text.push(SPINNER[(tick as usize / 4) % SPINNER.len()]);
        text.push(' ');
    }
    text.push_str(&state.api_status);

    let width = text.width() as u16;
    let min_x = area.x + APP_TITLE.width() as u16 + 2;
    let right = area.x + area.width;
    if width + min_x > right {
        return;
    }

    let color = if state.is_connected() {
        COLOR_SUCCESS
    } else if state.api_status == API_STATUS_FAILED {
        COLOR_ERROR
    } else {
        COLOR_DIM
    };
    buf.set_string(right - width, area.y, &text, Style::default().fg(color));
}
