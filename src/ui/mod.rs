//! UI rendering for the job dashboard.
//!
//! # Layout
//! ```text
//! Job Organizer                                          Connected ✅
//! (api error, if any)
//! ┌ Dashboard ─────────────────────────────────────────────────────┐
//! │ stat cards / status bar / priorities                            │
//! └─────────────────────────────────────────────────────────────────┘
//! ┌ Job List ──────────────────────────────────────────────────────┐
//! │Status [ALL]  Priority [ALL]                                     │
//! │Showing 3 jobs                                                   │
//! │▌Rust Engineer  [APPLIED]  Acme · Remote · ...                   │
//! └─────────────────────────────────────────────────────────────────┘
//! r refresh stats   l load all   ...
//! ```

pub mod dashboard;
pub mod filter_bar;
pub mod footer;
pub mod header;
pub mod helpers;
pub mod job_list;
pub mod theme;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

/// Smallest terminal the full layout is drawn in.
pub const MIN_WIDTH: u16 = 40;
pub const MIN_HEIGHT: u16 = 12;

const TOO_SMALL: &str = "Terminal too small";

/// Render the whole screen for the current app state.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    render_in(frame, area, app);
}

/// Render into an explicit area (used by tests and benchmarks).
pub fn render_in(frame: &mut Frame, area: Rect, app: &App) {
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        dashboard::states::render_hint(frame, area, TOO_SMALL);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(dashboard::DASHBOARD_HEIGHT),
            Constraint::Min(4),
            Constraint::Length(1),
        ])
        .split(area);

    header::render(frame, chunks[0], &app.state, app.is_loading(), app.tick_count);
    dashboard::render_dashboard(frame, chunks[1], &app.state);
    job_list::render(frame, chunks[2], &app.state, app.selected);
    frame.render_widget(Paragraph::new(footer::footer_line(chunks[3].width)), chunks[3]);
}
