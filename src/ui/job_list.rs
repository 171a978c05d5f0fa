//! Job list panel.
//!
//! Three states: not fetched yet (hint), fetched but empty ("No jobs found")
//! and a scrollable list with one row per job. A "Showing N jobs" line sits
//! above the list once anything has been fetched.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::dashboard::states;
use super::filter_bar::filter_line;
use super::helpers::truncate_to_width;
use super::theme::{
    priority_color, status_color, COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_SELECTED_BG,
};
use crate::models::Job;
use crate::state::AppState;

/// Render the job list panel with its filter bar.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState, selected: usize) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(" Job List ", Style::default().fg(COLOR_ACCENT)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    frame.render_widget(Paragraph::new(filter_line(state)), rows[0]);

    if !state.jobs_loaded {
        states::render_hint(frame, rows[2], states::HINT_LOAD_JOBS);
        return;
    }

    frame.render_widget(Paragraph::new(showing_line(state.jobs.len())), rows[1]);

    if state.jobs.is_empty() {
        states::render_empty_jobs(frame, rows[2]);
        return;
    }

    let width = rows[2].width as usize;
    let items: Vec<ListItem> = state
        .jobs
        .iter()
        .map(|job| ListItem::new(job_row(job, width)))
        .collect();

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .bg(COLOR_SELECTED_BG)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▌");

    let mut list_state = ListState::default().with_selected(Some(selected.min(state.jobs.len() - 1)));
    frame.render_stateful_widget(list, rows[2], &mut list_state);
}

/// "Showing N jobs"
pub fn showing_line(count: usize) -> Line<'static> {
    Line::from(vec![
        Span::styled("Showing ", Style::default().fg(COLOR_DIM)),
        Span::styled(
            count.to_string(),
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" jobs", Style::default().fg(COLOR_DIM)),
    ])
}

/// One list row:
///
/// ```text
/// Rust Engineer  [APPLIED]  Acme · Remote · Full time · Priority: HIGH
/// ```
///
/// Status, priority and type are shown verbatim when unknown.
pub fn job_row(job: &Job, width: usize) -> Line<'static> {
    let title_width = (width / 3).max(8);
    let job_type = job
        .type_kind()
        .map(|t| t.label().to_string())
        .unwrap_or_else(|| job.job_type.clone());

    Line::from(vec![
        Span::styled(
            truncate_to_width(&job.title, title_width),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!("[{}]", job.status),
            Style::default().fg(status_color(&job.status)),
        ),
        Span::raw("  "),
        Span::raw(job.company.clone()),
        Span::styled(" · ", Style::default().fg(COLOR_DIM)),
        Span::styled(job.location.clone(), Style::default().fg(COLOR_DIM)),
        Span::styled(" · ", Style::default().fg(COLOR_DIM)),
        Span::styled(job_type, Style::default().fg(COLOR_DIM)),
        Span::styled(" · ", Style::default().fg(COLOR_DIM)),
        Span::styled(
            format!("Priority: {}", job.priority),
            Style::default().fg(priority_color(&job.priority)),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn rendered(state: &AppState, selected: usize, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| render(frame, Rect::new(0, 0, width, height), state, selected))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn sample_job() -> Job {
        Job::new(1, "Rust Engineer", "Acme", "Remote", "APPLIED", "HIGH", "FULL_TIME")
    }

    #[test]
    fn test_before_first_fetch_shows_hint() {
        let text = rendered(&AppState::new(), 0, 80, 10);
        assert!(text.contains("Press l to load jobs from the database"));
        assert!(text.contains("Status [ALL]"));
        assert!(!text.contains("Showing"));
    }

    #[test]
    fn test_empty_fetch() {
        let mut state = AppState::new();
        state.apply_jobs(Vec::new());
        let text = rendered(&state, 0, 80, 12);
        assert!(text.contains("Showing 0 jobs"));
        assert!(text.contains("No jobs found"));
    }

    #[test]
    fn test_rows_rendered() {
        let mut state = AppState::new();
        let mut other = sample_job();
        other.id = 2;
        other.title = "Data Engineer".to_string();
        other.status = "CUSTOM_STAGE".to_string();
        other.job_type = "APPRENTICESHIP".to_string();
        state.apply_jobs(vec![sample_job(), other]);

        let text = rendered(&state, 1, 120, 10);
        assert!(text.contains("Showing 2 jobs"));
        assert!(text.contains("Rust Engineer"));
        assert!(text.contains("[APPLIED]"));
        assert!(text.contains("Full time"));
        assert!(text.contains("Priority: HIGH"));
        // Unknown values pass through verbatim
        assert!(text.contains("[CUSTOM_STAGE]"));
        assert!(text.contains("APPRENTICESHIP"));
    }

    #[test]
    fn test_selection_out_of_range_is_clamped() {
        let mut state = AppState::new();
        state.apply_jobs(vec![sample_job()]);
        let text = rendered(&state, 50, 80, 8);
        assert!(text.contains("▌"));
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let mut state = AppState::new();
        state.apply_jobs(vec![sample_job()]);
        rendered(&state, 0, 2, 2);
        rendered(&state, 0, 10, 3);
    }
}
