//! Dashboard section
//!
//! Stat cards, the status distribution bar and the priority breakdown. Before
//! any statistics arrive (or when the backend reports zero jobs) a hint is
//! shown instead.

pub mod cards;
pub mod states;
pub mod status_bar;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders},
    Frame,
};

use crate::models::Priority;
use crate::state::AppState;
use crate::ui::theme::{priority_color, COLOR_ACCENT, COLOR_BORDER, COLOR_DIM};

/// Rows the dashboard wants: border + cards + bar + labels + priorities + border.
pub const DASHBOARD_HEIGHT: u16 = 8;

/// Render the dashboard panel.
///
/// # Layout
/// ```text
/// ┌ Dashboard ───────────────────────────────────────────┐
/// │┌ Total Jobs ┐┌ Wishlist ┐┌ Active ┐┌ Applied ┐        │
/// ││     12     ││    4     ││   3    ││    5    │        │
/// │└────────────┘└──────────┘└────────┘└─────────┘        │
/// │███████████████████████████████████████████████        │
/// │■ Wishlist 4  ■ Applied 5  ■ Active 3                  │
/// │priority  HIGH 2  MEDIUM 6  LOW 4                      │
/// └───────────────────────────────────────────────────────┘
/// ```
pub fn render_dashboard(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(" Dashboard ", Style::default().fg(COLOR_ACCENT)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 || inner.width == 0 {
        return;
    }

    if state.total_jobs == 0 {
        states::render_hint(frame, inner, states::HINT_LOAD_DASHBOARD);
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    cards::render(frame, rows[0], state);
    status_bar::render(frame, rows[1], &state.status_counts);
    frame.render_widget(priority_line(state), rows[2]);
}

/// `priority  HIGH 2  MEDIUM 0  LOW 1`, plus any priority the client does not know.
pub fn priority_line(state: &AppState) -> Line<'static> {
    let mut spans = vec![Span::styled("priority", Style::default().fg(COLOR_DIM))];

    let known = Priority::ALL
        .iter()
        .map(|p| (p.as_str().to_string(), state.priority_count(p.as_str())));
    let unknown = state
        .priority_counts
        .iter()
        .filter(|(key, _)| key.parse::<Priority>().is_err())
        .map(|(key, count)| (key.clone(), *count));

    for (key, count) in known.chain(unknown) {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("{} {}", key, count),
            Style::default().fg(priority_color(&key)),
        ));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Counts, Statistics};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn rendered(state: &AppState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| render_dashboard(frame, Rect::new(0, 0, width, height), state))
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

    fn loaded_state() -> AppState {
        let mut status = Counts::new();
        status.insert("APPLIED".to_string(), 2);
        status.insert("WISHLIST".to_string(), 1);
        let mut priority = Counts::new();
        priority.insert("HIGH".to_string(), 3);
        let mut state = AppState::new();
        state.apply_statistics(Some(Statistics::new(3, status, priority)));
        state
    }

    #[test]
    fn test_hint_when_no_jobs() {
        let text = rendered(&AppState::new(), 80, DASHBOARD_HEIGHT);
        assert!(text.contains("Press r to load dashboard data"));
        assert!(!text.contains("Total Jobs"));
    }

    #[test]
    fn test_cards_and_priorities() {
        let text = rendered(&loaded_state(), 100, DASHBOARD_HEIGHT);
        assert!(text.contains("Total Jobs"));
        assert!(text.contains("Wishlist"));
        assert!(text.contains("Applied 2"));
        assert!(text.contains("HIGH 3"));
        assert!(text.contains("MEDIUM 0"));
        assert!(!text.contains("Press r to load"));
    }

    #[test]
    fn test_priority_line_includes_unknown_keys() {
        let mut state = loaded_state();
        state.priority_counts.insert("URGENT".to_string(), 1);
        let line = priority_line(&state);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "priority  HIGH 3  MEDIUM 0  LOW 0  URGENT 1");
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        rendered(&loaded_state(), 3, 2);
        rendered(&loaded_state(), 1, 1);
    }
}
