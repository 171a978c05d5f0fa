//! Placeholder states for the dashboard and job list.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::Paragraph,
    Frame,
};

use crate::ui::helpers::center_vertically;
use crate::ui::theme::COLOR_DIM;

pub const HINT_LOAD_DASHBOARD: &str = "Press r to load dashboard data";
pub const HINT_LOAD_JOBS: &str = "Press l to load jobs from the database";
pub const EMPTY_TITLE: &str = "No jobs found";
pub const EMPTY_MESSAGE: &str = "Try adjusting your filters or press c to see all jobs";

/// Single dim line, centered.
pub fn render_hint(frame: &mut Frame, area: Rect, hint: &str) {
    let paragraph = Paragraph::new(Line::styled(hint.to_string(), Style::default().fg(COLOR_DIM)))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, center_vertically(area, 1));
}

/// "No jobs found" block shown after a fetch returned nothing.
pub fn render_empty_jobs(frame: &mut Frame, area: Rect) {
    let text = Text::from(vec![
        Line::styled(
            EMPTY_TITLE,
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
        Line::styled(EMPTY_MESSAGE, Style::default().fg(COLOR_DIM)),
    ]);

    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(paragraph, center_vertically(area, 3));
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
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

    #[test]
    fn test_empty_jobs_message() {
        let mut terminal = Terminal::new(TestBackend::new(80, 10)).unwrap();
        terminal
            .draw(|frame| render_empty_jobs(frame, Rect::new(0, 0, 80, 10)))
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("No jobs found"));
        assert!(text.contains("Try adjusting your filters or press c to see all jobs"));
    }

    #[test]
    fn test_hint_in_one_row_area() {
        let mut terminal = Terminal::new(TestBackend::new(40, 1)).unwrap();
        terminal
            .draw(|frame| render_hint(frame, Rect::new(0, 0, 40, 1), HINT_LOAD_DASHBOARD))
            .unwrap();
        assert!(screen_text(&terminal).contains("Press r to load dashboard data"));
    }
}
