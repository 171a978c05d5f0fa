//! Stat cards row: Total Jobs, Wishlist, Active, Applied.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::state::AppState;
use crate::ui::theme::COLOR_BORDER;

/// A single card's title, value and accent color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: u64,
    pub color: Color,
}

/// The four cards shown on the dashboard. Missing counts show as 0.
pub fn stat_cards(state: &AppState) -> [StatCard; 4] {
    [
        StatCard {
            title: "Total Jobs",
            value: state.total_jobs,
            color: Color::Blue,
        },
        StatCard {
            title: "Wishlist",
            value: state.status_count("WISHLIST"),
            color: Color::Magenta,
        },
        StatCard {
            title: "Active",
            value: state.status_count("ACTIVE"),
            color: Color::Green,
        },
        StatCard {
            title: "Applied",
            value: state.status_count("APPLIED"),
            color: Color::Yellow,
        },
    ]
}

/// Render the cards side by side. Needs 3 rows.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    if area.height < 3 || area.width < 20 {
        return;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for (card, column) in stat_cards(state).iter().zip(columns.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(COLOR_BORDER))
            .title(Line::styled(
                format!(" {} ", card.title),
                Style::default().fg(Color::Gray),
            ));

        let value = Paragraph::new(Line::styled(
            card.value.to_string(),
            Style::default().fg(card.color).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .block(block);

        frame.render_widget(value, *column);
    }
}
