//! Message and key handling for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

use super::types::{CycleDirection, FilterKind};
use super::{App, AppMessage};

impl App {
    /// Apply a result from a background task.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        self.pending_requests = self.pending_requests.saturating_sub(1);

        match msg {
            AppMessage::StatsFetched(stats) => {
                self.state.apply_statistics(stats);
            }
            AppMessage::JobsFetched(jobs) => {
                self.state.apply_jobs(jobs);
                self.selected = 0;
                self.clamp_selection();
            }
            AppMessage::HealthChecked(healthy) => {
                self.state.apply_health_check(healthy);
            }
        }
    }

    /// Handle a key press. Releases and repeats are ignored.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        self.mark_dirty();
        debug!(code = ?key.code, modifiers = ?key.modifiers, "Key pressed");

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Char('r') => self.refresh_stats(),
            KeyCode::Char('l') => self.load_all_jobs(),
            KeyCode::Char('s') => self.cycle_filter(FilterKind::Status, CycleDirection::Forward),
            KeyCode::Char('S') => self.cycle_filter(FilterKind::Status, CycleDirection::Backward),
            KeyCode::Char('p') => self.cycle_filter(FilterKind::Priority, CycleDirection::Forward),
            KeyCode::Char('P') => {
                self.cycle_filter(FilterKind::Priority, CycleDirection::Backward)
            }
            KeyCode::Enter | KeyCode::Char('f') => self.apply_filters(),
            KeyCode::Char('c') => self.clear_filters_and_reload(),
            KeyCode::Char('j') | KeyCode::Down => self.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.select_previous(),
            KeyCode::Char('g') | KeyCode::Home => self.select_first(),
            KeyCode::Char('G') | KeyCode::End => self.select_last(),
            _ => {}
        }
    }
}
