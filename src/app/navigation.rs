//! Job list selection.

use super::App;

impl App {
    /// Move the selection one row down, stopping at the last job.
    pub fn select_next(&mut self) {
        let len = self.state.jobs.len();
        if len > 0 && self.selected < len - 1 {
            self.selected += 1;
        }
    }

    /// Move the selection one row up, stopping at the first job.
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.state.jobs.len().saturating_sub(1);
    }

    /// Keep the selection inside the current list.
    pub(crate) fn clamp_selection(&mut self) {
        let len = self.state.jobs.len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    /// Currently selected job, if the list is non-empty.
    pub fn selected_job(&self) -> Option<&crate::models::Job> {
        self.state.jobs.get(self.selected)
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
