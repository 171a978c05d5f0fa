//! AppMessage enum for results coming back from spawned tasks.

use crate::models::{Job, Statistics};

/// Results of background API calls, consumed by [`App::handle_message`].
///
/// [`App::handle_message`]: super::App::handle_message
#[derive(Debug, Clone, PartialEq)]
pub enum AppMessage {
    /// Statistics fetch finished; `None` when the API gave no data
    StatsFetched(Option<Statistics>),
    /// Job fetch finished; empty on failure
    JobsFetched(Vec<Job>),
    /// Health probe finished
    HealthChecked(bool),
}
