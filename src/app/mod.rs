//! Application shell for the TUI.
//!
//! [`App`] is the composition root: it owns the [`AppState`], the shared
//! [`JobApiClient`] and the message channel that spawned tasks report back
//! on. Only the event loop mutates it, one key or message at a time.
//!
//! - [`AppMessage`] - results sent back by background tasks
//! - [`FilterKind`], [`CycleDirection`] - filter cycling

mod actions;
mod handlers;
mod messages;
mod navigation;
mod types;

pub use messages::AppMessage;
pub use types::{CycleDirection, FilterKind};

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::client::JobApiClient;
use crate::config::Config;
use crate::state::AppState;

/// Main application state
pub struct App {
    /// Data and filter state shown by the views
    pub state: AppState,
    /// API client shared with spawned tasks
    pub client: Arc<JobApiClient>,
    /// Receiver for task results; taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender cloned into each spawned task
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Selected row in the job list
    pub selected: usize,
    /// Spawned tasks whose result has not arrived yet
    pub pending_requests: usize,
    pub should_quit: bool,
    /// Set when the next loop iteration must redraw
    pub needs_redraw: bool,
    /// Tick counter for the loading spinner
    pub tick_count: u64,
}

impl App {
    /// Create an app talking to the API described by `config`.
    pub fn new(config: &Config) -> Self {
        Self::with_client(Arc::new(JobApiClient::new(config)))
    }

    /// Create an app around an existing client.
    pub fn with_client(client: Arc<JobApiClient>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(),
            client,
            message_rx: Some(message_rx),
            message_tx,
            selected: 0,
            pending_requests: 0,
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Advance the tick counter; redraws only while requests are in flight.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.is_loading() {
            self.mark_dirty();
        }
    }

    pub fn is_loading(&self) -> bool {
        self.pending_requests > 0
    }
}
