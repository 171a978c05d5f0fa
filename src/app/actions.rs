//! Background task spawning and user actions.
//!
//! Each action spawns one tokio task that calls the API client and sends its
//! result back over the message channel. Tasks are never cancelled; when two
//! fetches of the same kind overlap, whichever result arrives last is shown.

use std::sync::Arc;

use tracing::{debug, info};

use super::types::{CycleDirection, FilterKind};
use super::{App, AppMessage};
use crate::state::{cycle_option, PRIORITY_FILTER_OPTIONS, STATUS_FILTER_OPTIONS};

impl App {
    // ========================================================================
    // Spawned fetches
    // ========================================================================

    /// Fetch statistics in the background.
    pub fn spawn_fetch_stats(&mut self) {
        let client = Arc::clone(&self.client);
        let tx = self.message_tx.clone();
        self.pending_requests += 1;

        tokio::spawn(async move {
            let stats = client.fetch_statistics().await;
            let _ = tx.send(AppMessage::StatsFetched(stats));
        });
    }

    /// Fetch jobs with the filters as they are right now.
    pub fn spawn_fetch_jobs(&mut self) {
        let client = Arc::clone(&self.client);
        let tx = self.message_tx.clone();
        let status = self.state.status_filter().map(str::to_string);
        let priority = self.state.priority_filter().map(str::to_string);
        self.pending_requests += 1;

        debug!(?status, ?priority, "Spawning job fetch");
        tokio::spawn(async move {
            let jobs = client
                .fetch_jobs(status.as_deref(), priority.as_deref())
                .await;
            let _ = tx.send(AppMessage::JobsFetched(jobs));
        });
    }

    /// Probe the API in the background.
    pub fn spawn_health_check(&mut self) {
        let client = Arc::clone(&self.client);
        let tx = self.message_tx.clone();
        self.pending_requests += 1;

        tokio::spawn(async move {
            let healthy = client.health_check().await;
            let _ = tx.send(AppMessage::HealthChecked(healthy));
        });
    }

    // ========================================================================
    // User actions
    // ========================================================================

    /// Startup: probe the API and load the dashboard.
    pub fn start(&mut self) {
        info!(base_url = self.client.base_url(), "Starting dashboard");
        self.spawn_health_check();
        self.spawn_fetch_stats();
    }

    /// "Refresh stats"
    pub fn refresh_stats(&mut self) {
        self.spawn_fetch_stats();
    }

    /// "Load all jobs": drop the filters, then fetch.
    pub fn load_all_jobs(&mut self) {
        self.state.clear_filters();
        self.spawn_fetch_jobs();
    }

    /// "Apply filters": fetch with the current selection.
    pub fn apply_filters(&mut self) {
        self.spawn_fetch_jobs();
    }

    /// "Clear": same effect as loading all jobs.
    pub fn clear_filters_and_reload(&mut self) {
        self.state.clear_filters();
        self.spawn_fetch_jobs();
    }

    /// Step a filter to its next (or previous) option without fetching.
    pub fn cycle_filter(&mut self, kind: FilterKind, direction: CycleDirection) {
        let forward = direction.is_forward();
        match kind {
            FilterKind::Status => {
                let next = cycle_option(&STATUS_FILTER_OPTIONS, &self.state.filter_status, forward);
                self.state.set_status_filter(next);
            }
            FilterKind::Priority => {
                let next =
                    cycle_option(&PRIORITY_FILTER_OPTIONS, &self.state.filter_priority, forward);
                self.state.set_priority_filter(next);
            }
        }
        self.mark_dirty();
    }
}
