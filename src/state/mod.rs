//! Application state
//!
//! [`AppState`] holds everything the views read: the latest statistics, the
//! latest job list, the filter selection and the connection indicator. Fetched
//! collections are replaced wholesale, never merged.

pub mod filters;

pub use filters::{
    cycle_option, filter_label, normalize_filter, FILTER_ALL, PRIORITY_FILTER_OPTIONS,
    STATUS_FILTER_OPTIONS,
};

use tracing::{debug, info, warn};

use crate::client::JobApiClient;
use crate::models::{Counts, Job, Statistics};

pub const API_STATUS_INITIAL: &str = "Not connected";
pub const API_STATUS_CONNECTED: &str = "Connected ✅";
pub const API_STATUS_FAILED: &str = "Connection failed ❌";
pub const API_ERROR_UNREACHABLE: &str = "Cannot connect to backend. Is it running?";

/// UI state aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub total_jobs: u64,
    pub status_counts: Counts,
    pub priority_counts: Counts,
    /// Latest job list, in server order
    pub jobs: Vec<Job>,
    /// Whether any job fetch has completed
    pub jobs_loaded: bool,
    /// Empty string means "no filter"
    pub filter_status: String,
    /// Empty string means "no filter"
    pub filter_priority: String,
    pub api_status: String,
    pub api_error: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            total_jobs: 0,
            status_counts: Counts::new(),
            priority_counts: Counts::new(),
            jobs: Vec::new(),
            jobs_loaded: false,
            filter_status: String::new(),
            filter_priority: String::new(),
            api_status: API_STATUS_INITIAL.to_string(),
            api_error: String::new(),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Fetch operations
    // ========================================================================

    /// Load statistics from the API and update the connection indicator.
    pub async fn fetch_stats(&mut self, client: &JobApiClient) {
        let stats = client.fetch_statistics().await;
        self.apply_statistics(stats);
    }

    /// Load jobs matching the current filters.
    pub async fn fetch_jobs(&mut self, client: &JobApiClient) {
        let jobs = client
            .fetch_jobs(self.status_filter(), self.priority_filter())
            .await;
        self.apply_jobs(jobs);
    }

    /// Apply a statistics fetch result.
    ///
    /// On `None` the previous statistics stay and the failure is shown.
    pub fn apply_statistics(&mut self, stats: Option<Statistics>) {
        match stats {
            Some(stats) => {
                info!(total_jobs = stats.total_jobs, "Statistics updated");
                self.total_jobs = stats.total_jobs;
                self.status_counts = stats.status_counts;
                self.priority_counts = stats.priority_counts;
                self.mark_connected();
            }
            None => {
                warn!("Statistics unavailable, keeping previous values");
                self.mark_failed();
            }
        }
    }

    /// Replace the job list with a fetch result.
    pub fn apply_jobs(&mut self, jobs: Vec<Job>) {
        debug!(count = jobs.len(), "Job list replaced");
        self.jobs = jobs;
        self.jobs_loaded = true;
    }

    /// Apply a startup probe result.
    ///
    /// Only seeds the indicator while no statistics result has arrived yet;
    /// once a stats fetch has reported, its outcome owns the indicator.
    pub fn apply_health_check(&mut self, healthy: bool) {
        if self.api_status != API_STATUS_INITIAL {
            debug!(healthy, api_status = %self.api_status, "Ignoring late health check");
            return;
        }
        if healthy {
            self.mark_connected();
        } else {
            self.mark_failed();
        }
    }

    pub fn mark_connected(&mut self) {
        self.api_status = API_STATUS_CONNECTED.to_string();
        self.api_error.clear();
    }

    pub fn mark_failed(&mut self) {
        self.api_status = API_STATUS_FAILED.to_string();
        self.api_error = API_ERROR_UNREACHABLE.to_string();
    }

    // ========================================================================
    // Filters
    // ========================================================================

    /// Set the status filter; `"ALL"` clears it. Values are not validated.
    pub fn set_status_filter(&mut self, value: &str) {
        self.filter_status = normalize_filter(value);
    }

    /// Set the priority filter; `"ALL"` clears it. Values are not validated.
    pub fn set_priority_filter(&mut self, value: &str) {
        self.filter_priority = normalize_filter(value);
    }

    pub fn clear_filters(&mut self) {
        self.filter_status.clear();
        self.filter_priority.clear();
    }

    /// Active status filter, if any.
    pub fn status_filter(&self) -> Option<&str> {
        Some(self.filter_status.as_str()).filter(|s| !s.is_empty())
    }

    /// Active priority filter, if any.
    pub fn priority_filter(&self) -> Option<&str> {
        Some(self.filter_priority.as_str()).filter(|s| !s.is_empty())
    }

    // ========================================================================
    // Read helpers
    // ========================================================================

    /// Count for a status key; missing keys count as 0.
    pub fn status_count(&self, status: &str) -> u64 {
        self.status_counts.get(status).copied().unwrap_or(0)
    }

    /// Count for a priority key; missing keys count as 0.
    pub fn priority_count(&self, priority: &str) -> u64 {
        self.priority_counts.get(priority).copied().unwrap_or(0)
    }

    pub fn is_connected(&self) -> bool {
        self.api_status == API_STATUS_CONNECTED
    }
}
