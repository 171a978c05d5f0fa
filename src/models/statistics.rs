//! Aggregate counts returned by `GET /stats`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Counts keyed by the wire value of an enumeration (`"APPLIED"`, `"HIGH"`).
pub type Counts = BTreeMap<String, u64>;

/// Job statistics computed by the backend.
///
/// Missing keys default to zero / empty so a partial body still parses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    #[serde(default)]
    pub total_jobs: u64,
    #[serde(default)]
    pub status_counts: Counts,
    #[serde(default)]
    pub priority_counts: Counts,
}

impl Statistics {
    pub fn new(total_jobs: u64, status_counts: Counts, priority_counts: Counts) -> Self {
        Self {
            total_jobs,
            status_counts,
            priority_counts,
        }
    }

    /// Count for a status key, zero when absent.
    pub fn status_count(&self, status: &str) -> u64 {
        self.status_counts.get(status).copied().unwrap_or(0)
    }

    /// Count for a priority key, zero when absent.
    pub fn priority_count(&self, priority: &str) -> u64 {
        self.priority_counts.get(priority).copied().unwrap_or(0)
    }
}
