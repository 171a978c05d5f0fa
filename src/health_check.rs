//! API health probe used by `--check`.

use std::io::{self, Write};
use std::time::Instant;

use crate::client::JobApiClient;

/// Result of probing the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthCheckResult {
    /// The `/stats` URL that was probed
    pub api_url: String,
    pub api_healthy: bool,
    pub response_time_ms: Option<u64>,
    /// Job count reported by the API, when reachable
    pub total_jobs: Option<u64>,
}

/// Probe the API, and when it answers, read the job total.
pub async fn run_health_check(client: &JobApiClient) -> HealthCheckResult {
    let api_url = client.endpoint_url("stats");
    let start = Instant::now();
    let api_healthy = client.health_check().await;
    let elapsed = start.elapsed().as_millis() as u64;

    if !api_healthy {
        return HealthCheckResult {
            api_url,
            api_healthy,
            response_time_ms: None,
            total_jobs: None,
        };
    }

    let total_jobs = client.fetch_statistics().await.map(|s| s.total_jobs);
    HealthCheckResult {
        api_url,
        api_healthy,
        response_time_ms: Some(elapsed),
        total_jobs,
    }
}

/// Write a human-readable report.
pub fn write_health_check_results<W: Write>(out: &mut W, result: &HealthCheckResult) -> io::Result<()> {
    writeln!(out)?;

    if !result.api_healthy {
        writeln!(out, "✗ API not responding at {}", result.api_url)?;
        writeln!(out, "  Cannot connect to backend. Is it running?")?;
        return writeln!(out);
    }

    match result.response_time_ms {
        Some(ms) => writeln!(out, "✓ API responding at {} ({}ms)", result.api_url, ms)?,
        None => writeln!(out, "✓ API healthy at {}", result.api_url)?,
    }
    if let Some(total) = result.total_jobs {
        writeln!(out, "✓ {} jobs tracked", total)?;
    }
    writeln!(out)
}

/// Print the report to stdout.
pub fn display_health_check_results(result: &HealthCheckResult) {
    let _ = write_health_check_results(&mut io::stdout(), result);
}
