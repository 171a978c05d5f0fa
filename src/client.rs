//! Job API client for backend communication.
//!
//! Wraps the two read endpoints of the job service (`/stats` and `/jobs`).
//! Every failure is absorbed: callers get `None` or an empty list and the
//! cause ends up in the log.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::adapters::ReqwestHttpClient;
use crate::config::{join_url, Config};
use crate::error::{ApiError, ApiResult};
use crate::models::{Job, Statistics};
use crate::traits::{HttpClient, Request};

/// Fixed timeout for the health probe, independent of the data timeout.
pub const HEALTH_CHECK_TIMEOUT: Duration = Duration::from_secs(2);

const STATS_PATH: &str = "stats";
const JOBS_PATH: &str = "jobs";

/// Client for the job-organizer API.
#[derive(Clone)]
pub struct JobApiClient {
    /// Base URL, e.g. `http://localhost:8000/api`
    base_url: String,
    /// Timeout applied to stats and jobs fetches
    timeout: Duration,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for JobApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JobApiClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl JobApiClient {
    /// Create a client backed by reqwest using the configured URL and timeout.
    pub fn new(config: &Config) -> Self {
        Self::with_http(
            config.api_base_url.clone(),
            config.api_timeout,
            Arc::new(ReqwestHttpClient::new()),
        )
    }

    /// Create a client with an injected HTTP implementation.
    pub fn with_http(
        base_url: impl Into<String>,
        timeout: Duration,
        http: Arc<dyn HttpClient>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            timeout,
            http,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Join the base URL and `path` with exactly one slash.
    pub fn endpoint_url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    // ========================================================================
    // Public operations (failures flattened)
    // ========================================================================

    /// Fetch dashboard statistics, or `None` on any failure.
    pub async fn fetch_statistics(&self) -> Option<Statistics> {
        match self.try_fetch_statistics().await {
            Ok(stats) => Some(stats),
            Err(e) => {
                tracing::error!(code = e.code(), url = e.url(), "Error fetching statistics: {}", e);
                None
            }
        }
    }

    /// Fetch jobs, optionally filtered. Empty filters are not sent.
    ///
    /// Returns an empty list on any failure.
    pub async fn fetch_jobs(&self, status: Option<&str>, priority: Option<&str>) -> Vec<Job> {
        match self.try_fetch_jobs(status, priority).await {
            Ok(jobs) => jobs,
            Err(e) => {
                tracing::error!(code = e.code(), url = e.url(), "Error fetching jobs: {}", e);
                Vec::new()
            }
        }
    }

    /// Probe `/stats` with a 2 second timeout. True only for HTTP 200.
    pub async fn health_check(&self) -> bool {
        let url = self.endpoint_url(STATS_PATH);
        let request = Request::get(url.as_str()).with_timeout(HEALTH_CHECK_TIMEOUT);

        match self.http.get(&request).await {
            Ok(response) if response.status == 200 => {
                tracing::debug!(url = %url, "Health check passed");
                true
            }
            Ok(response) => {
                tracing::warn!(url = %url, status = response.status, "Health check returned non-200");
                false
            }
            Err(e) => {
                tracing::warn!(url = %url, "Health check failed: {}", e);
                false
            }
        }
    }

    // ========================================================================
    // Internal boundary (explicit errors)
    // ========================================================================

    /// Fetch statistics, reporting why no data came back.
    pub async fn try_fetch_statistics(&self) -> ApiResult<Statistics> {
        let request = Request::get(self.endpoint_url(STATS_PATH)).with_timeout(self.timeout);
        tracing::debug!(url = %request.url, "Fetching statistics");

        let stats: Statistics = self.get_json(&request).await?;
        tracing::info!(total_jobs = stats.total_jobs, "Fetched statistics");
        Ok(stats)
    }

    /// Fetch jobs, reporting why no data came back.
    pub async fn try_fetch_jobs(
        &self,
        status: Option<&str>,
        priority: Option<&str>,
    ) -> ApiResult<Vec<Job>> {
        let mut request = Request::get(self.endpoint_url(JOBS_PATH)).with_timeout(self.timeout);
        if let Some(status) = status.filter(|s| !s.is_empty()) {
            request = request.with_query("status", status);
        }
        if let Some(priority) = priority.filter(|p| !p.is_empty()) {
            request = request.with_query("priority", priority);
        }
        tracing::debug!(url = %request.full_url(), "Fetching jobs");

        let jobs: Vec<Job> = self.get_json(&request).await?;
        tracing::info!(count = jobs.len(), "Fetched jobs");
        Ok(jobs)
    }

    async fn get_json<T: DeserializeOwned>(&self, request: &Request) -> ApiResult<T> {
        let response = self
            .http
            .get(request)
            .await
            .map_err(|e| ApiError::from_http(e, &request.url))?;

        if response.status != 200 {
            return Err(ApiError::HttpStatus {
                url: request.url.clone(),
                status: response.status,
            });
        }

        response
            .json()
            .map_err(|e| ApiError::invalid_response(e, &request.url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{MockHttpClient, MockResponse};
    use crate::traits::HttpError;
    use serde_json::json;

    const BASE: &str = "http://api.test/api";

    fn client_with(mock: &MockHttpClient) -> JobApiClient {
        JobApiClient::with_http(BASE, Duration::from_secs(5), Arc::new(mock.clone()))
    }

    fn job_json(id: i64, status: &str, priority: &str) -> serde_json::Value {
        json!({
            "id": id,
            "title": format!("Job {}", id),
            "company": "Acme",
            "location": "Remote",
            "status": status,
            "priority": priority,
            "type": "FULL_TIME",
        })
    }

    #[test]
    fn test_endpoint_url_single_slash() {
        let mock = MockHttpClient::new();
        let client = JobApiClient::with_http(
            "http://api.test/api/",
            Duration::from_secs(1),
            Arc::new(mock),
        );
        assert_eq!(client.endpoint_url("/stats"), "http://api.test/api/stats");
        assert_eq!(client.endpoint_url("jobs"), "http://api.test/api/jobs");
    }

    #[test]
    fn test_new_from_config() {
        let config = Config::default()
            .with_base_url("http://localhost:9000/api")
            .with_timeout(Duration::from_secs(3));
        let client = JobApiClient::new(&config);
        assert_eq!(client.base_url(), "http://localhost:9000/api");
        assert_eq!(client.timeout(), Duration::from_secs(3));
    }

    #[tokio::test]
    async fn test_fetch_statistics_success() {
        let mock = MockHttpClient::new();
        mock.set_response(
            "http://api.test/api/stats",
            MockResponse::json(
                200,
                &json!({
                    "total_jobs": 3,
                    "status_counts": {"APPLIED": 2, "WISHLIST": 1},
                    "priority_counts": {"HIGH": 1}
                }),
            ),
        );

        let stats = client_with(&mock).fetch_statistics().await.unwrap();
        assert_eq!(stats.total_jobs, 3);
        assert_eq!(stats.status_count("APPLIED"), 2);
        assert_eq!(stats.priority_count("HIGH"), 1);

        let request = mock.last_request().unwrap();
        assert_eq!(request.timeout, Some(Duration::from_secs(5)));
        assert!(request.query.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_statistics_failures_are_none() {
        let mock = MockHttpClient::new();
        let client = client_with(&mock);

        mock.set_response("http://api.test/api/stats", MockResponse::text(500, "boom"));
        assert!(client.fetch_statistics().await.is_none());

        mock.set_response("http://api.test/api/stats", MockResponse::text(200, "not json"));
        assert!(client.fetch_statistics().await.is_none());

        mock.set_response(
            "http://api.test/api/stats",
            MockResponse::Error(HttpError::ConnectionFailed("refused".into())),
        );
        assert!(client.fetch_statistics().await.is_none());
    }

    #[tokio::test]
    async fn test_try_fetch_statistics_reports_cause() {
        let mock = MockHttpClient::new();
        let client = client_with(&mock);

        mock.set_response("http://api.test/api/stats", MockResponse::text(404, ""));
        let err = client.try_fetch_statistics().await.unwrap_err();
        assert_eq!(
            err,
            ApiError::HttpStatus {
                url: "http://api.test/api/stats".to_string(),
                status: 404
            }
        );

        mock.set_response(
            "http://api.test/api/stats",
            MockResponse::Error(HttpError::Timeout("elapsed".into())),
        );
        let err = client.try_fetch_statistics().await.unwrap_err();
        assert_eq!(err.code(), "E_API_TIMEOUT");

        mock.set_response("http://api.test/api/stats", MockResponse::text(200, "[1,2]"));
        let err = client.try_fetch_statistics().await.unwrap_err();
        assert_eq!(err.code(), "E_API_INVALID");
    }

    #[tokio::test]
    async fn test_fetch_jobs_without_filters_sends_no_query() {
        let mock = MockHttpClient::new();
        mock.set_response(
            "http://api.test/api/jobs",
            MockResponse::json(200, &json!([job_json(1, "APPLIED", "HIGH"), job_json(2, "WISHLIST", "LOW")])),
        );
        let client = client_with(&mock);

        let jobs = client.fetch_jobs(None, None).await;
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].id, 1);
        assert_eq!(jobs[1].id, 2);
        assert!(mock.last_request().unwrap().query.is_empty());

        // Empty strings count as "no filter"
        client.fetch_jobs(Some(""), Some("")).await;
        assert!(mock.last_request().unwrap().query.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_jobs_sends_filters() {
        let mock = MockHttpClient::new();
        mock.set_response(
            "http://api.test/api/jobs",
            MockResponse::json(200, &json!([job_json(7, "APPLIED", "HIGH")])),
        );
        let client = client_with(&mock);

        let jobs = client.fetch_jobs(Some("APPLIED"), Some("HIGH")).await;
        assert_eq!(jobs.len(), 1);

        let request = mock.last_request().unwrap();
        assert_eq!(request.query_value("status"), Some("APPLIED"));
        assert_eq!(request.query_value("priority"), Some("HIGH"));

        client.fetch_jobs(None, Some("LOW")).await;
        let request = mock.last_request().unwrap();
        assert_eq!(request.query_value("status"), None);
        assert_eq!(request.query_value("priority"), Some("LOW"));
    }

    #[tokio::test]
    async fn test_fetch_jobs_failures_are_empty() {
        let mock = MockHttpClient::new();
        let client = client_with(&mock);

        // No mock configured -> connection failure
        assert!(client.fetch_jobs(None, None).await.is_empty());

        mock.set_response("http://api.test/api/jobs", MockResponse::text(503, ""));
        assert!(client.fetch_jobs(None, None).await.is_empty());

        mock.set_response("http://api.test/api/jobs", MockResponse::json(200, &json!({"jobs": []})));
        assert!(client.fetch_jobs(None, None).await.is_empty());
    }

    #[tokio::test]
    async fn test_health_check() {
        let mock = MockHttpClient::new();
        let client = client_with(&mock);

        mock.set_response("http://api.test/api/stats", MockResponse::text(200, "{}"));
        assert!(client.health_check().await);
        assert_eq!(mock.last_request().unwrap().timeout, Some(HEALTH_CHECK_TIMEOUT));

        mock.set_response("http://api.test/api/stats", MockResponse::text(204, ""));
        assert!(!client.health_check().await);

        mock.set_response(
            "http://api.test/api/stats",
            MockResponse::Error(HttpError::ConnectionFailed("refused".into())),
        );
        assert!(!client.health_check().await);
    }
}
