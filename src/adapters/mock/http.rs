//! Mock HTTP client for testing.
//!
//! Provides a configurable mock HTTP client that returns predefined
//! responses or errors and records every request it sees.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::traits::{HttpClient, HttpError, Request, Response};

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a response (any status)
    Success(Response),
    /// Return a transport error
    Error(HttpError),
}

impl MockResponse {
    /// Shorthand for a response with a JSON body.
    pub fn json(status: u16, body: &serde_json::Value) -> Self {
        MockResponse::Success(Response::new(status, body.to_string()))
    }

    /// Shorthand for a response with a raw text body.
    pub fn text(status: u16, body: &str) -> Self {
        MockResponse::Success(Response::new(status, body.to_string()))
    }
}

/// Mock HTTP client for testing.
///
/// Responses are matched on the request URL without its query string: an
/// exact match wins, then the longest configured prefix, then the default.
/// Clones share configuration and recorded requests.
///
/// # Example
///
/// ```ignore
/// use job_organizer::adapters::mock::{MockHttpClient, MockResponse};
///
/// let client = MockHttpClient::new();
/// client.set_response("http://api/stats", MockResponse::json(200, &json!({"total_jobs": 1})));
///
/// let response = client.get(&Request::get("http://api/stats")).await?;
/// assert_eq!(response.status, 200);
/// assert_eq!(client.get_requests().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    /// Configured responses by URL
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    /// Default response when no specific match
    default_response: Arc<Mutex<Option<MockResponse>>>,
    /// Recorded requests for verification
    requests: Arc<Mutex<Vec<Request>>>,
}

impl MockHttpClient {
    /// Create a new mock HTTP client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a response for a URL (query string excluded).
    pub fn set_response(&self, url: &str, response: MockResponse) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(url.to_string(), response);
    }

    /// Set a default response for URLs without specific matches.
    pub fn set_default_response(&self, response: MockResponse) {
        let mut default = self.default_response.lock().unwrap();
        *default = Some(response);
    }

    /// Get all recorded requests.
    pub fn get_requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }

    /// The most recent request, if any.
    pub fn last_request(&self) -> Option<Request> {
        self.requests.lock().unwrap().last().cloned()
    }

    /// Clear all recorded requests.
    pub fn clear_requests(&self) {
        self.requests.lock().unwrap().clear();
    }

    /// Clear all configured responses.
    pub fn clear_responses(&self) {
        self.responses.lock().unwrap().clear();
    }

    fn get_response(&self, url: &str) -> Option<MockResponse> {
        let responses = self.responses.lock().unwrap();

        if let Some(response) = responses.get(url) {
            return Some(response.clone());
        }

        let prefix_match = responses
            .iter()
            .filter(|(pattern, _)| url.starts_with(pattern.as_str()))
            .max_by_key(|(pattern, _)| pattern.len())
            .map(|(_, response)| response.clone());
        if prefix_match.is_some() {
            return prefix_match;
        }

        self.default_response.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, request: &Request) -> Result<Response, HttpError> {
        self.requests.lock().unwrap().push(request.clone());

        match self.get_response(&request.url) {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::ConnectionFailed(format!(
                "No mock response for URL: {}",
                request.url
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_exact_match() {
        let client = MockHttpClient::new();
        client.set_response("http://api/stats", MockResponse::text(200, "ok"));

        let response = client.get(&Request::get("http://api/stats")).await.unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.text().unwrap(), "ok");
    }

    #[tokio::test]
    async fn test_query_does_not_affect_matching() {
        let client = MockHttpClient::new();
        client.set_response("http://api/jobs", MockResponse::text(200, "[]"));

        let request = Request::get("http://api/jobs").with_query("status", "APPLIED");
        let response = client.get(&request).await.unwrap();
        assert_eq!(response.status, 200);

        let recorded = client.last_request().unwrap();
        assert_eq!(recorded.query_value("status"), Some("APPLIED"));
    }

    #[tokio::test]
    async fn test_longest_prefix_wins() {
        let client = MockHttpClient::new();
        client.set_response("http://api", MockResponse::text(500, "short"));
        client.set_response("http://api/jobs", MockResponse::text(200, "long"));

        let response = client
            .get(&Request::get("http://api/jobs/extra"))
            .await
            .unwrap();
        assert_eq!(response.text().unwrap(), "long");
    }

    #[tokio::test]
    async fn test_default_and_unconfigured() {
        let client = MockHttpClient::new();
        let err = client.get(&Request::get("http://api/stats")).await.unwrap_err();
        assert!(matches!(err, HttpError::ConnectionFailed(_)));

        client.set_default_response(MockResponse::Error(HttpError::Timeout("2s".to_string())));
        let err = client.get(&Request::get("http://api/stats")).await.unwrap_err();
        assert!(matches!(err, HttpError::Timeout(_)));
    }

    #[tokio::test]
    async fn test_requests_are_recorded_and_shared_by_clones() {
        let client = MockHttpClient::new();
        let clone = client.clone();
        client.set_default_response(MockResponse::text(200, ""));

        let _ = clone.get(&Request::get("http://api/a")).await;
        let _ = client.get(&Request::get("http://api/b")).await;

        let urls: Vec<String> = client.get_requests().into_iter().map(|r| r.url).collect();
        assert_eq!(urls, vec!["http://api/a", "http://api/b"]);

        client.clear_requests();
        assert!(clone.get_requests().is_empty());
    }
}
