//! Common test utilities for integration tests.
//!
//! Fixtures for API payloads and helpers that point a [`JobApiClient`] at a
//! wiremock server.

#![allow(dead_code)]

use job_organizer::client::JobApiClient;
use job_organizer::config::Config;
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::MockServer;

/// Base URL of the API as served by `server` (`{uri}/api`).
pub fn api_base(server: &MockServer) -> String {
    format!("{}/api", server.uri())
}

/// A reqwest-backed client for `server` with a short timeout.
pub fn client_for(server: &MockServer) -> JobApiClient {
    let config = Config::default()
        .with_base_url(api_base(server))
        .with_timeout(Duration::from_millis(500));
    JobApiClient::new(&config)
}

/// A job payload as the backend sends it.
pub fn job_json(id: i64, title: &str, status: &str, priority: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "company": "Acme",
        "location": "Remote",
        "status": status,
        "priority": priority,
        "type": "FULL_TIME",
        "contact_website": null,
        "description": "Build things",
        "score": 3,
        "technologies": ["Rust", "Tokio"],
        "requirements": null,
        "benefits": [],
        "responses": [],
        "comments": null,
        "situation": null,
        "date_added": "2024-03-01T10:00:00",
        "date_modified": null
    })
}

/// A stats payload.
pub fn stats_json(total: u64, status: Value, priority: Value) -> Value {
    json!({
        "total_jobs": total,
        "status_counts": status,
        "priority_counts": priority,
    })
}
