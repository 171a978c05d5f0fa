//! Mock implementations for testing.
//!
//! Enables unit and integration testing of the API client and application
//! state without network access.

pub mod http;

pub use http::{MockHttpClient, MockResponse};
