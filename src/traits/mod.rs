//! Trait abstractions for dependency injection and testability.
//!
//! - [`HttpClient`] - HTTP GET with query parameters and a per-request timeout

pub mod http;

pub use http::{HttpClient, HttpError, Request, Response};
