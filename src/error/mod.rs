//! Error types for the job-organizer client.
//!
//! [`ApiError`] is the failure half of the API client's internal
//! `Result`s. The public client operations log it and flatten it to
//! "no data", so it never reaches the UI as an error value.

mod api;

pub use api::{ApiError, ApiResult};
