//! Domain models for the job-organizer API.
//!
//! - [`Job`] - a single job application record
//! - [`Statistics`] - aggregate counts computed by the backend
//! - [`JobStatus`], [`Priority`], [`JobType`] - typed views of the wire enums

pub mod job;
pub mod kinds;
pub mod statistics;

pub use job::{Job, JobRecord};
pub use kinds::{JobStatus, JobType, Priority, UnknownKind};
pub use statistics::{Counts, Statistics};
