//! Prelude module for convenient imports.
//!
//! ```ignore
//! use job_organizer::prelude::*;
//! ```

pub use crate::app::{App, AppMessage};
pub use crate::client::JobApiClient;
pub use crate::config::Config;
pub use crate::error::{ApiError, ApiResult};
pub use crate::models::{Job, JobStatus, JobType, Priority, Statistics};
pub use crate::state::AppState;
