//! Job Organizer - a terminal dashboard for a job-application tracking API
//!
//! This library exposes modules for use in integration tests and benchmarks.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod health_check;
pub mod logging;
pub mod models;
pub mod prelude;
pub mod state;
pub mod terminal;
pub mod traits;
pub mod ui;
