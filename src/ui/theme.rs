//! Color theme constants for the job dashboard.

use ratatui::style::Color;

use crate::models::{JobStatus, Priority};

// ============================================================================
// Base Palette
// ============================================================================

/// Border color for panels
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Titles and highlighted values
pub const COLOR_ACCENT: Color = Color::White;

pub const COLOR_HEADER: Color = Color::Cyan;

/// Secondary text (labels, hints)
pub const COLOR_DIM: Color = Color::DarkGray;

pub const COLOR_SUCCESS: Color = Color::Green;

pub const COLOR_ERROR: Color = Color::Red;

/// Background of the selected job row
pub const COLOR_SELECTED_BG: Color = Color::Rgb(30, 40, 60);

// ============================================================================
// Status / Priority Colors
// ============================================================================

/// Badge color for a job status wire value. Unknown values render neutral.
pub fn status_color(status: &str) -> Color {
    match status.parse::<JobStatus>() {
        Ok(JobStatus::Wishlist) => Color::Blue,
        Ok(JobStatus::Applied) => Color::Cyan,
        Ok(JobStatus::Interview) => Color::Magenta,
        Ok(JobStatus::Offer) => Color::LightGreen,
        Ok(JobStatus::Rejected) | Ok(JobStatus::Discarded) => Color::Red,
        Ok(JobStatus::Active) => Color::Green,
        Ok(JobStatus::Alpha) | Ok(JobStatus::Primary) => Color::Yellow,
        Ok(JobStatus::Idea) | Ok(JobStatus::Potential) => Color::Gray,
        Err(_) => Color::Gray,
    }
}

/// Color for a priority wire value.
pub fn priority_color(priority: &str) -> Color {
    match priority.parse::<Priority>() {
        Ok(Priority::High) => Color::Red,
        Ok(Priority::Medium) => Color::Yellow,
        Ok(Priority::Low) => Color::Green,
        Err(_) => Color::Gray,
    }
}
