//! Enumerations used by job records.
//!
//! The API speaks in upper-case wire strings (`"APPLIED"`, `"FULL_TIME"`).
//! Job records keep those strings verbatim; these enums are typed views used
//! for labels, colours and the filter pickers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error returned when a wire string does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKind {
    /// Name of the enumeration that failed to parse
    pub kind: &'static str,
    /// The rejected value
    pub value: String,
}

impl fmt::Display for UnknownKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} '{}'", self.kind, self.value)
    }
}

impl std::error::Error for UnknownKind {}

// ============================================================================
// Job Status
// ============================================================================

/// Where an application currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Wishlist,
    Applied,
    Interview,
    Offer,
    Rejected,
    Discarded,
    Active,
    Alpha,
    Primary,
    Idea,
    Potential,
}

impl JobStatus {
    /// All statuses in declaration order.
    pub const ALL: [JobStatus; 11] = [
        JobStatus::Wishlist,
        JobStatus::Applied,
        JobStatus::Interview,
        JobStatus::Offer,
        JobStatus::Rejected,
        JobStatus::Discarded,
        JobStatus::Active,
        JobStatus::Alpha,
        JobStatus::Primary,
        JobStatus::Idea,
        JobStatus::Potential,
    ];

    /// Wire representation, as sent and received by the API.
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Wishlist => "WISHLIST",
            JobStatus::Applied => "APPLIED",
            JobStatus::Interview => "INTERVIEW",
            JobStatus::Offer => "OFFER",
            JobStatus::Rejected => "REJECTED",
            JobStatus::Discarded => "DISCARDED",
            JobStatus::Active => "ACTIVE",
            JobStatus::Alpha => "ALPHA",
            JobStatus::Primary => "PRIMARY",
            JobStatus::Idea => "IDEA",
            JobStatus::Potential => "POTENTIAL",
        }
    }

    /// Human-readable label for the dashboard.
    pub fn label(&self) -> &'static str {
        match self {
            JobStatus::Wishlist => "Wishlist",
            JobStatus::Applied => "Applied",
            JobStatus::Interview => "Interview",
            JobStatus::Offer => "Offer",
            JobStatus::Rejected => "Rejected",
            JobStatus::Discarded => "Discarded",
            JobStatus::Active => "Active",
            JobStatus::Alpha => "Alpha",
            JobStatus::Primary => "Primary",
            JobStatus::Idea => "Idea",
            JobStatus::Potential => "Potential",
        }
    }

    /// Whether the application is closed (no further action expected).
    pub fn is_closed(&self) -> bool {
        matches!(self, JobStatus::Rejected | JobStatus::Discarded)
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobStatus {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JobStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownKind {
                kind: "job status",
                value: s.to_string(),
            })
    }
}

// ============================================================================
// Priority
// ============================================================================

/// How much attention an application deserves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// All priorities, highest first.
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Priority::ALL
            .into_iter()
            .find(|priority| priority.as_str() == s)
            .ok_or_else(|| UnknownKind {
                kind: "priority",
                value: s.to_string(),
            })
    }
}

// ============================================================================
// Job Type
// ============================================================================

/// Kind of engagement on offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    Internship,
    Freelance,
    OpenSource,
    Proposal,
}

impl JobType {
    pub const ALL: [JobType; 7] = [
        JobType::FullTime,
        JobType::PartTime,
        JobType::Contract,
        JobType::Internship,
        JobType::Freelance,
        JobType::OpenSource,
        JobType::Proposal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::FullTime => "FULL_TIME",
            JobType::PartTime => "PART_TIME",
            JobType::Contract => "CONTRACT",
            JobType::Internship => "INTERNSHIP",
            JobType::Freelance => "FREELANCE",
            JobType::OpenSource => "OPEN_SOURCE",
            JobType::Proposal => "PROPOSAL",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            JobType::FullTime => "Full time",
            JobType::PartTime => "Part time",
            JobType::Contract => "Contract",
            JobType::Internship => "Internship",
            JobType::Freelance => "Freelance",
            JobType::OpenSource => "Open source",
            JobType::Proposal => "Proposal",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobType {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JobType::ALL
            .into_iter()
            .find(|job_type| job_type.as_str() == s)
            .ok_or_else(|| UnknownKind {
                kind: "job type",
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse_matches_as_str() {
        for status in JobStatus::ALL {
            assert_eq!(status.as_str().parse::<JobStatus>(), Ok(status));
        }
    }

    #[test]
    fn test_status_parse_is_case_sensitive() {
        let err = "applied".parse::<JobStatus>().unwrap_err();
        assert_eq!(err.value, "applied");
        assert_eq!(err.to_string(), "unknown job status 'applied'");
    }

    #[test]
    fn test_status_serde_uses_wire_names() {
        let json = serde_json::to_string(&JobStatus::Wishlist).unwrap();
        assert_eq!(json, "\"WISHLIST\"");

        let parsed: JobStatus = serde_json::from_str("\"POTENTIAL\"").unwrap();
        assert_eq!(parsed, JobStatus::Potential);
    }

    #[test]
    fn test_job_type_serde_uses_wire_names() {
        assert_eq!(
            serde_json::to_string(&JobType::OpenSource).unwrap(),
            "\"OPEN_SOURCE\""
        );
        assert_eq!(
            serde_json::from_str::<JobType>("\"FULL_TIME\"").unwrap(),
            JobType::FullTime
        );
    }

    #[test]
    fn test_priority_round_trip_and_order() {
        assert_eq!(Priority::ALL[0], Priority::High);
        assert_eq!("LOW".parse::<Priority>(), Ok(Priority::Low));
        assert!("URGENT".parse::<Priority>().is_err());
    }

    #[test]
    fn test_closed_statuses() {
        assert!(JobStatus::Rejected.is_closed());
        assert!(JobStatus::Discarded.is_closed());
        assert!(!JobStatus::Offer.is_closed());
    }

    #[test]
    fn test_display_is_wire_value() {
        assert_eq!(JobStatus::Interview.to_string(), "INTERVIEW");
        assert_eq!(Priority::Medium.to_string(), "MEDIUM");
        assert_eq!(JobType::PartTime.to_string(), "PART_TIME");
    }
}
