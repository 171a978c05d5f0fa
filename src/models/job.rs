//! Job record as returned by `GET /jobs`.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::{JobStatus, JobType, Priority};

/// A generic key-value view of a job, keyed by wire field name.
pub type JobRecord = Map<String, Value>;

/// A single job application.
///
/// `status`, `priority` and `job_type` hold the raw wire strings. Values the
/// client does not recognise are kept as-is and rendered verbatim; use the
/// `*_kind()` accessors for a typed view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    pub status: String,
    pub priority: String,
    #[serde(rename = "type")]
    pub job_type: String,
    #[serde(default)]
    pub contact_website: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub score: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub technologies: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub requirements: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub benefits: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub responses: Vec<String>,
    #[serde(default)]
    pub comments: Option<String>,
    #[serde(default)]
    pub situation: Option<String>,
    #[serde(default)]
    pub date_added: Option<String>,
    #[serde(default)]
    pub date_modified: Option<String>,
}

/// Treat an explicit `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Job {
    /// Create a job with the required fields; everything else takes its default.
    pub fn new(
        id: i64,
        title: impl Into<String>,
        company: impl Into<String>,
        location: impl Into<String>,
        status: impl Into<String>,
        priority: impl Into<String>,
        job_type: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            company: company.into(),
            location: location.into(),
            status: status.into(),
            priority: priority.into(),
            job_type: job_type.into(),
            contact_website: None,
            description: None,
            score: 0,
            technologies: Vec::new(),
            requirements: Vec::new(),
            benefits: Vec::new(),
            responses: Vec::new(),
            comments: None,
            situation: None,
            date_added: None,
            date_modified: None,
        }
    }

    /// Build a job from a generic record.
    ///
    /// The four list fields default to empty when missing or `null`.
    pub fn from_record(record: JobRecord) -> Result<Self, serde_json::Error> {
        serde_json::from_value(Value::Object(record))
    }

    /// Convert to a generic record with every field present (`null` for unset
    /// optionals).
    pub fn to_record(&self) -> JobRecord {
        match serde_json::to_value(self) {
            Ok(Value::Object(record)) => record,
            _ => JobRecord::new(),
        }
    }

    pub fn status_kind(&self) -> Option<JobStatus> {
        self.status.parse().ok()
    }

    pub fn priority_kind(&self) -> Option<Priority> {
        self.priority.parse().ok()
    }

    pub fn type_kind(&self) -> Option<JobType> {
        self.job_type.parse().ok()
    }

    /// Calendar date the job was added, if the backend sent a parseable one.
    ///
    /// Accepts RFC 3339 timestamps, naive ISO timestamps and plain dates.
    pub fn added_on(&self) -> Option<NaiveDate> {
        self.date_added.as_deref().and_then(parse_date)
    }

    pub fn modified_on(&self) -> Option<NaiveDate> {
        self.date_modified.as_deref().and_then(parse_date)
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_job_json() -> Value {
        json!({
            "id": 7,
            "title": "Backend Engineer",
            "company": "Acme",
            "location": "Remote",
            "status": "APPLIED",
            "priority": "HIGH",
            "type": "FULL_TIME",
            "contact_website": "https://acme.example/jobs/7",
            "description": "Rust services",
            "score": 8,
            "technologies": ["rust", "postgres"],
            "requirements": ["5y experience"],
            "benefits": ["remote"],
            "responses": ["auto-reply"],
            "comments": "referral",
            "situation": "waiting",
            "date_added": "2024-03-01T09:30:00",
            "date_modified": "2024-03-04T12:00:00+00:00"
        })
    }

    #[test]
    fn test_deserialize_full_job() {
        let job: Job = serde_json::from_value(full_job_json()).unwrap();
        assert_eq!(job.id, 7);
        assert_eq!(job.job_type, "FULL_TIME");
        assert_eq!(job.technologies, vec!["rust", "postgres"]);
        assert_eq!(job.score, 8);
        assert_eq!(job.status_kind(), Some(JobStatus::Applied));
        assert_eq!(job.priority_kind(), Some(Priority::High));
        assert_eq!(job.type_kind(), Some(JobType::FullTime));
    }

    #[test]
    fn test_null_text_fields_become_empty() {
        let mut record = full_job_json();
        record["title"] = Value::Null;
        record["company"] = Value::Null;
        record.as_object_mut().unwrap().remove("location");

        let job: Job = serde_json::from_value(record).unwrap();
        assert_eq!(job.title, "");
        assert_eq!(job.company, "");
        assert_eq!(job.location, "");
        assert_eq!(job.id, 7);
    }

    #[test]
    fn test_list_with_one_null_title_still_parses() {
        let mut odd = full_job_json();
        odd["id"] = json!(8);
        odd["title"] = Value::Null;
        let jobs: Vec<Job> = serde_json::from_value(json!([full_job_json(), odd])).unwrap();

        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[1].title, "");
    }

    #[test]
    fn test_missing_optional_fields_take_defaults() {
        let record = json!({
            "id": 1,
            "title": "Intern",
            "company": "Beta",
            "location": "Berlin",
            "status": "WISHLIST",
            "priority": "LOW",
            "type": "INTERNSHIP"
        });
        let job: Job = serde_json::from_value(record).unwrap();

        assert_eq!(job.score, 0);
        assert!(job.technologies.is_empty());
        assert!(job.requirements.is_empty());
        assert!(job.benefits.is_empty());
        assert!(job.responses.is_empty());
        assert!(job.description.is_none());
        assert!(job.date_added.is_none());
    }

    #[test]
    fn test_null_lists_become_empty() {
        let mut value = full_job_json();
        value["technologies"] = Value::Null;
        value["responses"] = Value::Null;
        value["score"] = Value::Null;
        let job: Job = serde_json::from_value(value).unwrap();

        assert!(job.technologies.is_empty());
        assert!(job.responses.is_empty());
        assert_eq!(job.score, 0);
        assert_eq!(job.benefits, vec!["remote"]);
    }

    #[test]
    fn test_unknown_enum_values_pass_through() {
        let mut value = full_job_json();
        value["status"] = json!("ON_HOLD");
        let job: Job = serde_json::from_value(value).unwrap();

        assert_eq!(job.status, "ON_HOLD");
        assert_eq!(job.status_kind(), None);
    }

    #[test]
    fn test_missing_required_field_is_an_error() {
        let record = json!({ "id": 1, "title": "No company" });
        assert!(serde_json::from_value::<Job>(record).is_err());
    }

    #[test]
    fn test_to_record_has_every_key() {
        let job = Job::new(3, "SRE", "Gamma", "Paris", "OFFER", "MEDIUM", "CONTRACT");
        let record = job.to_record();

        assert_eq!(record.len(), 18);
        assert_eq!(record["type"], json!("CONTRACT"));
        assert_eq!(record["description"], Value::Null);
        assert_eq!(record["technologies"], json!([]));
        assert_eq!(record["score"], json!(0));
    }

    #[test]
    fn test_from_record_applies_list_defaults() {
        let job = Job::new(4, "Dev", "Delta", "Oslo", "IDEA", "LOW", "FREELANCE");
        let mut record = job.to_record();
        record.remove("technologies");
        record.insert("benefits".to_string(), Value::Null);

        let rebuilt = Job::from_record(record).unwrap();
        assert_eq!(rebuilt, job);
    }

    #[test]
    fn test_date_parsing_variants() {
        let mut job = Job::new(5, "Dev", "Eps", "Rome", "ACTIVE", "HIGH", "FULL_TIME");
        assert_eq!(job.added_on(), None);

        job.date_added = Some("2024-03-01T09:30:00.123456".to_string());
        assert_eq!(job.added_on(), NaiveDate::from_ymd_opt(2024, 3, 1));

        job.date_added = Some("2024-02-29".to_string());
        assert_eq!(job.added_on(), NaiveDate::from_ymd_opt(2024, 2, 29));

        job.date_modified = Some("2024-03-04T23:00:00-05:00".to_string());
        assert_eq!(job.modified_on(), NaiveDate::from_ymd_opt(2024, 3, 4));

        job.date_added = Some("yesterday".to_string());
        assert_eq!(job.added_on(), None);
    }
}
