//! Media publishing entities: container status, in-flight job and outcome.

use serde::Serialize;
use std::fmt;

/// Processing status of a remote media container.
///
/// Remote values outside the known set are kept as [`ContainerStatus::Unknown`]
/// so new upstream statuses keep the poll loop going instead of failing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerStatus {
    /// Container requested, not yet polled.
    Created,
    InProgress,
    Finished,
    Error,
    Expired,
    Unknown(String),
}

impl ContainerStatus {
    /// Parses the `status_code` field of a container status response.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "IN_PROGRESS" => Self::InProgress,
            "FINISHED" => Self::Finished,
            "ERROR" => Self::Error,
            "EXPIRED" => Self::Expired,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for ContainerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => f.write_str("CREATED"),
            Self::InProgress => f.write_str("IN_PROGRESS"),
            Self::Finished => f.write_str("FINISHED"),
            Self::Error => f.write_str("ERROR"),
            Self::Expired => f.write_str("EXPIRED"),
            Self::Unknown(raw) => write!(f, "UNKNOWN({raw})"),
        }
    }
}

/// One in-flight publish attempt. Lives for a single publish call.
#[derive(Debug, Clone)]
pub struct MediaPublishJob {
    pub container_id: String,
    pub status: ContainerStatus,
    pub attempts: u32,
    pub media_id: Option<String>,
}

impl MediaPublishJob {
    /// Starts tracking a freshly created container.
    pub fn new(container_id: String) -> Self {
        Self {
            container_id,
            status: ContainerStatus::Created,
            attempts: 0,
            media_id: None,
        }
    }

    /// Records the result of one status poll.
    pub fn record_poll(&mut self, status: ContainerStatus) {
        self.attempts += 1;
        self.status = status;
    }
}

/// Result of a publish call. Failures are reported here, never raised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishOutcome {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_id: Option<String>,
    pub posted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PublishOutcome {
    pub fn posted(media_id: String) -> Self {
        Self {
            media_id: Some(media_id),
            posted: true,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            media_id: None,
            posted: false,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_statuses() {
        assert_eq!(ContainerStatus::parse("IN_PROGRESS"), ContainerStatus::InProgress);
        assert_eq!(ContainerStatus::parse("FINISHED"), ContainerStatus::Finished);
        assert_eq!(ContainerStatus::parse("ERROR"), ContainerStatus::Error);
        assert_eq!(ContainerStatus::parse("EXPIRED"), ContainerStatus::Expired);
    }

    #[test]
    fn test_parse_unknown_status() {
        let status = ContainerStatus::parse("PUBLISHED");
        assert_eq!(status, ContainerStatus::Unknown("PUBLISHED".to_string()));
    }

    #[test]
    fn test_job_records_polls() {
        let mut job = MediaPublishJob::new("c-1".to_string());
        assert_eq!(job.status, ContainerStatus::Created);

        job.record_poll(ContainerStatus::InProgress);
        job.record_poll(ContainerStatus::Finished);

        assert_eq!(job.attempts, 2);
        assert_eq!(job.status, ContainerStatus::Finished);
    }

    #[test]
    fn test_outcome_serialization_skips_empty_fields() {
        let json = serde_json::to_value(PublishOutcome::posted("m-1".to_string())).unwrap();
        assert_eq!(json, serde_json::json!({ "media_id": "m-1", "posted": true }));

        let json = serde_json::to_value(PublishOutcome::failed("boom")).unwrap();
        assert_eq!(json, serde_json::json!({ "posted": false, "error": "boom" }));
    }
}
