use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored contact-form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// `None` when the sender left the subject out or blank.
    pub subject: Option<String>,
    pub message: String,
    /// Server-side insert time. Never taken from the request.
    pub submitted_at: DateTime<Utc>,
}

/// A validated submission that has not been stored yet.
///
/// Only [`validate`](super::validate) can build one, so every value that
/// reaches a repository has non-blank required fields within their limits.
/// The repository assigns `id` and `submitted_at` when it inserts the row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubmission {
    name: String,
    email: String,
    subject: Option<String>,
    message: String,
}

impl NewSubmission {
    pub(crate) fn new(
        name: String,
        email: String,
        subject: Option<String>,
        message: String,
    ) -> Self {
        Self {
            name,
            email,
            subject,
            message,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Attach the storage-assigned identity and timestamp.
    pub fn into_submission(self, id: i64, submitted_at: DateTime<Utc>) -> Submission {
        Submission {
            id,
            name: self.name,
            email: self.email,
            subject: self.subject,
            message: self.message,
            submitted_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_into_submission_keeps_fields() {
        let new = NewSubmission::new(
            "Ann".to_string(),
            "ann@x.com".to_string(),
            Some("Hi".to_string()),
            "Hello".to_string(),
        );
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();

        let submission = new.into_submission(7, at);

        assert_eq!(submission.id, 7);
        assert_eq!(submission.name, "Ann");
        assert_eq!(submission.email, "ann@x.com");
        assert_eq!(submission.subject.as_deref(), Some("Hi"));
        assert_eq!(submission.message, "Hello");
        assert_eq!(submission.submitted_at, at);
    }

    #[test]
    fn test_submission_serializes_camel_case() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let submission = NewSubmission::new(
            "Ann".to_string(),
            "ann@x.com".to_string(),
            None,
            "Hello".to_string(),
        )
        .into_submission(1, at);

        let json = serde_json::to_value(&submission).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["submittedAt"], "2024-03-01T12:00:00Z");
        assert!(json["subject"].is_null());
        assert!(json.get("submitted_at").is_none());
    }
}
