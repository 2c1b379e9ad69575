//! Wire types for the contact endpoints.
//!
//! Pure data, no I/O. Shared by the server and its tests.

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/contact`.
///
/// Missing string fields deserialize as empty so that they surface as
/// "required" field errors from validation instead of a parse failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSubmissionRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default)]
    pub message: String,
}

impl CreateSubmissionRequest {
    /// Create a request without a subject.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: None,
            message: message.into(),
        }
    }

    /// Set the subject line.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }
}

/// Confirmation returned after a submission is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub message: String,
}

impl SubmissionReceipt {
    pub fn for_name(name: &str) -> Self {
        Self {
            message: format!("Thanks {name}! Your message has been received."),
        }
    }
}
